//! Black-box integration tests exercising the public `riscv5i_core` API
//! end-to-end: tokenizer -> pass one -> pass two -> output bytes.

use riscv5i_core::error::AssemblerError;
use riscv5i_core::{assemble_to_vec, AssemblerContext, OutputFormat};

fn hex_words(source: &str) -> Vec<String> {
    let ctx = AssemblerContext::new(0, OutputFormat::Hex).unwrap();
    let bytes = assemble_to_vec(source, &ctx).unwrap();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn binary_words(source: &str, start_of_memory: u32) -> Vec<u32> {
    let ctx = AssemblerContext::new(start_of_memory, OutputFormat::Binary).unwrap();
    let bytes = assemble_to_vec(source, &ctx).unwrap();
    bytes
        .chunks_exact(4)
        .map(|w| u32::from_le_bytes([w[0], w[1], w[2], w[3]]))
        .collect()
}

// --- concrete worked scenarios ---------------------------------------------

#[test]
fn scenario_addi() {
    assert_eq!(hex_words("addi x1, x2, 3\n"), vec!["0x00310093"]);
}

#[test]
fn scenario_srl() {
    assert_eq!(hex_words("srl x1, x2, x3\n"), vec!["0x003150b3"]);
}

#[test]
fn scenario_sw() {
    assert_eq!(hex_words("sw x1, 3(x2)\n"), vec!["0x001121a3"]);
}

#[test]
fn scenario_lui() {
    assert_eq!(hex_words("lui x1, 3\n"), vec!["0x000030b7"]);
}

#[test]
fn scenario_lw() {
    assert_eq!(hex_words("lw x1, 3(x2)\n"), vec!["0x00312083"]);
}

#[test]
fn scenario_backward_jal_to_loop_start() {
    let source = "_start:\n    addi x1, x0, 1\n    jal  x1, _start\n";
    let words = hex_words(source);
    assert_eq!(words, vec!["0x00100093", "0xffdff0ef"]);
}

#[test]
fn scenario_li_with_bit_11_set_wraps_upper_immediate() {
    let words = hex_words("li x5, 0x00000FFF\n");
    assert_eq!(words.len(), 2);
    // lui x5, 0xFFFFF (upper20 decremented by one to compensate for addi's
    // sign extension, since bit 11 of 0xFFF is set).
    assert_eq!(words[0], "0xfffff2b7");
    // addi x5, x5, 0xFFF, which sign-extends back to +0xFFF overall.
    assert_eq!(words[1], "0xfff28293");
}

// --- boundary cases ---------------------------------------------------------

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(binary_words("", 0), Vec::<u32>::new());
}

#[test]
fn comments_and_directives_only_yield_empty_output() {
    let source = "# just a comment\n.text\n.globl _start\n";
    assert_eq!(binary_words(source, 0), Vec::<u32>::new());
}

#[test]
fn label_sharing_a_line_with_an_instruction_emits_that_instruction() {
    let words = binary_words("_start: addi x1, x0, 5\n", 0);
    assert_eq!(words.len(), 1);
}

#[test]
fn backward_branch_offset_of_exactly_2048_bytes_succeeds() {
    // 2048 bytes == 512 instructions; place the label exactly there.
    let mut source = String::from("top:\n");
    for _ in 0..512 {
        source.push_str("    addi x0, x0, 0\n");
    }
    source.push_str("    beq x1, x2, top\n");
    let ctx = AssemblerContext::new(0, OutputFormat::Binary).unwrap();
    assert!(assemble_to_vec(&source, &ctx).is_ok());
}

#[test]
fn backward_branch_offset_just_past_2048_bytes_fails() {
    let mut source = String::from("top:\n");
    for _ in 0..513 {
        source.push_str("    addi x0, x0, 0\n");
    }
    source.push_str("    beq x1, x2, top\n");
    let ctx = AssemblerContext::new(0, OutputFormat::Binary).unwrap();
    let err = assemble_to_vec(&source, &ctx).unwrap_err();
    match err {
        AssemblerError::Source(line_err) => {
            assert!(matches!(
                line_err.kind,
                riscv5i_core::ErrorKind::BranchNeedsTrampoline(_)
                    | riscv5i_core::ErrorKind::BranchTooFar(_)
            ));
        }
        AssemblerError::Io(_) => panic!("expected a source error"),
    }
}

#[test]
fn forward_branch_offset_of_exactly_2048_bytes_succeeds() {
    // The branch comes first this time and its target label sits 512
    // instructions later, so this exercises the positive-offset direction
    // of the same boundary the backward-branch test above exercises in
    // the negative direction. Both must succeed at the same magnitude.
    let mut source = String::from("    beq x1, x2, target\n");
    for _ in 0..512 {
        source.push_str("    addi x0, x0, 0\n");
    }
    source.push_str("target:\n");
    let ctx = AssemblerContext::new(0, OutputFormat::Binary).unwrap();
    assert!(assemble_to_vec(&source, &ctx).is_ok());
}

#[test]
fn forward_branch_offset_just_past_2048_bytes_fails() {
    let mut source = String::from("    beq x1, x2, target\n");
    for _ in 0..513 {
        source.push_str("    addi x0, x0, 0\n");
    }
    source.push_str("target:\n");
    let ctx = AssemblerContext::new(0, OutputFormat::Binary).unwrap();
    let err = assemble_to_vec(&source, &ctx).unwrap_err();
    match err {
        AssemblerError::Source(line_err) => {
            assert!(matches!(
                line_err.kind,
                riscv5i_core::ErrorKind::BranchNeedsTrampoline(_)
                    | riscv5i_core::ErrorKind::BranchTooFar(_)
            ));
        }
        AssemblerError::Io(_) => panic!("expected a source error"),
    }
}

// --- testable invariants -----------------------------------------

#[test]
fn round_trip_word_count_matches_non_label_lines() {
    let source = "\
_start:
    addi x1, x0, 1
    addi x2, x0, 2
    add  x3, x1, x2
    sw   x3, 0(x0)
    beq  x1, x2, _start
";
    let words = binary_words(source, 0);
    assert_eq!(words.len(), 5);
}

#[test]
fn determinism_across_runs() {
    let source = "addi x1, x0, 7\nsub x2, x1, x0\n";
    let first = binary_words(source, 0);
    let second = binary_words(source, 0);
    assert_eq!(first, second);
}

#[test]
fn hex_output_is_textual_rendering_of_binary_output() {
    let source = "addi x1, x2, 3\nsrl x1, x2, x3\nsw x1, 3(x2)\n";
    let binary = binary_words(source, 0);
    let hex = hex_words(source);
    assert_eq!(binary.len(), hex.len());
    for (word, line) in binary.iter().zip(hex.iter()) {
        assert_eq!(format!("0x{:08x}", word), *line);
    }
}

#[test]
fn encoding_isolation_branch_target_does_not_depend_on_unrelated_lines() {
    let a = "a:\n    addi x0, x0, 0\nb:\n    beq x1, x2, a\n";
    // Comments and directives never advance the instruction index, so
    // inserting them must not change the `beq`'s encoded offset even
    // though the source text around it differs.
    let b = "a:\n# noise\n.text\n    addi x0, x0, 0\n# more noise\nb:\n    beq x1, x2, a\n";
    assert_eq!(binary_words(a, 0), binary_words(b, 0));
}

#[test]
fn address_linearity_with_nonzero_start_of_memory() {
    let source = "addi x0, x0, 0\naddi x0, x0, 0\n";
    // Non-branch instructions don't embed an absolute address at all, so
    // their encoding is unaffected by `start_of_memory`.
    assert_eq!(binary_words(source, 0x1000), binary_words(source, 0));
}

#[test]
fn branch_symmetry_zero_offset_when_label_resolves_to_self() {
    let words = binary_words("here: beq x1, x2, here\n", 0);
    assert_eq!(words.len(), 1);
    let word = words[0];
    // imm bits (31, 30:25, 11:8, 7) must all be zero.
    assert_eq!(word & 0xFE000F80, 0);
}

// --- error handling -----------------------------------------------------

#[test]
fn unknown_mnemonic_is_fatal_and_names_the_line() {
    let ctx = AssemblerContext::new(0, OutputFormat::Binary).unwrap();
    let err = assemble_to_vec("addi x0, x0, 0\nfrobnicate x1, x2\n", &ctx).unwrap_err();
    match err {
        AssemblerError::Source(line_err) => {
            assert_eq!(line_err.line, 2);
            assert!(matches!(
                line_err.kind,
                riscv5i_core::ErrorKind::UnknownMnemonic(_)
            ));
        }
        AssemblerError::Io(_) => panic!("expected a source error"),
    }
}

#[test]
fn undefined_label_reference_is_fatal() {
    let ctx = AssemblerContext::new(0, OutputFormat::Binary).unwrap();
    let err = assemble_to_vec("beq x1, x2, nowhere\n", &ctx).unwrap_err();
    match err {
        AssemblerError::Source(line_err) => {
            assert!(matches!(
                line_err.kind,
                riscv5i_core::ErrorKind::UndefinedLabel(_)
            ));
        }
        AssemblerError::Io(_) => panic!("expected a source error"),
    }
}

#[test]
fn duplicate_label_is_rejected() {
    let ctx = AssemblerContext::new(0, OutputFormat::Binary).unwrap();
    let err = assemble_to_vec("a:\naddi x0, x0, 0\na:\naddi x0, x0, 0\n", &ctx).unwrap_err();
    match err {
        AssemblerError::Source(line_err) => {
            assert!(matches!(
                line_err.kind,
                riscv5i_core::ErrorKind::DuplicateLabel { .. }
            ));
        }
        AssemblerError::Io(_) => panic!("expected a source error"),
    }
}

#[test]
fn misaligned_start_of_memory_is_rejected_up_front() {
    let err = AssemblerContext::new(3, OutputFormat::Binary).unwrap_err();
    assert!(matches!(
        err,
        riscv5i_core::ErrorKind::MisalignedStartOfMemory(3)
    ));
}

// --- pseudo-instruction counting ---------------------------------------------

#[test]
fn forward_label_after_li_resolves_to_the_post_expansion_index() {
    // `li` expands to two words; a label declared right after it must
    // resolve to instruction index 2, not 1, or forward references across
    // an `li` would resolve one instruction short.
    let source = "li x5, 1\nhere:\njal x0, here\n";
    let words = binary_words(source, 0);
    assert_eq!(words.len(), 3);
    // The jal is instruction index 2, targeting itself -> zero offset.
    let jal_word = words[2];
    assert_eq!(jal_word & 0xFFFFF000, 0);
}

// --- pseudo-instructions end to end -----------------------------------------

#[test]
fn mv_expands_and_encodes_as_addi() {
    assert_eq!(hex_words("mv x3, x4\n"), hex_words("addi x3, x4, 0\n"));
}

#[test]
fn jr_expands_and_encodes_as_jalr() {
    assert_eq!(hex_words("jr x5\n"), hex_words("jalr x0, 0, x5\n"));
}

#[test]
fn nop_and_noop_both_encode_as_addi_zero() {
    assert_eq!(hex_words("nop\n"), hex_words("addi x0, x0, 0\n"));
    assert_eq!(hex_words("noop\n"), hex_words("addi x0, x0, 0\n"));
}
