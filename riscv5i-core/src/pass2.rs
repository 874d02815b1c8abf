//! Instruction dispatcher: pass two.

use crate::context::AssemblerContext;
use crate::error::{AssemblerError, LineError};
use crate::instruction::{encode_real_instruction, pseudo};
use crate::line_reader::LineReader;
use crate::output::OutputSink;
use crate::symbol::SymbolTable;
use crate::token::{classify, tokenize_line, LineKind};

/// Re-reads `source`, encoding and emitting every real instruction word.
/// `symbols` must be the table `pass1::harvest` built over the identical
/// source, since both passes must observe the same line sequence.
pub fn dispatch(
    source: &str,
    symbols: &SymbolTable,
    ctx: &AssemblerContext,
    sink: &mut OutputSink,
) -> Result<(), AssemblerError> {
    let mut instruction_index: i64 = 0;

    for (line_number, line) in LineReader::new(source) {
        let mut tokens = tokenize_line(line);
        let kind = classify(&mut tokens);

        let is_instruction_line = matches!(
            kind,
            LineKind::Instruction | LineKind::LabelWithInstruction { .. }
        );
        if !is_instruction_line {
            continue;
        }

        let mut lowered = tokens.clone();
        lowered.lowercase_mnemonic();

        let expansion = pseudo::expand(&lowered).map_err(|kind| LineError::new(line_number, kind))?;
        let real_lines = match expansion {
            crate::instruction::pseudo::Expansion::Real(one) => vec![one],
            crate::instruction::pseudo::Expansion::Pseudo(many) => many,
        };

        for real in &real_lines {
            let current_byte_address = ctx.byte_address(instruction_index);
            let word = encode_real_instruction(real, symbols, ctx.start_of_memory, current_byte_address)
                .map_err(|kind| LineError::new(line_number, kind))?;
            sink.write_word(word)?;
            instruction_index += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::OutputFormat;
    use crate::pass1::harvest;

    fn assemble_hex(source: &str) -> String {
        let symbols = harvest(source).unwrap();
        let ctx = AssemblerContext::new(0, OutputFormat::Hex).unwrap();
        let mut buf = Vec::new();
        {
            let mut sink = OutputSink::new(&mut buf, OutputFormat::Hex);
            dispatch(source, &symbols, &ctx, &mut sink).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn assembles_the_spec_scenarios() {
        assert_eq!(assemble_hex("addi x1, x2, 3\n"), "0x00310093\n");
        assert_eq!(assemble_hex("srl x1, x2, x3\n"), "0x003150b3\n");
        assert_eq!(assemble_hex("sw x1, 3(x2)\n"), "0x001121a3\n");
        assert_eq!(assemble_hex("lui x1, 3\n"), "0x000030b7\n");
        assert_eq!(assemble_hex("lw x1, 3(x2)\n"), "0x00312083\n");
    }

    #[test]
    fn li_emits_two_words() {
        let output = assemble_hex("li x5, 0x00000FFF\n");
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn backward_jal_encodes_the_spec_scenario() {
        // Instruction 0 is `addi x1, x0, 1`; instruction 1 is
        // `jal x1, _start`, jumping back to instruction 0 (offset -4 bytes).
        let output = assemble_hex("_start: addi x1, x0, 1\njal x1, _start\n");
        let mut lines = output.lines();
        assert_eq!(lines.next().unwrap(), "0x00100093");
        assert_eq!(lines.next().unwrap(), "0xffdff0ef");
    }

    #[test]
    fn comments_and_directives_emit_nothing() {
        let output = assemble_hex("# comment\n.text\naddi x0, x0, 0\n");
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn unknown_mnemonic_errors_with_its_line_number() {
        let symbols = harvest("addi x0, x0, 0\nbogus x1\n").unwrap();
        let ctx = AssemblerContext::new(0, OutputFormat::Hex).unwrap();
        let mut buf = Vec::new();
        let mut sink = OutputSink::new(&mut buf, OutputFormat::Hex);
        let err = dispatch("addi x0, x0, 0\nbogus x1\n", &symbols, &ctx, &mut sink).unwrap_err();
        match err {
            AssemblerError::Source(line_err) => assert_eq!(line_err.line, 2),
            AssemblerError::Io(_) => panic!("expected a source error"),
        }
    }
}
