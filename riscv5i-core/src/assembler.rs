//! Top-level orchestration: pass one, then pass two, then done.
//!
//! The two passes are pure functions operating on an explicit
//! `AssemblerContext` rather than methods on a stateful struct, since
//! there is no mutable-across-calls state this pipeline needs to carry.

use std::io::Write;

use crate::context::AssemblerContext;
use crate::error::AssemblerError;
use crate::output::OutputSink;
use crate::pass1;
use crate::pass2;

/// Assembles `source` under `ctx`, writing encoded words to `writer` in
/// `ctx.format`. Returns the number of instruction words emitted.
///
/// Pass one (`pass1::harvest`) completes in full before pass two
/// (`pass2::dispatch`) begins.
pub fn assemble(
    source: &str,
    ctx: &AssemblerContext,
    writer: &mut dyn Write,
) -> Result<usize, AssemblerError> {
    let symbols = pass1::harvest(source)?;

    let mut sink = OutputSink::new(writer, ctx.format);
    pass2::dispatch(source, &symbols, ctx, &mut sink)?;

    Ok(sink.words_written())
}

/// Convenience wrapper returning the assembled bytes directly, used by
/// tests and by any caller that doesn't need to stream to a file.
pub fn assemble_to_vec(source: &str, ctx: &AssemblerContext) -> Result<Vec<u8>, AssemblerError> {
    let mut buf = Vec::new();
    assemble(source, ctx, &mut buf)?;
    Ok(buf)
}
