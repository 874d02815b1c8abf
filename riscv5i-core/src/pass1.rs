//! Label harvester: pass one.

use crate::error::LineError;
use crate::instruction::pseudo;
use crate::line_reader::LineReader;
use crate::symbol::SymbolTable;
use crate::token::{classify, tokenize_line, LineKind};

/// Walks `source` once, building the full symbol table. `instructionIndex`
/// advances by the true expanded word count of each line rather than
/// always by one, so a line containing `li` is already counted correctly
/// here and pass two's indices agree with it.
pub fn harvest(source: &str) -> Result<SymbolTable, LineError> {
    let mut symbols = SymbolTable::new();
    let mut instruction_index: i32 = 0;

    for (line_number, line) in LineReader::new(source) {
        let mut tokens = tokenize_line(line);
        match classify(&mut tokens) {
            LineKind::Empty | LineKind::Comment | LineKind::Directive => {}
            LineKind::LabelOnly { name } => {
                symbols
                    .declare(&name, instruction_index, line_number)
                    .map_err(|kind| LineError::new(line_number, kind))?;
            }
            LineKind::LabelWithInstruction { name } => {
                symbols
                    .declare(&name, instruction_index, line_number)
                    .map_err(|kind| LineError::new(line_number, kind))?;
                let expansion = pseudo::expand(&tokens).map_err(|kind| LineError::new(line_number, kind))?;
                instruction_index += expansion.word_count();
            }
            LineKind::Instruction => {
                let expansion = pseudo::expand(&tokens).map_err(|kind| LineError::new(line_number, kind))?;
                instruction_index += expansion.word_count();
            }
        }
    }

    Ok(symbols)
}
