//! Lazy line reader: a finite sequence of `(1-based line number, line
//! text)` pairs.

/// Iterates a source buffer line by line, pairing each with its 1-based
/// line number. Both passes re-read the same underlying source via a
/// fresh `LineReader`, so they observe an identical line sequence.
pub struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    next_line_number: i32,
}

impl<'a> LineReader<'a> {
    pub fn new(source: &'a str) -> Self {
        LineReader {
            lines: source.lines(),
            next_line_number: 1,
        }
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = (i32, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        let number = self.next_line_number;
        self.next_line_number += 1;
        Some((number, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_lines_from_one() {
        let src = "addi x1, x0, 1\njal x1, _start\n";
        let lines: Vec<_> = LineReader::new(src).collect();
        assert_eq!(lines, vec![(1, "addi x1, x0, 1"), (2, "jal x1, _start")]);
    }

    #[test]
    fn empty_source_yields_no_lines() {
        assert_eq!(LineReader::new("").count(), 0);
    }
}
