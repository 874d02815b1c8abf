//! Line tokenizer.
//!
//! The assembler works a line at a time rather than building a full AST,
//! so the tokenizer here is deliberately narrow: split on the fixed
//! delimiter set and cap at five slots. A small hand-written scanner with
//! its own unit tests, not a regex.

/// At most five token slots per line: mnemonic/label plus up to three
/// operands (or a shifted-left label-bearing line).
pub const MAX_TOKEN_SLOTS: usize = 5;

const DELIMITERS: [char; 5] = [' ', '\t', ',', '(', ')'];

/// A fixed-capacity, left-packed array of token slots, padded with empty
/// strings past `count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSlots {
    slots: [String; MAX_TOKEN_SLOTS],
    count: usize,
}

impl TokenSlots {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Slot `i`, or `""` if `i >= count()`.
    pub fn get(&self, i: usize) -> &str {
        self.slots.get(i).map(String::as_str).unwrap_or("")
    }

    pub fn as_slice(&self) -> &[String] {
        &self.slots[..self.count]
    }

    /// Overwrite this line's slots with `tokens`, truncated/padded to
    /// `MAX_TOKEN_SLOTS`. Used by pseudo-instruction expansion to rewrite
    /// the token array before re-dispatching. Produces a fresh
    /// `TokenSlots` rather than mutating shared state in place, so two
    /// expansions can never alias each other's buffers.
    pub fn from_strs(tokens: &[&str]) -> Self {
        let mut slots: [String; MAX_TOKEN_SLOTS] = Default::default();
        for (slot, tok) in slots.iter_mut().zip(tokens.iter()) {
            *slot = (*tok).to_string();
        }
        TokenSlots {
            slots,
            count: tokens.len().min(MAX_TOKEN_SLOTS),
        }
    }

    /// Lowercases slot 0 (the mnemonic) in place. A no-op on an empty line.
    pub fn lowercase_mnemonic(&mut self) {
        if self.count > 0 {
            self.slots[0] = self.slots[0].to_lowercase();
        }
    }

    /// Drops slot 0 and shifts the remainder left by one, used when a
    /// label co-exists with an instruction on the same line.
    fn shift_left(&mut self) {
        for i in 1..MAX_TOKEN_SLOTS {
            self.slots[i - 1] = std::mem::take(&mut self.slots[i]);
        }
        self.slots[MAX_TOKEN_SLOTS - 1] = String::new();
        self.count = self.count.saturating_sub(1);
    }
}

/// Splits `line` into at most five token slots using the delimiter set
/// `{space, tab, comma, '(', ')'}`. Delimiter runs collapse; delimiters
/// are not preserved.
pub fn tokenize_line(line: &str) -> TokenSlots {
    let mut slots: [String; MAX_TOKEN_SLOTS] = Default::default();
    let mut count = 0;

    for piece in line.split(|c| DELIMITERS.contains(&c)) {
        if piece.is_empty() {
            continue;
        }
        if count == MAX_TOKEN_SLOTS {
            break;
        }
        slots[count] = piece.to_string();
        count += 1;
    }

    TokenSlots { slots, count }
}

/// The classification a tokenized line falls into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    Comment,
    /// First token begins with `.`; silently accepted, no emission.
    Directive,
    /// Only a label was present on the line.
    LabelOnly { name: String },
    /// A label shares the line with a real instruction; `tokens` has
    /// already been shifted left so slot 0 is the mnemonic.
    LabelWithInstruction { name: String },
    Instruction,
}

/// Classifies a line's tokens and, for a label-plus-instruction line,
/// shifts the token array left in place so the caller can treat `tokens`
/// uniformly as an instruction line afterwards.
pub fn classify(tokens: &mut TokenSlots) -> LineKind {
    if tokens.is_empty() {
        return LineKind::Empty;
    }

    let first = tokens.get(0);

    if first.starts_with('#') {
        return LineKind::Comment;
    }

    if first.starts_with('.') {
        return LineKind::Directive;
    }

    if let Some(name) = first.strip_suffix(':') {
        let name = name.to_string();
        if tokens.count() == 1 {
            return LineKind::LabelOnly { name };
        }
        tokens.shift_left();
        return LineKind::LabelWithInstruction { name };
    }

    LineKind::Instruction
}
