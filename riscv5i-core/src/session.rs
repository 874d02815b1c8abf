//! Arena-owned source buffers.
//!
//! A `Session` hands out a `Bump` arena and owns every source buffer it
//! reads, so the line reader and every token slice can borrow `&'a str`
//! without fighting the borrow checker over `String` ownership. This
//! engine reads exactly one source, but the arena still keeps everything
//! borrowed from one long-lived buffer instead of re-allocating per line.

use bumpalo::Bump;

pub struct Session<'a> {
    bump: &'a Bump,
}

impl<'a> Session<'a> {
    pub fn new(bump: &'a Bump) -> Session<'a> {
        Session { bump }
    }

    /// Moves `contents` into the arena and returns a borrow tied to the
    /// session's lifetime.
    pub fn add_src(&self, contents: String) -> &'a str {
        self.bump.alloc(contents)
    }
}
