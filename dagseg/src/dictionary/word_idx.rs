use bincode::{Decode, Encode};

/// Identifier of a dictionary entry.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Decode, Encode)]
#[repr(transparent)]
pub struct WordIdx(u32);

impl WordIdx {
    /// Creates a new instance.
    #[inline(always)]
    pub(crate) const fn new(word_id: u32) -> Self {
        Self(word_id)
    }

    /// Gets the position of the entry in its dictionary.
    #[inline(always)]
    pub const fn word_id(self) -> u32 {
        self.0
    }
}
