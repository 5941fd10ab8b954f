//! Container of resultant words.
use std::fmt;
use std::ops::Range;

/// Resultant word, copied out of the segmented text.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Word {
    text: String,
    byte_offset: usize,
    char_offset: usize,
    char_len: usize,
}

impl Word {
    #[inline(always)]
    pub(crate) const fn new(
        text: String,
        byte_offset: usize,
        char_offset: usize,
        char_len: usize,
    ) -> Self {
        Self {
            text,
            byte_offset,
            char_offset,
            char_len,
        }
    }

    /// Creates a word covering the whole of `text`.
    pub(crate) fn whole<S>(text: S) -> Self
    where
        S: Into<String>,
    {
        let text = text.into();
        let char_len = text.chars().count();
        Self::new(text, 0, 0, char_len)
    }

    /// Gets the surface string of the word.
    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gets the offset of the word in bytes.
    #[inline(always)]
    pub const fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Gets the offset of the word in codepoints.
    #[inline(always)]
    pub const fn char_offset(&self) -> usize {
        self.char_offset
    }

    /// Gets the length of the word in codepoints.
    #[inline(always)]
    pub const fn char_len(&self) -> usize {
        self.char_len
    }

    /// Gets the position range of the word in bytes.
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        self.byte_offset..self.byte_offset + self.text.len()
    }

    /// Gets the position range of the word in codepoints.
    #[inline(always)]
    pub const fn range_char(&self) -> Range<usize> {
        self.char_offset..self.char_offset + self.char_len
    }

    /// Consumes the word and returns its surface string.
    #[inline(always)]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Returns `text` as the only word, without any segmentation.
pub fn single_word<S>(text: S) -> Vec<Word>
where
    S: Into<String>,
{
    vec![Word::whole(text)]
}

/// Joins the surfaces of `words` with a single space.
pub fn join_words(words: &[Word]) -> String {
    let mut joined = String::new();
    for (i, w) in words.iter().enumerate() {
        if i != 0 {
            joined.push(' ');
        }
        joined.push_str(w.text());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        let words = single_word("北京abc");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "北京abc");
        assert_eq!(words[0].range_byte(), 0..9);
        assert_eq!(words[0].range_char(), 0..5);
    }

    #[test]
    fn test_join_words() {
        let words = vec![
            Word::new("ab".to_string(), 0, 0, 2),
            Word::new("c".to_string(), 3, 3, 1),
        ];
        assert_eq!(join_words(&words), "ab c");
        assert_eq!(join_words(&[]), "");
    }
}
