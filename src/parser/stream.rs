//! A consumable view over the input text

/// Position in the input; everything before it has been consumed.
///
/// Streams are `Copy`: a parse step takes one by value and hands back the
/// stream positioned after whatever it consumed. Keeping the full text
/// around lets errors report byte spans into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stream<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Stream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Resume a stream at a byte position; clamps to the end of the text
    pub fn at(text: &'a str, pos: usize) -> Self {
        Self {
            text,
            pos: pos.min(text.len()),
        }
    }

    /// The unconsumed remainder
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Byte offset of the remainder within the full text
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// True when only whitespace remains
    pub fn is_exhausted(&self) -> bool {
        self.rest().trim().is_empty()
    }

    pub fn skip_whitespace(self) -> Self {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        self.advance(skipped)
    }

    /// Consume `len` bytes; `len` must fall on a char boundary of the remainder
    pub fn advance(self, len: usize) -> Self {
        Self::at(self.text, self.pos + len)
    }

    /// Consume one character if it is `expected`
    pub fn eat(self, expected: char) -> Option<Self> {
        match self.peek() {
            Some(c) if c == expected => Some(self.advance(c.len_utf8())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace() {
        let stream = Stream::new("  \n [A]").skip_whitespace();
        assert_eq!(stream.rest(), "[A]");
        assert_eq!(stream.offset(), 4);
    }

    #[test]
    fn test_eat() {
        let stream = Stream::new("{x}");
        assert_eq!(stream.eat('[').map(|s| s.offset()), None);
        assert_eq!(stream.eat('{').map(|s| s.rest()), Some("x}"));
    }

    #[test]
    fn test_exhausted() {
        assert!(Stream::new(" \t\n").is_exhausted());
        assert!(!Stream::new(" x").is_exhausted());
        assert!(Stream::at("abc", 10).is_exhausted());
    }
}
