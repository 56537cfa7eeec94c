use super::ReadBuffer;

/// A bounded view over a parent [`ReadBuffer`]
///
/// Length-delimited content (nested messages, packed arrays) is decoded
/// through a section whose budget is the declared length. Every operation
/// checks the remaining budget before it touches the parent, so a nested
/// decoder can never consume bytes that belong to the enclosing message,
/// however malformed the nested content is. No bytes are copied.
#[derive(Debug)]
pub struct ReadBufferSection<'a, R: ReadBuffer + ?Sized> {
    parent: &'a mut R,
    remaining: u32,
    max_size: u32,
}

impl<'a, R: ReadBuffer + ?Sized> ReadBufferSection<'a, R> {
    /// Creates a section of `size` bytes starting at the parent's read position
    ///
    /// The budget is capped to what the parent still holds.
    pub fn new(parent: &'a mut R, size: u32) -> Self {
        let budget = size.min(parent.size());
        Self {
            parent,
            remaining: budget,
            max_size: budget,
        }
    }

    /// True once the whole budget has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl<R: ReadBuffer + ?Sized> ReadBuffer for ReadBufferSection<'_, R> {
    fn size(&self) -> u32 {
        self.remaining
    }

    fn max_size(&self) -> u32 {
        self.max_size
    }

    fn peek(&self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.parent.peek()
    }

    fn advance(&mut self) -> bool {
        if self.remaining == 0 || !self.parent.advance() {
            return false;
        }
        self.remaining -= 1;
        true
    }

    fn advance_by(&mut self, n: u32) -> bool {
        if n > self.remaining || !self.parent.advance_by(n) {
            return false;
        }
        self.remaining -= n;
        true
    }

    fn pop(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let byte = self.parent.pop()?;
        self.remaining -= 1;
        Some(byte)
    }
}
