//! JSON-like debug rendering into caller-owned memory.
//!
//! Nothing here allocates. Output goes into a [`StringView`] over a byte
//! slice the caller provides, and anything past its capacity is dropped. The
//! view is passed by value through every field's `dump` and handed back, so
//! nested fields chain naturally:
//!
//! ```
//! use fixproto_core::{dump::StringView, Field, UInt32};
//!
//! let mut storage = [0u8; 32];
//! let mut value = UInt32::default();
//! value.set(7);
//!
//! let view = value.dump(StringView::new(&mut storage), 0, Some("count"), true);
//! assert_eq!(view.as_str(), "\"count\": 7");
//! ```

use core::fmt::{self, Write};

/// A bounded text sink over a borrowed byte slice
///
/// Writes past the end are silently truncated, always on a `char` boundary,
/// so [`as_str`](Self::as_str) stays valid UTF-8. Once anything has been
/// dropped every later write is dropped too.
#[derive(Debug)]
pub struct StringView<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl<'a> StringView<'a> {
    /// Creates an empty view that writes into `buf`
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            truncated: false,
        }
    }

    /// The text written so far
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    /// Number of bytes written
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes still free
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    /// True once output has been dropped for lack of room
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Write for StringView<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        let mut take = s.len().min(self.remaining());
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        if take < s.len() {
            self.truncated = true;
        }

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

/// Writes what precedes a field's value: the separator from the previous
/// field, the indentation and the quoted name
///
/// Unnamed values (repeated elements, the top-level message) get neither
/// indentation nor name.
pub(crate) fn open_field(view: &mut StringView<'_>, indent: usize, name: Option<&str>, first: bool) {
    if !first {
        let _ = view.write_str(",\n");
    }
    if let Some(name) = name {
        write_indent(view, indent);
        let _ = write!(view, "\"{name}\": ");
    }
}

pub(crate) fn write_indent(view: &mut StringView<'_>, indent: usize) {
    for _ in 0..indent {
        let _ = view.write_char(' ');
    }
}

/// Writes `bytes` as a quoted, escaped string; invalid UTF-8 becomes U+FFFD
pub(crate) fn write_quoted(view: &mut StringView<'_>, bytes: &[u8]) {
    let _ = view.write_char('"');
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            let _ = match c {
                '"' => view.write_str("\\\""),
                '\\' => view.write_str("\\\\"),
                '\n' => view.write_str("\\n"),
                '\r' => view.write_str("\\r"),
                '\t' => view.write_str("\\t"),
                c if c.is_control() => write!(view, "\\u{:04x}", u32::from(c)),
                c => view.write_char(c),
            };
        }
        if !chunk.invalid().is_empty() {
            let _ = view.write_char(char::REPLACEMENT_CHARACTER);
        }
    }
    let _ = view.write_char('"');
}

/// Writes `bytes` as `[0x01, 0x02]`
pub(crate) fn write_hex_list(view: &mut StringView<'_>, bytes: &[u8]) {
    let _ = view.write_char('[');
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            let _ = view.write_str(", ");
        }
        let _ = write!(view, "0x{byte:02x}");
    }
    let _ = view.write_char(']');
}
