use std::fmt;

/// `fmt::Write` adapter that appends to a byte buffer but never grows it past
/// `limit`.
///
/// Once a write does not fit, as much of it as ends on a character boundary
/// is kept and every later write fails, which stops `write!` early instead of
/// formatting the rest of an oversized message.
pub(crate) struct BoundedWriter<'a> {
    buf: &'a mut Vec<u8>,
    limit: usize,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    pub(crate) fn new(buf: &'a mut Vec<u8>, limit: usize) -> Self {
        Self {
            buf,
            limit,
            truncated: false,
        }
    }

    pub(crate) fn truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Err(fmt::Error);
        }

        let room = self.limit.saturating_sub(self.buf.len());
        if s.len() <= room {
            self.buf.extend_from_slice(s.as_bytes());
            return Ok(());
        }

        let mut cut = room;
        while cut > 0 && !s.is_char_boundary(cut) {
            cut -= 1;
        }
        if let Some(head) = s.get(..cut) {
            self.buf.extend_from_slice(head.as_bytes());
        }
        self.truncated = true;
        Err(fmt::Error)
    }
}
