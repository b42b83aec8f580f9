use chrono::NaiveDateTime;
use std::fmt::{self, Write};

use crate::record::bounded::BoundedWriter;
use crate::record::CallSite;
use crate::severity::Severity;

pub const COLOR_RESET: &str = "\x1b[0m";

/// Smallest buffer a logger accepts; leaves room for the header and the
/// reserved tail.
pub const MIN_BUFSIZE: usize = 64;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Outcome of rendering one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rendered {
    pub len: usize,
    pub truncated: bool,
}

/// Render a record into `buf`, replacing its previous contents.
///
/// The rendered record never exceeds `capacity` bytes: the color reset and
/// the newline are reserved up front and the message is cut to fit whatever
/// room the header leaves.
pub fn render(
    buf: &mut Vec<u8>,
    capacity: usize,
    now: NaiveDateTime,
    level: Severity,
    color: bool,
    site: Option<&CallSite<'_>>,
    args: fmt::Arguments<'_>,
) -> Rendered {
    buf.clear();

    let color = if color { level.color() } else { "" };
    let reset = if color.is_empty() { "" } else { COLOR_RESET };
    let limit = capacity.saturating_sub(reset.len() + 1);

    let mut writer = BoundedWriter::new(buf, limit);
    // Errors only mean the buffer is full; the truncated flag records it.
    let _ = writer.write_str(color);
    let _ = write!(
        writer,
        "[{}][{}] ",
        now.format(TIMESTAMP_FORMAT),
        level.tag()
    );
    let _ = writer.write_fmt(args);
    if let Some(site) = site {
        let _ = write!(writer, " {site}");
    }
    let truncated = writer.truncated();

    if !truncated && buf.last() == Some(&b'\n') {
        buf.pop();
    }
    buf.extend_from_slice(reset.as_bytes());
    buf.push(b'\n');

    Rendered {
        len: buf.len(),
        truncated,
    }
}
