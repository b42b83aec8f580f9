//! Record rendering.
//!
//! A record is rendered as
//!
//! ```text
//! [2026-10-19 10:42:07.015][INFO ] message [main.rs:42:my_app::server]
//! ```
//!
//! into a byte buffer of fixed capacity owned by the logger. The trailing
//! call-site is only present when one is passed explicitly. Messages that do
//! not fit are cut at a character boundary; the record is still terminated by
//! a newline (and a color reset when colored), so a truncated record never
//! bleeds into the next one.

mod bounded;
mod call_site;
mod formatter;

pub use call_site::CallSite;
pub use formatter::{render, COLOR_RESET, MIN_BUFSIZE};
