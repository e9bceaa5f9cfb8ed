//! Markdown conversion tests
//!
//! Span conversion of parsed documentation and the CommonMark it serializes to.

mod convert;
mod export;
