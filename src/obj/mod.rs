//! # OBJ Interchange Parser
//!
//! Converts Wavefront OBJ text into a [`Mesh`](crate::model::Mesh). Parsing
//! is line-oriented and all-or-nothing: any malformed field aborts the whole
//! document with a single [`ParseError`] carrying the 1-based source line
//! and a diagnostic message, so a caller never receives a partial mesh.
//!
//! Recognized record leaders are `v`, `vt`, `vn` and `f`. Blank lines,
//! `#` comments and any other leader (`o`, `g`, `usemtl`, ...) are skipped
//! silently. Face indices are 1-based in the text and converted to 0-based
//! here; negative/relative indexing is not supported.

mod error;
mod reader;

pub use error::ParseError;
pub use reader::read;
