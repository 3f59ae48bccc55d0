//! Purpose: Recursive-descent JSON parser library backing the `jsonparser` CLI.
//! Exports: `api` (parser, value tree, errors), `color_json` (display rendering).
//! Role: Whole-document text-to-tree decoding; no serializer, no streaming.
//! Invariants: Parsed trees own their data and never borrow the input buffer.
//! Invariants: String values keep backslash escapes verbatim (no decoding).
pub mod api;
pub mod color_json;
pub mod core;
