//! HTML fragments in and out of the document model.
//!
//! Parsing never fails: whatever the host sends is coerced into the
//! schema, the way a browser-side editor would sanitize pasted markup.
//! Serialization produces one canonical form, so parsing a serialized
//! document yields the same document again.

mod parser;
mod serializer;
mod tokenizer;

pub use parser::parse;
pub use serializer::serialize;
pub use tokenizer::{decode_entities, tokenize, HtmlToken};
