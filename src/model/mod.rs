//! Data model for docx documents.
//!
//! The model is deliberately shallow: paragraphs and runs carry their text
//! and keep everything else (properties, tables, drawings) as opaque XML so
//! the package round-trips without loss.

mod document;
mod paragraph;

pub use document::{BodyItem, Document, Metadata};
pub use paragraph::{ParaChild, Paragraph, Run};
