//! Parsing module for docx packages.

mod body;
mod core_props;
mod docx_parser;
mod options;

pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions};
