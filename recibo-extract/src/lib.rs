//! recibo-extract: turns raw OCR output into structured receipt records.
//!
//! One pipeline, invoked once per document, with ordered fallback tiers
//! per field: a typed entity from the provider always beats pattern
//! matching over the raw text, which in turn beats the documented default.
//! Extraction never fails; a parse miss degrades to the default and shows
//! up as a lower confidence score downstream.

pub mod amounts;
pub mod datetime;
pub mod extractor;
pub mod line_items;
pub mod merchant;
pub mod tender;

pub use extractor::extract;
