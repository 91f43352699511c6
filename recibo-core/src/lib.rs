//! recibo-core: Shared data model for the recibo receipt pipeline

pub mod ocr;
pub mod receipt;

pub use ocr::{OcrEntity, RawOcrResult};
pub use receipt::{LineItem, PaymentMethod, ReceiptRecord, UNKNOWN_MERCHANT};
