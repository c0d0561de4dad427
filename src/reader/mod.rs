pub mod docx;

pub use docx::{DocxError, DocxReader};
