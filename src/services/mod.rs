pub mod export_writer;
pub mod report_formatter;

pub use export_writer::{ExportFormat, ExportWriter};
pub use report_formatter::ReportFormatter;
