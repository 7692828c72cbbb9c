//! Export adapters for the [`crate::ports::ReportExporter`] port.

mod markdown_exporter;

pub use markdown_exporter::MarkdownReportExporter;
