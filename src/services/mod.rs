//! Report generation services.

pub mod renderer;
pub mod report_builder;
pub mod report_parser;
pub mod report_result;
pub mod sorting;
pub mod trends;

pub use renderer::{JsonContextRenderer, PageRenderer};
pub use report_builder::ReportBuilder;
pub use report_parser::ReportParser;
pub use report_result::ReportResult;
pub use sorting::SortingFactory;
