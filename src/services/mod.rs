pub mod batch;

pub use batch::{convert_file, BatchReport, BatchRunner};
