pub mod annotator;
pub mod processor;

pub use annotator::{annotate_file, FileAnnotation};
pub use processor::walk_source_files;
