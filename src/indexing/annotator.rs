use crate::parsers::DeclarationExtractor;
use crate::summarizer::Summarizer;
use crate::utils::io::{open_output_file, write_annotation};
use log::{debug, error, trace};
use std::fs;
use std::io;
use std::path::Path;

/// Totals for one annotated file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileAnnotation {
    pub headers: usize,
    pub failed_summaries: usize,
}

/// Annotates every declaration header in `file_path`, appending to `output_path`.
///
/// The output file is held open only for the duration of this call. A failed
/// summary is logged and written as an empty comment; any I/O failure aborts.
pub fn annotate_file(
    file_path: &Path,
    output_path: &Path,
    extractor: &dyn DeclarationExtractor,
    summarizer: &dyn Summarizer,
) -> io::Result<FileAnnotation> {
    trace!("Annotating file: {:?}", file_path);

    let bytes = fs::read(file_path).map_err(|e| {
        error!("Failed to read file {:?}: {}", file_path, e);
        e
    })?;
    // Legacy encodings are matched as-is; undecodable bytes become U+FFFD.
    let content = String::from_utf8_lossy(&bytes);

    let mut output = open_output_file(output_path)?;
    let declarations = extractor.extract_declarations(&content);
    debug!(
        "Found {} declaration headers in {:?}",
        declarations.len(),
        file_path
    );

    let mut result = FileAnnotation::default();
    for declaration in &declarations {
        let summary = match summarizer.summarize(&declaration.header) {
            Ok(summary) => summary,
            Err(e) => {
                error!("ChatCompletion error for {:?}: {}", declaration.header, e);
                result.failed_summaries += 1;
                String::new()
            }
        };

        write_annotation(&mut output, &declaration.header, &summary)?;
        result.headers += 1;
    }

    Ok(result)
}
