pub mod config;
pub mod credentials;
pub mod indexing;
pub mod parsers;
pub mod summarizer;
pub mod utils;

use config::AnnotatorConfig;
use log::{debug, info};
use parsers::DeclarationExtractor;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use summarizer::{OpenAiSummarizer, Summarizer};

/// Totals for a whole annotation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnnotationReport {
    pub files: usize,
    pub headers: usize,
    pub failed_summaries: usize,
    pub elapsed: Duration,
}

/// Annotates every eligible file under `root_path` using the given extractor and summarizer.
pub fn annotate_codebase_with(
    root_path: &Path,
    config: &AnnotatorConfig,
    extractor: &dyn DeclarationExtractor,
    summarizer: &dyn Summarizer,
) -> io::Result<AnnotationReport> {
    info!("Annotating codebase at: {:?}", root_path);
    debug!(
        "Extensions: {:?}, output: {:?}",
        config.extensions, config.output_path
    );

    let start_time = Instant::now();
    let mut report = AnnotationReport::default();

    let files = indexing::walk_source_files(root_path, &config.extensions, |path| {
        let annotated =
            indexing::annotate_file(path, &config.output_path, extractor, summarizer)?;
        report.headers += annotated.headers;
        report.failed_summaries += annotated.failed_summaries;
        Ok(())
    })?;
    report.files = files;
    report.elapsed = start_time.elapsed();

    info!(
        "Annotation complete: {} files, {} headers, {} failed summaries in {:.2?}",
        report.files, report.headers, report.failed_summaries, report.elapsed
    );

    Ok(report)
}

/// Loads the key from `key_file` and annotates `root_path` against the completion API.
pub fn annotate_codebase(
    root_path: &Path,
    key_file: &Path,
    config: &AnnotatorConfig,
) -> io::Result<AnnotationReport> {
    let api_key = credentials::load_api_key(key_file)?;
    let summarizer = OpenAiSummarizer::new(&api_key, config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    info!("Using model {} at {}", config.model, summarizer.endpoint());

    let extractor = parsers::RegexDeclarationExtractor::new();
    annotate_codebase_with(root_path, config, &extractor, &summarizer)
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
