use code_prompt::config::AnnotatorConfig;
use code_prompt::{annotate_codebase, version};
use log::{error, info};
use std::path::Path;
use std::process;

const REQUIRED_ARGS: usize = 3;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != REQUIRED_ARGS {
        error!("Incorrect number of arguments");
        eprintln!(
            "Usage: {} <directory_path> <openai_key_file>",
            args.first().map(String::as_str).unwrap_or("code_prompt")
        );
        process::exit(1);
    }

    let codebase_path = Path::new(&args[1]);
    let key_file = Path::new(&args[2]);
    let config = AnnotatorConfig::from_env();

    info!("code_prompt v{}", version());
    info!("Processing codebase at: {:?}", codebase_path);
    info!("Output file: {:?}", config.output_path);

    match annotate_codebase(codebase_path, key_file, &config) {
        Ok(report) => info!(
            "Output appended to: {:?} ({} entries)",
            config.output_path, report.headers
        ),
        Err(e) => {
            error!("Annotation aborted: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
