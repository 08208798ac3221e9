use std::path::Path;

/// Extensions of the source languages handed to the summarizer.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["go", "fish", "cs"];

pub fn detect_language(file_path: &Path) -> Option<&'static str> {
    match file_path.extension().and_then(|e| e.to_str())? {
        "go" => Some("go"),
        "fish" => Some("fish"),
        "cs" => Some("csharp"),
        _ => None,
    }
}

pub fn is_supported_extension(file_path: &Path, extensions: &[&str]) -> bool {
    file_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.contains(&ext))
        .unwrap_or(false)
}
