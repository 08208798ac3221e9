use log::{error, trace};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

pub const COMMENT_PREFIX: &str = "// ";

/// Opens the shared output file for appending, creating it when absent.
pub fn open_output_file(output_path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(output_path)
        .map_err(|e| {
            error!("Failed to open output file {:?}: {}", output_path, e);
            e
        })
}

pub fn write_annotation<W: Write>(out: &mut W, header: &str, summary: &str) -> io::Result<()> {
    trace!("Writing annotation for {:?}", header);
    write!(out, "{}\n{}{}\n\n", header, COMMENT_PREFIX, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn annotation_layout() {
        let mut buf = Vec::new();
        write_annotation(&mut buf, "func Add", "Adds two numbers.").unwrap();
        write_annotation(&mut buf, "func Sub", "").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "func Add\n// Adds two numbers.\n\nfunc Sub\n// \n\n"
        );
    }

    #[test]
    fn appends_to_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("code_prompt.txt");
        fs::write(&path, "existing\n").unwrap();

        {
            let mut file = open_output_file(&path).unwrap();
            write_annotation(&mut file, "class Foo", "A foo.").unwrap();
        }

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "existing\nclass Foo\n// A foo.\n\n"
        );
    }

    #[test]
    fn open_fails_when_parent_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("code_prompt.txt");
        assert!(open_output_file(&path).is_err());
    }
}
