use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

pub const KEY_PLACEHOLDER: &str = "<INSERT OPENAPI KEY HERE>";

#[derive(Debug, Serialize, Deserialize)]
struct KeyFile {
    #[serde(default)]
    key: Option<String>,
}

/// Reads the API key from `key_file`, writing a placeholder file if none exists.
pub fn load_api_key(key_file: &Path) -> io::Result<String> {
    let data = match fs::read(key_file) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Key file {:?} not found, creating placeholder", key_file);
            write_placeholder(key_file)?;
            warn!(
                "Replace the placeholder in {:?} with a real API key",
                key_file
            );
            return Ok(KEY_PLACEHOLDER.to_string());
        }
        Err(e) => return Err(e),
    };

    let parsed: Option<KeyFile> = serde_json::from_slice(&data).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid key file {}: {}", key_file.display(), e),
        )
    })?;
    // `null`, `{}` and `{"key": null}` all load as an empty key
    let key = parsed.and_then(|file| file.key).unwrap_or_default();

    if key.is_empty() {
        warn!(
            "Key file {:?} has no key; requests will fail until one is set",
            key_file
        );
    } else if key == KEY_PLACEHOLDER {
        warn!("Key file {:?} still contains the placeholder key", key_file);
    }
    debug!("Loaded API key from {:?}", key_file);

    Ok(key)
}

fn write_placeholder(key_file: &Path) -> io::Result<()> {
    let contents = serde_json::to_vec(&KeyFile {
        key: Some(KEY_PLACEHOLDER.to_string()),
    })
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(key_file)?;
    file.write_all(&contents)
}
