// src/output/mod.rs
use crate::utils::error::OutputError;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where JSON results are written: stdout, or a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path<P: AsRef<Path>>(path: Option<P>) -> Self {
        match path {
            Some(p) => OutputTarget::File(p.as_ref().to_path_buf()),
            None => OutputTarget::Stdout,
        }
    }
}

/// Serializes `value` as pretty JSON and writes it to `target`.
pub fn write_json<T: Serialize>(target: &OutputTarget, value: &T) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| OutputError::SerializationError(e.to_string()))?;

    match target {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json).map_err(OutputError::IoError)?;
        }
        OutputTarget::File(path) => {
            // Create the parent directories if they don't exist
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).map_err(OutputError::IoError)?;
                }
            }

            fs::write(path, format!("{}\n", json)).map_err(OutputError::IoError)?;
            tracing::info!("Saved output to {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_pretty_json_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("summary.json");
        let target = OutputTarget::from_path(Some(&path));

        write_json(&target, &json!({ "summary": "Done." })).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, json!({ "summary": "Done." }));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn missing_path_targets_stdout() {
        assert_eq!(OutputTarget::from_path(None::<&Path>), OutputTarget::Stdout);
    }
}
