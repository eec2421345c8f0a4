//! Writing documents to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::diagnostic::GeneratorError;
use crate::document::ConfigDocument;
use crate::format::format_document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Overwrite an existing file.
    pub force: bool,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            force: false,
            indent: 2,
        }
    }
}

/// What a successful write produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes: usize,
    /// `true` when an existing file was replaced.
    pub overwritten: bool,
}

/// Formats `document` and writes it to `path`, creating parent directories.
pub fn write_config(
    document: &ConfigDocument,
    path: &Path,
    options: WriteOptions,
) -> Result<WriteReport, GeneratorError> {
    let overwritten = path.exists();
    if overwritten && !options.force {
        return Err(GeneratorError::FileExists {
            path: path.to_path_buf(),
        });
    }

    let content = format_document(document, options.indent)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e.to_string()))?;
    }
    fs::write(path, &content).map_err(|e| GeneratorError::io(path, e.to_string()))?;

    info!(path = %path.display(), bytes = content.len(), "configuration written");
    Ok(WriteReport {
        path: path.to_path_buf(),
        bytes: content.len(),
        overwritten,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CompilerOptions;

    fn document() -> ConfigDocument {
        ConfigDocument::new(CompilerOptions::new())
    }

    #[test]
    fn test_writes_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages/app/tsconfig.json");

        let report = write_config(&document(), &path, WriteOptions::default()).unwrap();
        assert_eq!(report.path, path);
        assert!(!report.overwritten);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.len(), report.bytes);
        assert!(written.starts_with("{\n  \"$schema\""));
    }

    #[test]
    fn test_existing_file_requires_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tsconfig.json");
        fs::write(&path, "{}").unwrap();

        let err = write_config(&document(), &path, WriteOptions::default()).unwrap_err();
        assert!(matches!(err, GeneratorError::FileExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");

        let forced = WriteOptions {
            force: true,
            ..Default::default()
        };
        let report = write_config(&document(), &path, forced).unwrap();
        assert!(report.overwritten);
        assert_ne!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_io_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("tsconfig.json");

        let err = write_config(&document(), &path, WriteOptions::default()).unwrap_err();
        assert!(matches!(err, GeneratorError::IoError { .. }));
    }
}
