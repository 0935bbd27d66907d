//! File I/O: scoped write then scoped read of a transient text file

use crate::walkthrough::section::{Section, SectionError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// The two fixed lines the demonstration writes
pub const NOTES: &str = "Hello, file!\nThis is a Rust walkthrough.\n";

/// Write the fixed notes to `path`, releasing the handle at scope exit
///
/// Rust strings are UTF-8; the bytes written are the UTF-8 encoding of
/// [`NOTES`]. The file is created or truncated.
pub fn write_notes(path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(NOTES.as_bytes())?;
    Ok(())
    // `file` dropped here: the handle is released on every exit path
}

/// Read the whole file back as one UTF-8 text value
pub fn read_notes(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

pub struct FileIoSection {
    path: PathBuf,
}

impl FileIoSection {
    /// Section writing the walkthrough's fixed path in the working directory
    pub fn new() -> Self {
        Self::with_path("output.txt")
    }

    /// Section writing a custom path (tests point this at a temp directory)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileIoSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for FileIoSection {
    fn name(&self) -> &str {
        "file-io"
    }

    fn title(&self) -> &str {
        "File I/O"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        write_notes(&self.path)?;
        let content = read_notes(&self.path)?;

        let mut lines = vec!["wrote 2 lines".to_string(), "file content:".to_string()];
        lines.extend(content.lines().map(str::to_string));
        Ok(lines)
    }
}
