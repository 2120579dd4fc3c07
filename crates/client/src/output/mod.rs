//! Line-per-link output writer.
//!
//! Writes the extracted link set to a plain text file, one URL per line,
//! UTF-8, truncating any existing content. Set iteration order is not
//! meaningful, so neither is the line order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output file could not be created or written.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {path}: {source}")]
pub struct OutputError {
    pub path: String,
    #[source]
    pub source: std::io::Error,
}

impl From<OutputError> for linkseeker_core::Error {
    fn from(err: OutputError) -> Self {
        linkseeker_core::Error::Output { path: err.path, source: err.source }
    }
}

/// Write each link followed by a newline, truncating the file first.
///
/// Returns the number of links written.
pub fn write_links<I, S>(path: &Path, links: I) -> Result<usize, OutputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let wrap = |source| OutputError { path: path.display().to_string(), source };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);

    let mut count = 0;
    for link in links {
        writeln!(writer, "{}", link.as_ref()).map_err(wrap)?;
        count += 1;
    }

    writer.flush().map_err(wrap)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_write_links_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");

        let links = ["https://a.test/", "https://b.test/"];
        let written = write_links(&path, links).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&"https://a.test/"));
        assert!(lines.contains(&"https://b.test/"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_write_links_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");

        std::fs::write(&path, "stale content\nmore stale content\n").unwrap();
        write_links(&path, ["https://a.test/"]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "https://a.test/\n");
    }

    #[test]
    fn test_write_links_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");

        let written = write_links(&path, HashSet::<String>::new()).unwrap();
        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_links_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("links.txt");

        let result = write_links(&path, ["https://a.test/"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.path.contains("links.txt"));
    }
}
