use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::naming::archive_file_name;
use crate::error::ArchiveError;

// ---------------------------------------------------------------------------
// Compression result
// ---------------------------------------------------------------------------

/// What a successful [`compress_files`] call wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressReport {
    /// Full path of the written archive.
    pub archive_path: PathBuf,
    /// Entry names added to the archive, in input order.
    pub added: Vec<String>,
    /// Inputs left out: missing on disk, not a regular file, or a repeated base name.
    pub skipped: Vec<PathBuf>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Zip `files` into `<destination>/archive_[DD-MM-YYYY].zip`.
///
/// * The destination directory is created (with parents) when absent.
/// * An archive from an earlier run on the same day is overwritten.
/// * Each file is stored under its base name, Deflate-compressed.
/// * Inputs that do not exist are skipped and only logged.
pub fn compress_files(
    files: &[PathBuf],
    destination: &Path,
    date: NaiveDate,
) -> Result<CompressReport, ArchiveError> {
    if files.is_empty() || destination.as_os_str().is_empty() {
        return Err(ArchiveError::MissingInput);
    }

    fs::create_dir_all(destination)?;
    let archive_path = destination.join(archive_file_name(date));
    let canonical_archive = fs::canonicalize(destination)?.join(archive_file_name(date));

    let file = File::create(&archive_path)?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut added = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for path in files {
        if !path.is_file() {
            log::warn!("File not found: {}", path.display());
            skipped.push(path.clone());
            continue;
        }

        // The archive being written can itself be among the inputs.
        if fs::canonicalize(path).is_ok_and(|p| p == canonical_archive) {
            log::warn!("Skipping {}: it is the archive being written", path.display());
            skipped.push(path.clone());
            continue;
        }

        let Some(name) = entry_name(path) else {
            log::warn!("Skipping path without a file name: {}", path.display());
            skipped.push(path.clone());
            continue;
        };

        if !seen.insert(name.clone()) {
            log::warn!(
                "Skipping {}: an entry named '{name}' is already in the archive",
                path.display()
            );
            skipped.push(path.clone());
            continue;
        }

        writer.start_file(name.as_str(), options)?;
        let mut source = File::open(path)?;
        io::copy(&mut source, &mut writer)?;
        log::debug!("Added {} as '{name}'", path.display());
        added.push(name);
    }

    writer.finish()?;

    log::info!(
        "Wrote {} ({} added, {} skipped)",
        archive_path.display(),
        added.len(),
        skipped.len()
    );

    Ok(CompressReport {
        archive_path,
        added,
        skipped,
    })
}

/// Base name of `path` used as the zip entry name.
fn entry_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn entry_names(archive: &Path) -> BTreeSet<String> {
        let zip = ZipArchive::new(File::open(archive).unwrap()).unwrap();
        zip.file_names().map(str::to_string).collect()
    }

    #[test]
    fn test_archive_contains_existing_files_by_base_name() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        let a = write_file(source.path(), "notes.txt", "hello");
        let b = write_file(source.path(), "data.csv", "1,2,3");
        let missing = source.path().join("gone.txt");

        let report = compress_files(&[a, missing.clone(), b], dest.path(), date()).unwrap();

        assert_eq!(
            report.archive_path,
            dest.path().join("archive_[16-10-2026].zip")
        );
        assert_eq!(report.added, vec!["notes.txt", "data.csv"]);
        assert_eq!(report.skipped, vec![missing]);

        let expected: BTreeSet<String> = ["notes.txt", "data.csv"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(entry_names(&report.archive_path), expected);
    }

    #[test]
    fn test_entry_content_round_trips() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let a = write_file(source.path(), "poem.txt", "roses are red");

        let report = compress_files(&[a], dest.path(), date()).unwrap();

        let mut zip = ZipArchive::new(File::open(&report.archive_path).unwrap()).unwrap();
        let mut content = String::new();
        zip.by_name("poem.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "roses are red");
    }

    #[test]
    fn test_empty_inputs_write_nothing() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let a = write_file(source.path(), "a.txt", "a");

        let err = compress_files(&[], dest.path(), date()).unwrap_err();
        assert!(matches!(err, ArchiveError::MissingInput));

        let err = compress_files(&[a], Path::new(""), date()).unwrap_err();
        assert!(matches!(err, ArchiveError::MissingInput));

        assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_destination_is_created() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let nested = dest.path().join("out").join("zips");
        let a = write_file(source.path(), "a.txt", "a");

        let report = compress_files(&[a], &nested, date()).unwrap();
        assert!(nested.is_dir());
        assert!(report.archive_path.exists());
    }

    #[test]
    fn test_same_day_run_overwrites() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let a = write_file(source.path(), "first.txt", "1");
        let b = write_file(source.path(), "second.txt", "2");

        compress_files(&[a], dest.path(), date()).unwrap();
        let report = compress_files(&[b], dest.path(), date()).unwrap();

        let expected: BTreeSet<String> = std::iter::once("second.txt".to_string()).collect();
        assert_eq!(entry_names(&report.archive_path), expected);
    }

    #[test]
    fn test_repeated_base_name_is_skipped() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let other = source.path().join("other");
        fs::create_dir(&other).unwrap();

        let a = write_file(source.path(), "same.txt", "top");
        let b = write_file(&other, "same.txt", "nested");

        let report = compress_files(&[a, b.clone()], dest.path(), date()).unwrap();
        assert_eq!(report.added, vec!["same.txt"]);
        assert_eq!(report.skipped, vec![b]);
    }

    #[test]
    fn test_todays_archive_as_input_is_skipped() {
        let dir = TempDir::new().unwrap();
        let a = write_file(dir.path(), "big.bin", "payload");
        let previous = write_file(dir.path(), "archive_[16-10-2026].zip", "old archive");

        let report = compress_files(&[a, previous.clone()], dir.path(), date()).unwrap();

        assert_eq!(report.added, vec!["big.bin"]);
        assert_eq!(report.skipped, vec![previous]);
        let expected: BTreeSet<String> = std::iter::once("big.bin".to_string()).collect();
        assert_eq!(entry_names(&report.archive_path), expected);
    }

    #[test]
    fn test_directories_are_skipped() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let dir = source.path().join("folder");
        fs::create_dir(&dir).unwrap();
        let a = write_file(source.path(), "a.txt", "a");

        let report = compress_files(&[dir.clone(), a], dest.path(), date()).unwrap();
        assert_eq!(report.added, vec!["a.txt"]);
        assert_eq!(report.skipped, vec![dir]);
    }
}
