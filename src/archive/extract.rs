use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use zip::ZipArchive;

use super::naming::extraction_dir_name;
use crate::error::ArchiveError;

/// What a successful [`extract_archive`] call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    /// The dated folder everything was unpacked into.
    pub output_dir: PathBuf,
    /// File entries of the archive (directories excluded), in archive order.
    pub entries: Vec<String>,
}

/// Unpack every entry of `archive` into `<destination>/extracted_files_[DD-MM-YYYY]`.
///
/// The archive is opened and its central directory read before anything is
/// created on disk, so a missing or corrupt archive leaves no folder behind.
/// Entry names pointing outside the output folder are rejected by `zip`.
pub fn extract_archive(
    archive: &Path,
    destination: &Path,
    date: NaiveDate,
) -> Result<ExtractReport, ArchiveError> {
    if archive.as_os_str().is_empty() || destination.as_os_str().is_empty() {
        return Err(ArchiveError::MissingInput);
    }
    if !archive.is_file() {
        return Err(ArchiveError::NotFound(archive.to_path_buf()));
    }

    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(BufReader::new(file))?;

    let entries: Vec<String> = zip
        .file_names()
        .filter(|name| !name.ends_with('/'))
        .map(str::to_string)
        .collect();

    let output_dir = destination.join(extraction_dir_name(date));
    fs::create_dir_all(&output_dir)?;
    zip.extract(&output_dir)?;

    log::info!(
        "Extracted {} entries from {} into {}",
        entries.len(),
        archive.display(),
        output_dir.display()
    );

    Ok(ExtractReport {
        output_dir,
        entries,
    })
}
