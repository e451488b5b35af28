use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::archive::{self, CompressReport, ExtractReport};
use crate::error::{ArchiveError, ConversionError};
use crate::imaging::{self, ImagePair};
use crate::{camera, units};

// ---------------------------------------------------------------------------
// Notice – the modal message a form shows after submit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Warning".to_string(),
            message: message.into(),
        }
    }
}

/// Display text of a picked path; empty when nothing is picked.
fn path_text(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// File compressor
// ---------------------------------------------------------------------------

/// Form state of the file compressor, independent of rendering.
#[derive(Debug, Default)]
pub struct CompressorState {
    /// Full paths picked by the user.
    pub files: Vec<PathBuf>,
    pub destination: Option<PathBuf>,
    pub notice: Option<Notice>,
}

impl CompressorState {
    /// Comma-separated base names shown in the read-only field.
    pub fn files_text(&self) -> String {
        self.files
            .iter()
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| p.display().to_string())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn destination_text(&self) -> String {
        path_text(self.destination.as_deref())
    }

    /// Replace the selection. A cancelled picker (empty list) keeps the old one.
    pub fn set_files(&mut self, files: Vec<PathBuf>) {
        if !files.is_empty() {
            self.files = files;
        }
    }

    pub fn set_destination(&mut self, destination: PathBuf) {
        self.destination = Some(destination);
    }

    /// Handle the Compress button.
    pub fn compress(&mut self, date: NaiveDate) -> Option<CompressReport> {
        let destination = self.destination.clone().unwrap_or_default();
        match archive::compress_files(&self.files, &destination, date) {
            Ok(report) => {
                self.clear();
                self.notice = Some(Notice::info("Files archived successfully."));
                Some(report)
            }
            Err(ArchiveError::MissingInput) => {
                log::warn!("Compress requested with an empty file list or destination");
                self.notice = Some(Notice::warning(
                    "Please make sure to select at least one file and specify a destination directory.",
                ));
                None
            }
            Err(e) => {
                log::error!("Archiving failed: {e}");
                self.notice = Some(Notice::warning(format!("Error archiving files: {e}")));
                None
            }
        }
    }

    /// Handle the Clear button.
    pub fn clear(&mut self) {
        self.files.clear();
        self.destination = None;
    }
}

// ---------------------------------------------------------------------------
// Archive extractor
// ---------------------------------------------------------------------------

/// Form state of the archive extractor.
#[derive(Debug, Default)]
pub struct ExtractorState {
    pub archive: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub notice: Option<Notice>,
}

impl ExtractorState {
    pub fn archive_text(&self) -> String {
        path_text(self.archive.as_deref())
    }

    pub fn destination_text(&self) -> String {
        path_text(self.destination.as_deref())
    }

    pub fn set_archive(&mut self, archive: PathBuf) {
        self.archive = Some(archive);
    }

    pub fn set_destination(&mut self, destination: PathBuf) {
        self.destination = Some(destination);
    }

    /// Handle the Extract button.
    pub fn extract(&mut self, date: NaiveDate) -> Option<ExtractReport> {
        let archive_path = self.archive.clone().unwrap_or_default();
        let destination = self.destination.clone().unwrap_or_default();
        match archive::extract_archive(&archive_path, &destination, date) {
            Ok(report) => {
                self.clear();
                self.notice = Some(Notice::info("Files extracted successfully."));
                Some(report)
            }
            Err(ArchiveError::MissingInput) => {
                log::warn!("Extract requested with an empty archive path or destination");
                self.notice = Some(Notice::warning(
                    "Please make sure to select both an archive file and a destination directory.",
                ));
                None
            }
            Err(ArchiveError::NotFound(path)) => {
                log::warn!("Archive not found: {}", path.display());
                self.notice = Some(Notice::warning(format!(
                    "File not found: \"{}\"",
                    path.display()
                )));
                None
            }
            Err(e) => {
                log::error!("Extraction failed: {e}");
                self.notice = Some(Notice::warning(format!("Error extracting files: {e}")));
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.archive = None;
        self.destination = None;
    }
}

// ---------------------------------------------------------------------------
// Meter converter
// ---------------------------------------------------------------------------

/// Form state of the meter converter: two raw text fields and the result label.
#[derive(Debug, Default)]
pub struct ConverterState {
    pub feet: String,
    pub inches: String,
    pub result: String,
    pub notice: Option<Notice>,
}

impl ConverterState {
    /// Handle the Convert button.
    pub fn convert(&mut self) -> Option<f64> {
        match units::convert_text(&self.feet, &self.inches) {
            Ok(meters) => {
                self.result = units::format_meters(meters);
                Some(meters)
            }
            Err(ConversionError::Invalid) => {
                self.notice = Some(Notice::warning(
                    "Please enter valid values for feet and inches.",
                ));
                None
            }
            Err(ConversionError::NotPositive) => {
                self.notice = Some(Notice::warning(
                    "Please enter positive values for feet and inches.",
                ));
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.feet.clear();
        self.inches.clear();
        self.result.clear();
    }
}

// ---------------------------------------------------------------------------
// Grayscale converter
// ---------------------------------------------------------------------------

/// Where the grayscale converter takes its picture from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    Capture,
    #[default]
    Upload,
}

/// Page state of the grayscale converter.
#[derive(Debug, Default)]
pub struct GrayscaleState {
    pub mode: SourceMode,
    /// Current original + grayscale pair, if an image has been obtained.
    pub pair: Option<ImagePair>,
    /// Inline error from the last capture / upload attempt.
    pub error: Option<String>,
    /// Camera used by "Take photo".
    pub camera_index: u32,
    /// Bumped whenever `pair` changes so the view knows to rebuild textures.
    pub revision: u64,
}

impl GrayscaleState {
    /// Switch mode. Leaving a mode drops the image obtained in it.
    pub fn select_mode(&mut self, mode: SourceMode) {
        if self.mode == mode {
            return;
        }
        log::debug!("Source mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.error = None;
        if self.pair.take().is_some() {
            self.revision += 1;
        }
    }

    /// Convert `image` and make it the displayed pair.
    pub fn set_image(&mut self, image: image::DynamicImage, source: impl Into<String>) {
        let pair = ImagePair::new(image, source);
        let (w, h) = pair.dimensions();
        log::info!("Converted {} ({w}x{h}) to grayscale", pair.source);
        self.pair = Some(pair);
        self.error = None;
        self.revision += 1;
    }

    /// Handle an uploaded file.
    pub fn upload(&mut self, path: &Path) {
        match imaging::load_image_file(path) {
            Ok(image) => {
                let source = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.set_image(image, source);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.error = Some(format!("Error: {e}"));
            }
        }
    }

    /// Handle the "Take photo" button.
    pub fn capture(&mut self) {
        match camera::capture_frame(self.camera_index) {
            Ok(image) => {
                let source = format!("camera {}", self.camera_index);
                self.set_image(image, source);
            }
            Err(e) => {
                log::error!("Camera capture failed: {e:#}");
                self.error = Some(format!("Error: {e:#}"));
            }
        }
    }
}
