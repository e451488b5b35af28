//! Four small desktop utilities sharing one library:
//!
//! * `file-compressor`     – zip a set of files into `archive_[DD-MM-YYYY].zip`
//! * `archive-extractor`   – unpack a zip into `extracted_files_[DD-MM-YYYY]/`
//! * `meter-converter`     – feet + inches → meters
//! * `grayscale-converter` – camera frame or image file → grayscale, side by side
//!
//! The domain logic (`archive`, `units`, `imaging`, `camera`) knows nothing
//! about egui; `state` holds the per-tool form state and `app` / `ui` render it.

pub mod app;
pub mod archive;
pub mod camera;
pub mod config;
pub mod error;
pub mod imaging;
pub mod state;
pub mod ui;
pub mod units;
