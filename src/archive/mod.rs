/// Archive layer: dated output names, compression and extraction.
///
/// Architecture:
/// ```text
///  selected files + destination        archive.zip + destination
///        │                                     │
///        ▼                                     ▼
///   ┌──────────┐                         ┌──────────┐
///   │ compress │  → archive_[date].zip   │ extract  │  → extracted_files_[date]/
///   └──────────┘                         └──────────┘
///        │                                     │
///        └──────────────┬──────────────────────┘
///                       ▼
///                 ┌──────────┐
///                 │  naming  │  DD-MM-YYYY stamped file / folder names
///                 └──────────┘
/// ```

pub mod compress;
pub mod extract;
pub mod naming;

pub use compress::{CompressReport, compress_files};
pub use extract::{ExtractReport, extract_archive};
