use chrono::{Local, NaiveDate};

// ---------------------------------------------------------------------------
// Dated output names
// ---------------------------------------------------------------------------

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `DD-MM-YYYY`
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// File name of the archive written by the compressor, e.g. `archive_[16-10-2026].zip`.
pub fn archive_file_name(date: NaiveDate) -> String {
    format!("archive_[{}].zip", date_stamp(date))
}

/// Folder name the extractor unpacks into, e.g. `extracted_files_[16-10-2026]`.
pub fn extraction_dir_name(date: NaiveDate) -> String {
    format!("extracted_files_[{}]", date_stamp(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_stamp_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date_stamp(date), "07-03-2024");
    }

    #[test]
    fn test_output_names() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(archive_file_name(date), "archive_[16-10-2026].zip");
        assert_eq!(extraction_dir_name(date), "extracted_files_[16-10-2026]");
    }
}
