//! Export renderings of analysis results and dataset metadata
//!
//! - `json`: pretty / compact JSON, field names exactly as serialized
//! - `csv`: two-column analysis sheet and dataset feature table
//! - `markdown`: human-readable analysis report
//! - `dataset`: static dataset metadata

pub mod dataset;
pub mod json;
pub mod csv;
pub mod markdown;

pub use dataset::{dataset_info, DatasetFeature, DatasetInfo};
pub use json::JsonFormatter;
pub use csv::CsvFormatter;
pub use markdown::MarkdownFormatter;

use chrono::NaiveDate;

/// `agrinova-analysis-{crop}-{date}.{ext}`
///
/// The crop segment is reduced to ASCII alphanumerics, `-` and `_` so the name
/// can travel in a quoted `Content-Disposition` header.
pub fn analysis_export_filename(crop_type: &str, date: NaiveDate, extension: &str) -> String {
    format!(
        "agrinova-analysis-{}-{}.{}",
        filename_token(crop_type),
        date.format("%Y-%m-%d"),
        extension
    )
}

fn filename_token(value: &str) -> String {
    let token: String = value
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if token.is_empty() {
        "unknown".to_string()
    } else {
        token
    }
}

/// `agrinova-dataset-info-{date}.{ext}`
pub fn dataset_export_filename(date: NaiveDate, extension: &str) -> String {
    format!("agrinova-dataset-info-{}.{}", date.format("%Y-%m-%d"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filenames() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(
            analysis_export_filename("Wheat", date, "csv"),
            "agrinova-analysis-Wheat-2025-01-07.csv"
        );
        assert_eq!(
            dataset_export_filename(date, "json"),
            "agrinova-dataset-info-2025-01-07.json"
        );
    }

    #[test]
    fn test_analysis_filename_strips_unsafe_crop_characters() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();

        assert_eq!(
            analysis_export_filename("Wheat\nX", date, "csv"),
            "agrinova-analysis-Wheat_X-2025-01-07.csv"
        );
        assert_eq!(
            analysis_export_filename("a\"; filename=\"evil.exe", date, "csv"),
            "agrinova-analysis-a___filename__evil_exe-2025-01-07.csv"
        );
        assert_eq!(
            analysis_export_filename("Blé", date, "csv"),
            "agrinova-analysis-Bl_-2025-01-07.csv"
        );
        assert_eq!(
            analysis_export_filename("Sweet Potato", date, "csv"),
            "agrinova-analysis-Sweet_Potato-2025-01-07.csv"
        );
        assert_eq!(
            analysis_export_filename("  ", date, "csv"),
            "agrinova-analysis-unknown-2025-01-07.csv"
        );
    }
}
