//! CSV Export
//!
//! Analysis sheet: `Field,Value` header, summary rows, then `Symptoms` and
//! `Recommendations` sections each preceded by a blank separator row.
//!
//! Dataset sheet: overview block, blank row, `Feature Name,Importance,Description`
//! table with importance as a rounded percentage.

use chrono::{DateTime, Utc};

use crate::export::dataset::DatasetInfo;
use crate::types::AnalysisResult;

/// CSV formatter for analysis results and dataset metadata
pub struct CsvFormatter;

impl CsvFormatter {
    /// Format an analysis result as a two-column sheet
    pub fn format_analysis(result: &AnalysisResult) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(16 + result.symptoms.len() + result.recommendations.len());

        rows.push(row(&["Field", "Value"]));

        rows.push(row(&["Crop Type", &result.crop_type]));
        rows.push(row(&["Location", &result.location]));
        rows.push(row(&["Detected Disease", &result.disease]));
        rows.push(row(&["Health Score", &format!("{}%", result.health_score)]));
        rows.push(row(&["Severity", result.severity.as_str()]));
        rows.push(row(&["Detection Probability", &percent(result.probability)]));
        rows.push(row(&["Analysis Date", &display_timestamp(&result.timestamp)]));

        rows.push(row(&["", ""]));
        rows.push(row(&["Symptoms", ""]));
        for symptom in &result.symptoms {
            rows.push(row(&["", symptom]));
        }

        rows.push(row(&["", ""]));
        rows.push(row(&["Recommendations", ""]));
        for rec in &result.recommendations {
            rows.push(row(&["", rec]));
        }

        rows.join("\n")
    }

    /// Format dataset metadata as an overview block plus feature table
    pub fn format_dataset(info: &DatasetInfo) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8 + info.features.len());

        rows.push(row(&["Dataset Information", ""]));
        rows.push(row(&["", ""]));

        rows.push(row(&["Total Samples", &info.total_samples.to_string()]));
        rows.push(row(&["Crop Types", &info.crop_types.to_string()]));
        rows.push(row(&["Disease Classes", &info.disease_classes.to_string()]));
        rows.push(row(&["", ""]));

        rows.push(row(&["Feature Name", "Importance", "Description"]));
        for feature in &info.features {
            rows.push(row(&[&feature.name, &percent(feature.importance), &feature.description]));
        }

        rows.join("\n")
    }
}

fn row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a field when it contains a delimiter, quote or line break (RFC 4180)
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// RFC 3339 timestamps render as `YYYY-MM-DD HH:MM:SS UTC`; anything else is
/// passed through unchanged
fn display_timestamp(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
