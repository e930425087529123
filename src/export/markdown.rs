use crate::types::AnalysisResult;

/// Markdown formatter for analysis results
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format an analysis result as a markdown report
    pub fn format(result: &AnalysisResult) -> String {
        let mut md = String::with_capacity(2048);

        // Title with crop and location
        md.push_str(&format!(
            "# Crop Analysis - {} ({})\n\n",
            result.crop_type, result.location
        ));

        md.push_str(&format!(
            "**Health Score:** {}/100 ({})\n\n",
            result.health_score,
            result.health_band().label()
        ));
        md.push_str(&format!("**Detected Condition:** {}  \n", result.disease));
        md.push_str(&format!("**Severity:** {} Risk  \n", result.severity));
        md.push_str(&format!(
            "**Detection Probability:** {}%\n\n",
            (result.probability * 100.0).round() as i64
        ));

        if !result.symptoms.is_empty() {
            md.push_str("## Symptoms\n\n");
            for symptom in &result.symptoms {
                md.push_str(&format!("- {}\n", symptom));
            }
            md.push('\n');
        }

        if !result.recommendations.is_empty() {
            md.push_str("## Recommendations\n\n");
            for (i, rec) in result.recommendations.iter().enumerate() {
                md.push_str(&format!("{}. {}\n", i + 1, rec));
            }
            md.push('\n');
        }

        if !result.detected_conditions.is_empty() {
            md.push_str("## Possible Conditions\n\n");
            md.push_str("| Condition | Severity | Probability |\n");
            md.push_str("|-----------|----------|-------------|\n");
            for condition in &result.detected_conditions {
                md.push_str(&format!(
                    "| {} | {} | {}% |\n",
                    condition.name,
                    condition.severity,
                    (condition.probability * 100.0).round() as i64
                ));
            }
            md.push('\n');
        }

        if let Some(note) = &result.image_analysis {
            md.push_str("## Image Analysis\n\n");
            for observation in &note.observations {
                md.push_str(&format!("- {}\n", observation));
            }
            md.push_str(&format!("\n*{}*\n\n", note.accuracy_boost));
        }

        md.push_str(&format!("> {}\n\n", result.accuracy_note));
        md.push_str(&format!("*Analyzed at {}*\n", result.timestamp));

        md
    }
}
