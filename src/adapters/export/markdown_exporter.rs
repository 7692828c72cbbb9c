//! Markdown report exporter.
//!
//! Renders a computed [`AnalysisReport`] as a self-contained markdown
//! document with one section per calculator. The output is meant to be
//! pasted into a wiki or attached to a case file as-is.

use async_trait::async_trait;

use crate::domain::engine::AnalysisReport;
use crate::ports::{ExportError, ReportExporter};

/// Markdown implementation of the report exporter port.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportExporter;

impl MarkdownReportExporter {
    /// Creates a new markdown exporter.
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, report: &AnalysisReport) -> String {
        let mut section = format!("# {}\n\n", report.title);
        section.push_str(&format!("*Generated: {}*\n\n", report.generated_at));
        section.push_str(&format!(
            "**Matrix completion:** {} of {} cells rated ({})\n\n",
            report.completion.rated, report.completion.total, report.completion.percentage
        ));
        section
    }

    fn render_ranking(&self, report: &AnalysisReport) -> String {
        let mut section = String::from("## Hypothesis Ranking\n\n");

        if report.scores.is_empty() {
            section.push_str("*No hypotheses yet*\n\n");
            return section;
        }

        section.push_str("| Rank | Hypothesis | Inconsistency Score |\n");
        section.push_str("|------|------------|--------------------|\n");
        for score in &report.scores {
            section.push_str(&format!(
                "| {} | {} | {} |\n",
                score.rank, score.label, score.inconsistency_score
            ));
        }
        section.push('\n');

        if let Some(leader) = &report.leading_hypothesis {
            section.push_str(&format!("**Leading hypothesis:** {}\n\n", leader));
        }
        if report.is_close_race {
            section.push_str(
                "> The top hypotheses are within one point of each other. \
                 Treat the ranking as provisional.\n\n",
            );
        }

        section
    }

    fn render_diagnosticity(&self, report: &AnalysisReport) -> String {
        let mut section = String::from("## Evidence Diagnosticity\n\n");

        if report.diagnosticity.is_empty() {
            section.push_str("*No evidence yet*\n\n");
            return section;
        }

        section.push_str("| Evidence | Diagnosticity | Assessment |\n");
        section.push_str("|----------|---------------|------------|\n");
        for item in &report.diagnosticity {
            let assessment = if item.is_high_diagnostic {
                "High - strongly discriminates"
            } else if item.is_low_diagnostic {
                "Low - barely discriminates"
            } else {
                "Moderate"
            };
            section.push_str(&format!(
                "| {} | {:.2} | {} |\n",
                item.evidence_label, item.score, assessment
            ));
        }
        section.push('\n');
        section
    }

    fn render_sensitivity(&self, report: &AnalysisReport) -> String {
        let mut section = String::from("## Sensitivity\n\n");

        let critical: Vec<_> = report.sensitivity.iter().filter(|s| s.is_critical).collect();
        if critical.is_empty() {
            section.push_str(
                "No single evidence item changes the leading hypothesis when removed.\n\n",
            );
            return section;
        }

        section.push_str("Removing any of the following items flips the conclusion:\n\n");
        for item in critical {
            match (&item.original_winner, &item.winner_if_removed) {
                (Some(before), Some(after)) => {
                    section.push_str(&format!(
                        "- **{}**: winner changes from {} to {}\n",
                        item.evidence_label, before, after
                    ));
                }
                _ => {
                    section.push_str(&format!("- **{}**\n", item.evidence_label));
                }
            }
        }
        section.push('\n');
        section
    }
}

#[async_trait]
impl ReportExporter for MarkdownReportExporter {
    async fn export(&self, report: &AnalysisReport) -> Result<String, ExportError> {
        let mut document = String::new();
        document.push_str(&self.render_header(report));
        document.push_str(&self.render_ranking(report));
        document.push_str(&self.render_diagnosticity(report));
        document.push_str(&self.render_sensitivity(report));
        Ok(document)
    }

    fn content_type(&self) -> &'static str {
        "text/markdown; charset=utf-8"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::DiagnosticityThresholds;
    use crate::domain::foundation::ConsistencyRating;
    use crate::domain::matrix::{Analysis, EvidenceType, Reliability};

    fn sample_report() -> AnalysisReport {
        let mut analysis = Analysis::new("Server breach").unwrap();
        let h1 = analysis.add_hypothesis("Insider").unwrap();
        let h2 = analysis.add_hypothesis("External actor").unwrap();
        let e1 = analysis
            .add_evidence("Badge log", EvidenceType::Document, Reliability::High, None)
            .unwrap();
        let e2 = analysis
            .add_evidence(
                "Firewall alert",
                EvidenceType::Observation,
                Reliability::Medium,
                None,
            )
            .unwrap();
        analysis
            .set_rating(e1, h1, ConsistencyRating::VeryInconsistent, None)
            .unwrap();
        analysis
            .set_rating(e1, h2, ConsistencyRating::Consistent, None)
            .unwrap();
        analysis
            .set_rating(e2, h1, ConsistencyRating::Neutral, None)
            .unwrap();
        analysis
            .set_rating(e2, h2, ConsistencyRating::Neutral, None)
            .unwrap();
        AnalysisReport::generate(&analysis, &DiagnosticityThresholds::default())
    }

    #[tokio::test]
    async fn renders_all_sections() {
        let exporter = MarkdownReportExporter::new();
        let markdown = exporter.export(&sample_report()).await.unwrap();

        assert!(markdown.starts_with("# Server breach"));
        assert!(markdown.contains("## Hypothesis Ranking"));
        assert!(markdown.contains("## Evidence Diagnosticity"));
        assert!(markdown.contains("## Sensitivity"));
        assert!(markdown.contains("**Leading hypothesis:** H2"));
    }

    #[tokio::test]
    async fn ranking_rows_follow_score_order() {
        let exporter = MarkdownReportExporter::new();
        let markdown = exporter.export(&sample_report()).await.unwrap();

        let h2_row = markdown.find("| 1 | H2 | 0 |").unwrap();
        let h1_row = markdown.find("| 2 | H1 | 2 |").unwrap();
        assert!(h2_row < h1_row);
    }

    #[tokio::test]
    async fn empty_analysis_renders_placeholders() {
        let analysis = Analysis::new("Empty").unwrap();
        let report = AnalysisReport::generate(&analysis, &DiagnosticityThresholds::default());
        let markdown = MarkdownReportExporter::new().export(&report).await.unwrap();

        assert!(markdown.contains("*No hypotheses yet*"));
        assert!(markdown.contains("*No evidence yet*"));
    }

    #[test]
    fn content_type_is_markdown() {
        assert!(MarkdownReportExporter::new()
            .content_type()
            .starts_with("text/markdown"));
    }
}
