//! Formatted output: the fact sentence and the terminal run summary.
//!
//! We keep formatting code in one place so output changes stay localized.

use crate::io::locate::LocatedDataset;
use crate::report::{AuthoritySummary, RatingDistribution};

/// How many authorities the terminal summary lists.
const TOP_AUTHORITIES: usize = 5;

/// The single sentence written to the facts file.
pub fn fact_sentence(summary: &AuthoritySummary) -> String {
    format!(
        "In the latest data release, there are {} EPC lodgments in {}",
        summary.total, summary.top_label
    )
}

/// Human-readable summary of a run for the terminal.
pub fn format_run_summary(
    location: &str,
    dataset: &LocatedDataset,
    distribution: &RatingDistribution,
    authorities: &AuthoritySummary,
) -> String {
    let mut out = String::new();

    out.push_str("=== epc - EPC facts ===\n");
    out.push_str(&format!("Location: {location}\n"));
    out.push_str(&format!("Source: {}\n", dataset.folder_name));
    out.push_str(&format!(
        "Certificates: n={} | rated={} | unrated={}\n",
        distribution.total_rows,
        distribution.rated(),
        distribution.unrated
    ));

    out.push_str("\nEnergy ratings:\n");
    out.push_str(&format!("{:<6} {:>10} {:>8}\n", "rating", "count", "share"));
    out.push_str(&format!("{:-<6} {:-<10} {:-<8}\n", "", "", ""));
    for (rating, count) in distribution.iter() {
        out.push_str(&format!(
            "{:<6} {:>10} {:>8}\n",
            rating.code(),
            count,
            fmt_share(count, distribution.rated())
        ));
    }

    out.push_str("\nTop local authorities:\n");
    for vc in authorities.by_label.iter().take(TOP_AUTHORITIES) {
        out.push_str(&format!(
            "  {:<32} {:>10}\n",
            truncate(vc.value.as_deref().unwrap_or("(missing)"), 32),
            vc.count
        ));
    }

    out.push_str("-----------------------------------\n");
    out.push_str(&fact_sentence(authorities));
    out.push('\n');

    out
}

fn fmt_share(count: usize, of: usize) -> String {
    if of == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", 100.0 * count as f64 / of as f64)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ValueCount;
    use std::path::PathBuf;

    fn summary(total: usize, top: &str) -> AuthoritySummary {
        AuthoritySummary {
            by_code: vec![ValueCount {
                value: Some("E08000035".to_string()),
                count: total,
            }],
            by_label: vec![ValueCount {
                value: Some(top.to_string()),
                count: total,
            }],
            total,
            top_label: top.to_string(),
        }
    }

    #[test]
    fn fact_sentence_exact_text() {
        assert_eq!(
            fact_sentence(&summary(3, "Borough X")),
            "In the latest data release, there are 3 EPC lodgments in Borough X"
        );
    }

    #[test]
    fn share_formatting() {
        assert_eq!(fmt_share(1, 4), "25.0%");
        assert_eq!(fmt_share(0, 0), "-");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Leeds", 10), "Leeds");
        assert_eq!(truncate("East Riding of Yorkshire", 6), "East .");
    }

    #[test]
    fn run_summary_ends_with_fact() {
        let table = crate::data::Table::from_columns(vec![crate::data::Column::new(
            crate::domain::COL_RATING,
            crate::data::ColumnData::Rating(vec![Some(crate::domain::EnergyRating::C)]),
        )])
        .unwrap();
        let dist = crate::report::rating_distribution(&table).unwrap();
        let dataset = LocatedDataset {
            folder_name: "domestic-E08000035-Leeds".to_string(),
            certificates_path: PathBuf::from("/data/domestic-E08000035-Leeds/certificates.csv"),
        };

        let text = format_run_summary("leeds", &dataset, &dist, &summary(1, "Leeds"));
        assert!(text.contains("Source: domestic-E08000035-Leeds"));
        assert!(text.contains(&format!("{:<6} {:>10} {:>8}", "C", 1, "100.0%")));
        assert!(text.ends_with("In the latest data release, there are 1 EPC lodgments in Leeds\n"));
    }
}
