//! Summarizes the fetched JPYC stats as markdown and swaps it into the README, between the
//! LATEST_DATA markers.

use std::{fs, path::Path};

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    queries::{
        CHAIN, CUMULATIVE_CIRCULATION, CUMULATIVE_ISSUANCE, CUMULATIVE_REDEMPTION, DATE,
        GLOBAL_CUMULATIVE_CIRCULATION, GLOBAL_CUMULATIVE_ISSUANCE, GLOBAL_CUMULATIVE_REDEMPTION,
        TOTAL_UNIQUE_USERS, YEAR_MONTH,
    },
    row::{Row, UserCount},
};

pub const README_FILE: &str = "README.md";
pub const START_MARKER: &str = "<!-- LATEST_DATA_START -->";
pub const END_MARKER: &str = "<!-- LATEST_DATA_END -->";

fn monthly_table(monthly: &[Row]) -> Vec<String> {
    let mut lines = vec![
        "| Month | Chain | Issuance | Redemption | Circulating |".to_string(),
        "|---|---|---|---|---|".to_string(),
    ];

    lines.extend(monthly.iter().map(|row| {
        format!(
            "| {} | {} | {} | {} | {} |",
            row.cell(YEAR_MONTH),
            row.cell(CHAIN),
            row.cell(CUMULATIVE_ISSUANCE),
            row.cell(CUMULATIVE_REDEMPTION),
            row.cell(CUMULATIVE_CIRCULATION),
        )
    }));

    lines
}

// Dune fills the cross chain totals on a single row per month only.
fn global_total_line(monthly: &[Row]) -> Option<String> {
    monthly
        .iter()
        .find(|row| row.has_value(GLOBAL_CUMULATIVE_ISSUANCE))
        .map(|row| {
            format!(
                "Global Total ({}): Issuance {} B JPY / Redemption {} B JPY / Circulating {} B JPY",
                row.cell(YEAR_MONTH),
                row.cell(GLOBAL_CUMULATIVE_ISSUANCE),
                row.cell(GLOBAL_CUMULATIVE_REDEMPTION),
                row.cell(GLOBAL_CUMULATIVE_CIRCULATION),
            )
        })
}

fn latest_daily_line(latest: &Row) -> String {
    format!(
        "Latest date: {} / Total unique users: {}",
        latest.cell(DATE),
        UserCount::from_row(latest, TOTAL_UNIQUE_USERS).format()
    )
}

/// Builds the markdown that goes between the README markers. Daily rows are expected most recent
/// first. Always ends with the last updated line, even when there is no data at all.
pub fn generate_readme_section(monthly: &[Row], daily: &[Row], last_updated: &str) -> String {
    let mut lines = Vec::new();

    if !monthly.is_empty() {
        lines.extend(monthly_table(monthly));
        lines.push(String::new());

        if let Some(global_total) = global_total_line(monthly) {
            lines.push(global_total);
            lines.push(String::new());
        }
    }

    if let Some(latest) = daily.first() {
        lines.push(latest_daily_line(latest));
        lines.push(String::new());
    }

    lines.push(format!("*Last updated: {last_updated}*"));

    lines.join("\n")
}

/// Replaces the first START_MARKER..END_MARKER span, markers included, with the markers wrapped
/// around `section`. Returns None when the document has no such span.
pub fn splice_section(document: &str, section: &str) -> Option<String> {
    let start = document.find(START_MARKER)?;
    let end = document[start + START_MARKER.len()..]
        .find(END_MARKER)
        .map(|offset| start + START_MARKER.len() + offset + END_MARKER.len())?;

    Some(format!(
        "{}{START_MARKER}\n{section}\n{END_MARKER}{}",
        &document[..start],
        &document[end..]
    ))
}

/// Splices `section` into the README in `repo_root`. A README without markers is left alone.
pub fn update_readme(repo_root: &Path, section: &str) -> Result<()> {
    let readme_path = repo_root.join(README_FILE);
    let document = fs::read_to_string(&readme_path)?;

    if !document.contains(START_MARKER) {
        warn!(
            "{} has no {START_MARKER} marker, skipping update",
            readme_path.display()
        );
        return Ok(());
    }

    match splice_section(&document, section) {
        Some(updated) => {
            fs::write(&readme_path, updated)?;
            info!("updated {}", readme_path.display());
        }
        None => {
            warn!(
                "{} has no {END_MARKER} after {START_MARKER}, skipping update",
                readme_path.display()
            );
        }
    }

    Ok(())
}
