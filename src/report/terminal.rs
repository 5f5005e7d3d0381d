use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{CompanyYearRow, ScriptVariant};

/// Render a colored terminal report.
pub fn render(
    rows: &[CompanyYearRow],
    path: &Path,
    variant: ScriptVariant,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let companies = count_companies(rows);
    let comp_total: usize = rows.iter().map(|r| r.result.summary.comp_count).sum();
    let sub_total: usize = rows.iter().map(|r| r.result.summary.sub_count).sum();
    let mean_risk = mean_risk(rows);

    if quiet {
        println!(
            "Companies: {}  Rows: {}  Complementing: {}  Substituting: {}  Mean risk: {}",
            companies,
            rows.len(),
            comp_total.to_string().green(),
            sub_total.to_string().red(),
            format!("{:.2}", mean_risk).bold(),
        );
        return Ok(());
    }

    println!("\n {} v{}", "servitize".bold(), env!("CARGO_PKG_VERSION"));
    println!(" Scanning: {} ({})\n", path.display(), variant);

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Companies          : {}", companies));
    println!(" │  {:<48} │", format!("Company-years      : {}", rows.len()));
    println!(
        " │  {:<48} │",
        format!("{}  Complementing   : {:>4}", "+".green(), comp_total)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Substituting    : {:>4}", "!".red(), sub_total)
    );
    println!(" │  {:<48} │", format!("Mean risk score    : {:.2}", mean_risk));
    println!(" └────────────────────────────────────────────────────┘\n");

    if rows.is_empty() {
        return Ok(());
    }

    render_table(rows);
    println!();

    if verbose {
        println!(" {} Detected categories:\n", "[DETAIL]".cyan().bold());
        for row in rows {
            let detected: Vec<&str> = row.result.detected().collect();
            let list = if detected.is_empty() {
                "none".dimmed().to_string()
            } else {
                detected.join(", ")
            };
            println!("  {} {}  {}", row.company.bold(), row.year, list);
        }
        println!();
    }

    Ok(())
}

fn render_table(rows: &[CompanyYearRow]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Company").add_attribute(Attribute::Bold),
            Cell::new("Year").add_attribute(Attribute::Bold),
            Cell::new("Services").add_attribute(Attribute::Bold),
            Cell::new("Complementing").add_attribute(Attribute::Bold),
            Cell::new("Substituting").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
        ]);

    for row in rows {
        let summary = &row.result.summary;
        table.add_row(vec![
            Cell::new(&row.company),
            Cell::new(row.year),
            Cell::new(summary.service_num).set_alignment(CellAlignment::Right),
            Cell::new(summary.comp_count).set_alignment(CellAlignment::Right),
            Cell::new(summary.sub_count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", summary.risk_score))
                .fg(risk_color(summary.risk_score))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

/// Color band of a risk score: no substituting signal, one, or several.
fn risk_color(score: f64) -> Color {
    if score < 2.0 {
        Color::Green
    } else if score < 4.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn count_companies(rows: &[CompanyYearRow]) -> usize {
    let mut companies: Vec<&str> = rows.iter().map(|r| r.company.as_str()).collect();
    companies.sort_unstable();
    companies.dedup();
    companies.len()
}

fn mean_risk(rows: &[CompanyYearRow]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().map(|r| r.result.summary.risk_score).sum::<f64>() / rows.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassificationResult, RiskSummary};

    fn row(company: &str, risk_score: f64) -> CompanyYearRow {
        CompanyYearRow {
            company: company.to_string(),
            year: 2020,
            result: ClassificationResult {
                flags: Default::default(),
                evidence: Default::default(),
                summary: RiskSummary {
                    risk_score,
                    ..Default::default()
                },
            },
        }
    }

    #[test]
    fn test_risk_bands() {
        assert_eq!(risk_color(0.0), Color::Green);
        assert_eq!(risk_color(1.5), Color::Green);
        assert_eq!(risk_color(2.5), Color::Yellow);
        assert_eq!(risk_color(6.0), Color::Red);
    }

    #[test]
    fn test_summary_helpers() {
        let rows = vec![row("A", 1.0), row("B", 3.0), row("A", 2.0)];
        assert_eq!(count_companies(&rows), 2);
        assert_eq!(mean_risk(&rows), 2.0);
        assert_eq!(mean_risk(&[]), 0.0);
    }
}
