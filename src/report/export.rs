use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::CompanyYearRow;

/// Pretty-printed JSON array of rows, flags and evidence included.
pub fn write_json<W: Write>(rows: &[CompanyYearRow], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    Ok(())
}

/// One CSV line per row: aggregates, then a 0/1 column per category in `categories` order.
pub fn write_csv<W: Write>(rows: &[CompanyYearRow], categories: &[&str], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["company", "year", "service_num", "comp_count", "sub_count", "risk_score"];
    header.extend_from_slice(categories);
    csv_writer.write_record(&header)?;

    for row in rows {
        let summary = &row.result.summary;
        let mut record = vec![
            row.company.clone(),
            row.year.to_string(),
            summary.service_num.to_string(),
            summary.comp_count.to_string(),
            summary.sub_count.to_string(),
            summary.risk_score.to_string(),
        ];
        record.extend(
            categories
                .iter()
                .map(|c| row.result.flags.get(*c).copied().unwrap_or(0).to_string()),
        );
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Flat evidence table: `company, year, category, idx, snippet`.
pub fn write_evidence_csv<W: Write>(rows: &[CompanyYearRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["company", "year", "category", "idx", "snippet"])?;

    for row in rows {
        let year = row.year.to_string();
        for (category, snippets) in &row.result.evidence {
            for (idx, snippet) in snippets.iter().enumerate() {
                csv_writer.write_record([
                    row.company.as_str(),
                    year.as_str(),
                    category.as_str(),
                    idx.to_string().as_str(),
                    flatten(snippet).as_str(),
                ])?;
            }
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// One `<category>.txt` per category under `dir`, a line per snippet
/// prefixed with `[company-year]`.
pub fn write_evidence_dir(rows: &[CompanyYearRow], dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut buckets: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for row in rows {
        for (category, snippets) in &row.result.evidence {
            let lines = buckets.entry(category.as_str()).or_default();
            lines.extend(
                snippets
                    .iter()
                    .map(|s| format!("[{}-{}] {}", row.company, row.year, flatten(s))),
            );
        }
    }

    for (category, lines) in buckets {
        let path = dir.join(format!("{}.txt", category.replace('/', "_")));
        let mut content = lines.join("\n");
        content.push('\n');
        std::fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}

fn flatten(snippet: &str) -> String {
    snippet.replace(['\r', '\n'], " ").trim().to_string()
}
