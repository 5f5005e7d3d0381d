//! `servitize`: classify annual-report text into service categories and score risk.
//!
//! # Flow
//! 1. Parse CLI arguments (`servitize::cli`).
//! 2. Load config and build the taxonomy (`servitize::config::load_config`).
//! 3. Collect `{company: {year: text}}` from the input directory (`servitize::source`).
//! 4. Classify every company-year in parallel (`servitize::batch::process_corpus`).
//! 5. Render the requested report and evidence exports (`servitize::report`).
//! 6. Exit `0`, or `1` when no usable documents were found.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use servitize::batch::process_corpus;
use servitize::cli::{Cli, ReportFormat};
use servitize::config::load_config;
use servitize::engine::roots::InflectionRoots;
use servitize::engine::{classifier_for, Classifier, SpacedClassifier};
use servitize::models::ScriptVariant;
use servitize::report;
use servitize::source::{collect_corpus, Collected, NamingScheme};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve input path
    let path = cli
        .input
        .canonicalize()
        .unwrap_or_else(|_| cli.input.clone());

    let variant = ScriptVariant::from(cli.script);

    // Config errors are fatal: bad dictionaries never reach classification
    let config = load_config(&path, cli.config.as_deref())?;
    let taxonomy = config.taxonomy(variant)?;

    let mut options = config.options.resolve(variant);
    if let Some(n) = cli.evidence_window {
        options.evidence_window = n;
    }
    if let Some(n) = cli.negation_window {
        options.negation_window = n;
    }
    if let Some(n) = cli.max_evidence {
        options.max_evidence_per_category = Some(n);
    }
    if cli.root_fallback {
        options.use_fallback = true;
    }

    let classifier: Box<dyn Classifier + '_> = match variant {
        ScriptVariant::Spaced if options.use_fallback => {
            Box::new(SpacedClassifier::with_root_forms(&taxonomy, InflectionRoots))
        }
        _ => classifier_for(&taxonomy),
    };
    if options.use_fallback && variant == ScriptVariant::Unspaced && !cli.quiet {
        eprintln!(
            "  {} root-form fallback only applies to spaced text; ignoring",
            "⚠".yellow()
        );
    }

    let Collected { corpus, skipped } = collect_corpus(&path, NamingScheme::for_variant(variant))?;

    if !cli.quiet {
        for file in &skipped {
            eprintln!(
                "  {} skipping {}: only plain-text documents are read",
                "⚠".yellow(),
                file.display()
            );
        }
    }

    if corpus.is_empty() {
        eprintln!("No usable reports found in {}", path.display());
        std::process::exit(1);
    }

    if !cli.quiet {
        let documents: usize = corpus.values().map(|years| years.len()).sum();
        eprintln!(
            "  {} {} companies, {} reports, {} categories",
            "→".cyan(),
            corpus.len(),
            documents,
            taxonomy.len()
        );
    }

    let pb = if !cli.quiet {
        let pb = ProgressBar::new(corpus.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let rows = process_corpus(classifier.as_ref(), &corpus, &options, |company| {
        if let Some(pb) = &pb {
            pb.set_message(company.to_string());
            pb.inc(1);
        }
    });

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    // Render report
    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&rows, &path, variant, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => match &cli.output {
            Some(out) => report::export::write_json(&rows, BufWriter::new(create(out)?))?,
            None => report::export::write_json(&rows, std::io::stdout().lock())?,
        },
        ReportFormat::Csv => {
            let categories: Vec<&str> = taxonomy.ids().collect();
            match &cli.output {
                Some(out) => {
                    report::export::write_csv(&rows, &categories, BufWriter::new(create(out)?))?
                }
                None => report::export::write_csv(&rows, &categories, std::io::stdout().lock())?,
            }
        }
    }

    if let Some(out) = &cli.evidence_csv {
        report::export::write_evidence_csv(&rows, BufWriter::new(create(out)?))?;
        if !cli.quiet {
            eprintln!("  {} evidence written to {}", "✓".green(), out.display());
        }
    }

    if let Some(dir) = &cli.evidence_dir {
        report::export::write_evidence_dir(&rows, dir)?;
        if !cli.quiet {
            eprintln!("  {} per-category evidence written under {}", "✓".green(), dir.display());
        }
    }

    Ok(())
}

/// Create `path` (and its parent directories) for writing.
fn create(path: &std::path::Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("failed to create {}", path.display()))
}
