use std::path::PathBuf;

use clap::Parser;

use crate::models::ScriptVariant;

#[derive(Parser, Debug)]
#[command(
    name = "servitize",
    about = "Detect service offerings in annual-report text and score servitization risk",
    version
)]
pub struct Cli {
    /// Directory of plain-text reports named COMPANY_YYYY.txt (or CODE_..._YYYY_....txt for unspaced)
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Script of the reports, selects dictionary and matching engine
    #[arg(long, default_value = "spaced", value_name = "SCRIPT")]
    pub script: ScriptArg,

    /// Config file [default: <INPUT>/.servitize/config.toml, fallback ~/.config/servitize/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Write the json/csv report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write every evidence snippet to a flat CSV (company, year, category, idx, snippet)
    #[arg(long, value_name = "FILE")]
    pub evidence_csv: Option<PathBuf>,

    /// Write one text file of evidence snippets per category into DIR
    #[arg(long, value_name = "DIR")]
    pub evidence_dir: Option<PathBuf>,

    /// Characters of context kept on each side of a match
    #[arg(long, value_name = "N")]
    pub evidence_window: Option<usize>,

    /// Characters searched on each side of a match for negation cues (spaced only)
    #[arg(long, value_name = "N")]
    pub negation_window: Option<usize>,

    /// Maximum evidence snippets kept per category
    #[arg(long, value_name = "N")]
    pub max_evidence: Option<usize>,

    /// Detect single-word phrases through inflected forms when no exact match is found (spaced only)
    #[arg(long)]
    pub root_fallback: bool,

    /// List the detected categories of every row
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ScriptArg {
    /// Space-delimited scripts (English)
    Spaced,
    /// Scripts without spaces between words (Chinese)
    Unspaced,
}

impl From<ScriptArg> for ScriptVariant {
    fn from(arg: ScriptArg) -> Self {
        match arg {
            ScriptArg::Spaced => ScriptVariant::Spaced,
            ScriptArg::Unspaced => ScriptVariant::Unspaced,
        }
    }
}
