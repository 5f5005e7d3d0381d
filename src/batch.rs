use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;

use crate::engine::{ClassifyOptions, Classifier};
use crate::models::CompanyYearRow;

/// Texts of one company, keyed by year.
pub type YearTexts = HashMap<i32, String>;

/// Classify every year of one company.
///
/// Rows come back in ascending year order whatever the map's iteration order.
/// Each year is classified independently; `texts` is never modified.
pub fn process(
    classifier: &dyn Classifier,
    company_id: &str,
    texts: &YearTexts,
    options: &ClassifyOptions,
) -> Vec<CompanyYearRow> {
    let mut years: Vec<i32> = texts.keys().copied().collect();
    years.sort_unstable();

    years
        .into_iter()
        .map(|year| CompanyYearRow {
            company: company_id.to_string(),
            year,
            result: classifier.classify(&texts[&year], options),
        })
        .collect()
}

/// Classify a whole corpus, one company per task, in parallel.
///
/// Tasks share only the classifier (and through it the read-only taxonomy).
/// Rows are ordered by company, then year. `on_company` is called once per
/// finished company, from whichever worker finished it.
pub fn process_corpus<F>(
    classifier: &dyn Classifier,
    corpus: &BTreeMap<String, YearTexts>,
    options: &ClassifyOptions,
    on_company: F,
) -> Vec<CompanyYearRow>
where
    F: Fn(&str) + Sync,
{
    let per_company: Vec<Vec<CompanyYearRow>> = corpus
        .par_iter()
        .map(|(company, texts)| {
            let rows = process(classifier, company, texts, options);
            on_company(company);
            rows
        })
        .collect();

    per_company.into_iter().flatten().collect()
}
