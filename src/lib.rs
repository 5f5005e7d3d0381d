//! `servitize`: detect service offerings in business-description text and
//! derive a servitization risk score per company-year.
//!
//! # Flow
//! 1. Build a [`taxonomy::Taxonomy`] once (built-in or from [`config`]).
//! 2. Pick the engine for its script with [`engine::classifier_for`].
//! 3. [`engine::Classifier::classify`] each text: phrase scan, negation
//!    filtering, evidence capture, then [`risk::score`].
//! 4. [`batch::process`] / [`batch::process_corpus`] turn `{year: text}` maps
//!    into ordered [`models::CompanyYearRow`]s.

pub mod batch;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod risk;
pub mod source;
pub mod taxonomy;
