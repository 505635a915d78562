//! Salt command implementation
//!
//! Decomposes formulas into ions and prints charges and stoichiometry.

use anyhow::{Result, bail};
use colored::*;
use serde::Serialize;

use super::shared::setup_logging;
use crate::cli::args::SaltArgs;
use crate::formula::{Compound, parse_compound};

/// Decomposition of one formula
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaltReport {
    pub formula: String,
    pub coefficient: f64,
    pub cation: String,
    pub anion: String,
    pub nu_cation: u32,
    pub nu_anion: u32,
}

impl From<&Compound> for SaltReport {
    fn from(compound: &Compound) -> Self {
        Self {
            formula: compound.formula.clone(),
            coefficient: compound.factor,
            cation: compound.salt.cation_name(),
            anion: compound.salt.anion_name(),
            nu_cation: compound.salt.nu_cation(),
            nu_anion: compound.salt.nu_anion(),
        }
    }
}

/// Run the salt command; fails if any formula cannot be resolved
pub fn run_salt(args: SaltArgs) -> Result<Vec<SaltReport>> {
    setup_logging(args.get_log_level(), false);

    let mut reports = Vec::new();
    let mut failures = 0;

    for formula in &args.formulas {
        match parse_compound(formula) {
            Ok(compound) => reports.push(SaltReport::from(&compound)),
            Err(e) => {
                failures += 1;
                eprintln!("{} {}", "Error:".bright_red().bold(), e);
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    if failures > 0 {
        bail!("{} of {} formulas could not be resolved", failures, args.formulas.len());
    }

    Ok(reports)
}

fn print_report(report: &SaltReport) {
    println!("{}", report.formula.bright_green().bold());
    if report.coefficient != 1.0 {
        println!(
            "  {} {}",
            "Coefficient:".bright_cyan(),
            report.coefficient
        );
    }
    println!(
        "  {} {} x{}",
        "Cation:".bright_cyan(),
        report.cation.bright_white(),
        report.nu_cation
    );
    println!(
        "  {} {} x{}",
        "Anion:".bright_cyan(),
        report.anion.bright_white(),
        report.nu_anion
    );
}
