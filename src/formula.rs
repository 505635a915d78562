//! Chemical formula decomposition into cation and anion.
//!
//! Formulas are written cation first (`KCl`, `Na2SO4`, `Ca(OH)2`,
//! `(NH4)2SO4`). Polyatomic cations other than NH4+ are only recognized
//! when parenthesized or bracketed.

use crate::error::{CrcError, Result};
use crate::models::{Ion, Salt};
use crate::oxidation;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[^>]+>").expect("valid markup regex"));

static COEFFICIENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<num>\d+)/(?P<den>\d+))?\s*(?P<formula>\S.*)$")
        .expect("valid coefficient regex")
});

static BARE_ION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<ion>NH4|[A-Z][a-z]?)(?P<sub>\d+)?").expect("valid bare ion regex")
});

static BARE_ION_END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<ion>NH4|[A-Z][a-z]?)(?P<sub>\d+)?$").expect("valid bare ion regex")
});

static RAW_ANION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z(\[][A-Za-z0-9()\[\]]*$").expect("valid raw anion regex")
});

static PAREN_ION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\((?P<ion>[\[\]A-Za-z0-9]+)\)(?P<sub>\d+)?").expect("valid group regex")
});

static BRACKET_ION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<ion>[\[\]A-Za-z0-9]+)\](?P<sub>\d+)?").expect("valid group regex")
});

/// A compound cell resolved into its salt and stoichiometric coefficient
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    /// Coefficient prefix (`1/2` in `1/2CaCl2`), 1 when absent
    pub factor: f64,
    pub formula: String,
    pub salt: Salt,
}

/// Remove HTML-style tags such as `<sub>2</sub>`
pub fn strip_markup(text: &str) -> String {
    MARKUP_RE.replace_all(text, "").into_owned()
}

/// Split an optional `n/d` coefficient prefix from a formula
pub fn split_coefficient(text: &str) -> Result<(f64, String)> {
    let trimmed = text.trim();
    let caps = COEFFICIENT_RE
        .captures(trimmed)
        .ok_or_else(|| CrcError::formula_parse(text, "empty formula"))?;

    let factor = match (caps.name("num"), caps.name("den")) {
        (Some(num), Some(den)) => {
            let num: u32 = num
                .as_str()
                .parse()
                .map_err(|e| CrcError::formula_parse(text, format!("bad coefficient: {}", e)))?;
            let den: u32 = den
                .as_str()
                .parse()
                .map_err(|e| CrcError::formula_parse(text, format!("bad coefficient: {}", e)))?;
            if den == 0 {
                return Err(CrcError::formula_parse(text, "zero coefficient denominator"));
            }
            f64::from(num) / f64::from(den)
        }
        _ => 1.0,
    };

    Ok((factor, caps["formula"].trim().to_string()))
}

fn subscript(formula: &str, caps: &Captures<'_>) -> Result<u32> {
    match caps.name("sub") {
        None => Ok(1),
        Some(m) => match m.as_str().parse::<u32>() {
            Ok(0) => Err(CrcError::formula_parse(formula, "zero subscript")),
            Ok(n) => Ok(n),
            Err(e) => Err(CrcError::formula_parse(
                formula,
                format!("bad subscript '{}': {}", m.as_str(), e),
            )),
        },
    }
}

/// Pattern for an ion starting `text`; the leading character decides
fn group_pattern(text: &str) -> Option<&'static Regex> {
    match text.chars().next() {
        Some('(') => Some(&*PAREN_ION_RE),
        Some('[') => Some(&*BRACKET_ION_RE),
        _ => None,
    }
}

/// Split a formula into cation and anion with their subscripts.
///
/// The cation is the leading parenthesized group, bracketed group, or bare
/// symbol (NH4 or one element). The anion is the remainder: a group, a bare
/// symbol spanning the whole remainder, or otherwise the remainder verbatim
/// with subscript 1 (`CO3`, `SCN`). A verbatim remainder must start with a
/// capital letter or group and hold only formula characters.
pub fn parse_formula(formula: &str) -> Result<(Ion, Ion)> {
    let cation_re = group_pattern(formula).unwrap_or(&*BARE_ION_RE);
    let cation_caps = cation_re
        .captures(formula)
        .ok_or_else(|| CrcError::formula_parse(formula, "no cation found"))?;

    let cation = Ion::new(&cation_caps["ion"], subscript(formula, &cation_caps)?);
    let remainder = &formula[cation_caps[0].len()..];

    if remainder.is_empty() {
        return Err(CrcError::formula_parse(formula, "no anion found"));
    }

    let anion_re = group_pattern(remainder).unwrap_or(&*BARE_ION_END_RE);
    let anion = match anion_re.captures(remainder) {
        Some(caps) => Ion::new(&caps["ion"], subscript(formula, &caps)?),
        None if RAW_ANION_RE.is_match(remainder) => Ion::new(remainder, 1),
        None => {
            return Err(CrcError::formula_parse(
                formula,
                format!("'{}' is not an ion", remainder),
            ));
        }
    };

    Ok((cation, anion))
}

/// Convert a formula written cation first into a [`Salt`]
pub fn formula_to_salt(formula: &str) -> Result<Salt> {
    let (cation, anion) = parse_formula(formula)?;
    oxidation::resolve(formula, cation, anion)
}

/// Resolve a raw compound cell (may carry markup and a coefficient prefix)
pub fn parse_compound(raw: &str) -> Result<Compound> {
    let stripped = strip_markup(raw);
    let (factor, formula) = split_coefficient(&stripped)?;
    let salt = formula_to_salt(&formula)?;

    Ok(Compound {
        factor,
        formula,
        salt,
    })
}
