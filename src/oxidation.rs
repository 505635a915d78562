//! Oxidation state resolution for binary salts.
//!
//! Known ions are looked up in a fixed table; the counter-ion's state is
//! inferred from charge balance weighted by the formula subscripts.

use crate::constants::ION_OXIDATION_STATES;
use crate::error::{CrcError, Result};
use crate::models::{Ion, Salt};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

static ION_TABLE: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| ION_OXIDATION_STATES.iter().copied().collect());

/// Oxidation state of a tabulated ion
pub fn lookup(symbol: &str) -> Option<i32> {
    ION_TABLE.get(symbol).copied()
}

/// State of the unknown ion that balances `known` × `known_subscript`
fn balance(known: i32, known_subscript: u32, other_subscript: u32) -> i32 {
    let charge = -(f64::from(known) * f64::from(known_subscript)) / f64::from(other_subscript);
    charge.round() as i32
}

/// Resolve both oxidation states of `cation`/`anion` parsed from `formula`.
///
/// When both ions are tabulated their table states must balance. Otherwise
/// the cation's entry takes precedence and the anion's is used only when the
/// cation is unknown. Fails when neither ion is tabulated, when the inferred
/// state is zero or has the wrong sign, or when the result is not neutral.
pub fn resolve(formula: &str, cation: Ion, anion: Ion) -> Result<Salt> {
    let (z_cation, z_anion) = match (lookup(&cation.symbol), lookup(&anion.symbol)) {
        (Some(z_cation), Some(z_anion)) => (z_cation, z_anion),
        (Some(z_cation), None) => (
            z_cation,
            balance(z_cation, cation.subscript, anion.subscript),
        ),
        (None, Some(z_anion)) => {
            let z_cation = balance(z_anion, anion.subscript, cation.subscript);
            debug!(
                "Inferred {}{:+} from {}{:+} in {}",
                cation.symbol, z_cation, anion.symbol, z_anion, formula
            );
            (z_cation, z_anion)
        }
        (None, None) => {
            return Err(CrcError::oxidation_state(
                formula,
                format!(
                    "neither '{}' nor '{}' has a known oxidation state",
                    cation.symbol, anion.symbol
                ),
            ));
        }
    };

    if z_cation <= 0 || z_anion >= 0 {
        return Err(CrcError::oxidation_state(
            formula,
            format!(
                "'{}' must be positive and '{}' negative, got {:+} and {:+}",
                cation.symbol, anion.symbol, z_cation, z_anion
            ),
        ));
    }

    let salt = Salt {
        cation: cation.with_oxidation_state(z_cation),
        anion: anion.with_oxidation_state(z_anion),
        z_cation,
        z_anion,
    };

    if salt.net_charge() != 0 {
        return Err(CrcError::oxidation_state(
            formula,
            format!("charges do not balance (net charge {:+})", salt.net_charge()),
        ));
    }

    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("Na"), Some(1));
        assert_eq!(lookup("SO4"), Some(-2));
        assert_eq!(lookup("PO4"), Some(-3));
        assert_eq!(lookup("NH4"), Some(1));
        assert_eq!(lookup("Ag"), None);
        assert_eq!(lookup("na"), None);
    }

    #[test]
    fn test_anion_inferred_from_cation() {
        let salt = resolve("Na2CO3", Ion::new("Na", 2), Ion::new("CO3", 1)).unwrap();
        assert_eq!(salt.z_cation, 1);
        assert_eq!(salt.z_anion, -2);
    }

    #[test]
    fn test_cation_inferred_from_anion() {
        let salt = resolve("AlCl3", Ion::new("Al", 1), Ion::new("Cl", 3)).unwrap();
        assert_eq!(salt.z_cation, 3);
        assert_eq!(salt.z_anion, -1);
        assert_eq!(salt.cation.oxidation_state, Some(3));

        let salt = resolve("Fe2(SO4)3", Ion::new("Fe", 2), Ion::new("SO4", 3)).unwrap();
        assert_eq!(salt.z_cation, 3);
    }

    #[test]
    fn test_both_tabulated_use_table_states() {
        let salt = resolve("H2SO4", Ion::new("H", 2), Ion::new("SO4", 1)).unwrap();
        assert_eq!((salt.z_cation, salt.z_anion), (1, -2));
    }

    #[test]
    fn test_both_tabulated_must_balance() {
        // Na+1 with one SO4-2 is not neutral; the anion state is never rewritten
        let err = resolve("NaSO4", Ion::new("Na", 1), Ion::new("SO4", 1)).unwrap_err();
        assert!(matches!(err, CrcError::OxidationState { .. }));
        assert_eq!(err.formula(), Some("NaSO4"));

        let err = resolve("Ca2Cl", Ion::new("Ca", 2), Ion::new("Cl", 1)).unwrap_err();
        assert!(matches!(err, CrcError::OxidationState { .. }));
    }

    #[test]
    fn test_unknown_ions_fail() {
        let err = resolve("XyZw", Ion::new("Xy", 1), Ion::new("Zw", 1)).unwrap_err();
        assert!(matches!(err, CrcError::OxidationState { .. }));
        assert_eq!(err.formula(), Some("XyZw"));
    }

    #[test]
    fn test_unbalanced_formula_fails() {
        // Ca+2 with three singly-charged partners cannot balance
        let err = resolve("CaX3", Ion::new("Ca", 1), Ion::new("X", 3)).unwrap_err();
        assert!(matches!(err, CrcError::OxidationState { .. }));
    }

    #[test]
    fn test_inverted_formula_fails() {
        let err = resolve("ClNa", Ion::new("Cl", 1), Ion::new("Na", 1)).unwrap_err();
        assert!(matches!(err, CrcError::OxidationState { .. }));
    }
}
