/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Regression fixtures for the Bessel functions
//!
//! A fixture file holds reference values per function family:
//!
//! ```json
//! {"bessel": {"J": [{"nu": 0.0, "z": [1.0, 0.0], "res": [0.7651976865579666, 0.0]}],
//!             "Y": [], "H": []}}
//! ```
//!
//! `H` cases are Hankel functions of the first kind. A case passes when
//! [`within_tolerance`] accepts the computed value.

pub mod errors;

pub use errors::{FixtureError, Result};

use crate::bessel::{BesselEngine, HankelKind};
use crate::utils::acceptance_error;
use crate::utils::errors::NumericError;
use num_complex::Complex64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Function family of a fixture case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Bessel function of the first kind
    J,
    /// Bessel function of the second kind
    Y,
    /// Hankel function of the first kind
    H,
}

impl Family {
    /// All families in file order
    pub const ALL: [Family; 3] = [Family::J, Family::Y, Family::H];

    /// Evaluate this family at (ν, z)
    pub fn evaluate(
        &self,
        engine: &BesselEngine,
        nu: f64,
        z: Complex64,
    ) -> std::result::Result<Complex64, NumericError> {
        match self {
            Family::J => engine.besselj(nu, z),
            Family::Y => engine.bessely(nu, z),
            Family::H => engine.hankel(nu, z, HankelKind::First),
        }
    }
}

impl FromStr for Family {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "J" | "j" => Ok(Family::J),
            "Y" | "y" => Ok(Family::Y),
            "H" | "h" => Ok(Family::H),
            other => Err(FixtureError::UnknownFamily(other.to_string())),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::J => write!(f, "J"),
            Family::Y => write!(f, "Y"),
            Family::H => write!(f, "H"),
        }
    }
}

/// One reference value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Order
    pub nu: f64,
    /// Argument as [re, im]
    pub z: [f64; 2],
    /// Expected value as [re, im]
    pub res: [f64; 2],
}

impl FixtureCase {
    /// The argument z
    pub fn argument(&self) -> Complex64 {
        Complex64::new(self.z[0], self.z[1])
    }

    /// The expected value
    pub fn expected(&self) -> Complex64 {
        Complex64::new(self.res[0], self.res[1])
    }
}

/// Reference values grouped by family
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BesselFixtures {
    #[serde(rename = "J", default)]
    pub j: Vec<FixtureCase>,
    #[serde(rename = "Y", default)]
    pub y: Vec<FixtureCase>,
    #[serde(rename = "H", default)]
    pub h: Vec<FixtureCase>,
}

/// A fixture file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    pub bessel: BesselFixtures,
}

impl FixtureSet {
    /// Load a fixture file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Parse fixture JSON
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The cases of one family
    pub fn cases(&self, family: Family) -> &[FixtureCase] {
        match family {
            Family::J => &self.bessel.j,
            Family::Y => &self.bessel.y,
            Family::H => &self.bessel.h,
        }
    }

    /// Number of cases over all families
    pub fn len(&self) -> usize {
        Family::ALL.iter().map(|&f| self.cases(f).len()).sum()
    }

    /// Whether the set holds no cases
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Acceptance rule for a computed value
///
/// Relative error below `tolerance` when |expected| ≥ 1e-4, absolute error
/// below `tolerance` otherwise.
pub fn within_tolerance(result: Complex64, expected: Complex64, tolerance: f64) -> bool {
    acceptance_error(result, expected, tolerance).1
}

/// Outcome of one fixture case
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub family: Family,
    pub case: FixtureCase,
    /// The computed value or the error the engine raised
    pub result: std::result::Result<Complex64, NumericError>,
    /// Error measure of the acceptance rule, infinite for engine errors
    pub error: f64,
    pub passed: bool,
}

/// Evaluate one case and judge it
pub fn evaluate_case(
    engine: &BesselEngine,
    family: Family,
    case: &FixtureCase,
    tolerance: f64,
) -> CaseOutcome {
    let result = family.evaluate(engine, case.nu, case.argument());
    let (error, passed) = match &result {
        Ok(value) => acceptance_error(*value, case.expected(), tolerance),
        Err(_) => (f64::INFINITY, false),
    };
    CaseOutcome {
        family,
        case: *case,
        result,
        error,
        passed,
    }
}

/// Summary of a fixture run
#[derive(Debug, Clone, Default)]
pub struct FixtureReport {
    pub total: usize,
    pub passed: usize,
    /// Largest error measure among the evaluated cases
    pub worst_error: f64,
    pub failures: Vec<CaseOutcome>,
}

impl FixtureReport {
    /// Whether every case passed
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl fmt::Display for FixtureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}/{} cases passed, worst error {:e}",
            self.passed, self.total, self.worst_error
        )?;
        for failure in &self.failures {
            match &failure.result {
                Ok(value) => writeln!(
                    f,
                    "  FAIL {}: nu={}, z={} got {} expected {} (error {:e})",
                    failure.family,
                    failure.case.nu,
                    failure.case.argument(),
                    value,
                    failure.case.expected(),
                    failure.error
                )?,
                Err(e) => writeln!(
                    f,
                    "  FAIL {}: nu={}, z={}: {}",
                    failure.family,
                    failure.case.nu,
                    failure.case.argument(),
                    e
                )?,
            }
        }
        Ok(())
    }
}

/// Evaluate every case of a fixture set
pub fn run(engine: &BesselEngine, set: &FixtureSet, tolerance: f64) -> FixtureReport {
    let outcomes: Vec<CaseOutcome> = Family::ALL
        .iter()
        .flat_map(|&family| set.cases(family).iter().map(move |case| (family, *case)))
        .collect::<Vec<_>>()
        .par_iter()
        .map(|(family, case)| evaluate_case(engine, *family, case, tolerance))
        .collect();

    let mut report = FixtureReport {
        total: outcomes.len(),
        ..FixtureReport::default()
    };
    for outcome in outcomes {
        report.worst_error = report.worst_error.max(outcome.error);
        if outcome.passed {
            report.passed += 1;
        } else {
            report.failures.push(outcome);
        }
    }
    log::info!("fixture run: {}/{} passed", report.passed, report.total);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"bessel": {
        "J": [{"nu": 0.0, "z": [1.0, 0.0], "res": [0.7651976865579666, 0.0]}],
        "H": [{"nu": 0.0, "z": [1.0, 0.0], "res": [0.7651976865579666, 0.08825696421567696]}]
    }}"#;

    #[test]
    fn test_parse_and_run() {
        let set = FixtureSet::parse(SAMPLE).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.cases(Family::Y).is_empty());

        let report = run(&BesselEngine::default(), &set, 1e-8);
        assert_eq!(report.total, 2);
        assert!(report.all_passed(), "{}", report);
    }

    #[test]
    fn test_failing_case_is_reported() {
        let set = FixtureSet::parse(
            r#"{"bessel": {"J": [{"nu": 0.0, "z": [1.0, 0.0], "res": [0.5, 0.0]}],
                "Y": [{"nu": 0.0, "z": [0.0, 0.0], "res": [0.0, 0.0]}]}}"#,
        )
        .unwrap();
        let report = run(&BesselEngine::default(), &set, 1e-8);
        assert_eq!(report.passed, 0);
        assert_eq!(report.failures.len(), 2);
        assert!(report.to_string().contains("FAIL"));
    }

    #[test]
    fn test_family_from_str() {
        assert_eq!("J".parse::<Family>().unwrap(), Family::J);
        assert!(matches!(
            "K".parse::<Family>(),
            Err(FixtureError::UnknownFamily(_))
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            FixtureSet::parse("{\"bessel\": 3}"),
            Err(FixtureError::Parse(_))
        ));
    }
}
