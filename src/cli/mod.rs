/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Command Line Interface (CLI) module
//!
//! ```bash
//! artmie-rs besselj --nu 0 --re 1
//! artmie-rs hankel --kind 2 --nu 1.5 --re -3 --im 0.5
//! artmie-rs mie --x 5.2128 --m-re 1.55
//! artmie-rs --config engine.json check tests/data/testdata_bessel.json
//! ```

use crate::bessel::{BesselEngine, EngineConfig, HankelKind};
use crate::fixtures::{self, FixtureSet};
use crate::mie::MieCalculator;
use anyhow::Context;
use clap::{Parser, Subcommand};
use num_complex::Complex64;
use std::io::Write;
use std::path::PathBuf;

/// Bessel functions of complex argument and Mie scattering of spheres
#[derive(Parser, Debug)]
#[command(name = "artmie-rs")]
#[command(author, version, about)]
pub struct Cli {
    /// JSON file with an engine configuration; missing fields take defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Order and complex argument of a single evaluation
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct Point {
    /// Order ν
    #[arg(long)]
    pub nu: f64,
    /// Real part of the argument
    #[arg(long)]
    pub re: f64,
    /// Imaginary part of the argument
    #[arg(long, default_value_t = 0.0)]
    pub im: f64,
}

impl Point {
    /// The argument z
    pub fn z(&self) -> Complex64 {
        Complex64::new(self.re, self.im)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bessel function of the first kind J_ν(z)
    #[command(allow_negative_numbers = true)]
    Besselj(Point),

    /// Bessel function of the second kind Y_ν(z)
    #[command(allow_negative_numbers = true)]
    Bessely(Point),

    /// Hankel function H⁽¹⁾_ν(z) or H⁽²⁾_ν(z)
    #[command(allow_negative_numbers = true)]
    Hankel {
        /// Kind of the Hankel function (1 or 2)
        #[arg(long, default_value_t = 1)]
        kind: i64,
        #[command(flatten)]
        point: Point,
    },

    /// Mie efficiencies of a homogeneous sphere
    #[command(allow_negative_numbers = true)]
    Mie {
        /// Size parameter x = 2π n_medium r / λ
        #[arg(long)]
        x: f64,
        /// Real part of the relative refractive index
        #[arg(long)]
        m_re: f64,
        /// Imaginary part of the relative refractive index
        #[arg(long, default_value_t = 0.0)]
        m_im: f64,
        /// Truncation order; Wiscombe's criterion when omitted
        #[arg(long)]
        n_max: Option<usize>,
    },

    /// Evaluate a fixture file and report failures
    Check {
        /// Path to the fixture JSON
        path: PathBuf,
    },
}

impl Cli {
    /// Build the engine from `--config` or the defaults
    pub fn engine(&self) -> anyhow::Result<BesselEngine> {
        let config = match &self.config {
            Some(path) => EngineConfig::from_json_file(path)
                .with_context(|| format!("loading engine configuration {}", path.display()))?,
            None => EngineConfig::default(),
        };
        Ok(BesselEngine::new(config))
    }

    /// Run the command, writing results to `out`
    ///
    /// # Returns
    ///
    /// `false` if a fixture check found failures
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<bool> {
        let engine = self.engine()?;

        match &self.command {
            Commands::Besselj(p) => {
                let value = engine.besselj(p.nu, p.z())?;
                writeln!(out, "J_{}({}) = {}", p.nu, p.z(), value)?;
            }
            Commands::Bessely(p) => {
                let value = engine.bessely(p.nu, p.z())?;
                writeln!(out, "Y_{}({}) = {}", p.nu, p.z(), value)?;
            }
            Commands::Hankel { kind, point } => {
                let kind = HankelKind::try_from(*kind)?;
                let value = engine.hankel(point.nu, point.z(), kind)?;
                writeln!(out, "{}_{}({}) = {}", kind, point.nu, point.z(), value)?;
            }
            Commands::Mie {
                x,
                m_re,
                m_im,
                n_max,
            } => {
                let mut calculator = MieCalculator::new(engine);
                if let Some(n) = n_max {
                    calculator = calculator.with_n_max(*n);
                }
                let efficiencies = calculator.efficiencies(*x, Complex64::new(*m_re, *m_im))?;
                writeln!(out, "{}", serde_json::to_string_pretty(&efficiencies)?)?;
            }
            Commands::Check { path } => {
                let set = FixtureSet::from_path(path)
                    .with_context(|| format!("loading fixtures {}", path.display()))?;
                let tolerance = engine.config().tolerance;
                let report = fixtures::run(&engine, &set, tolerance);
                write!(out, "{}", report)?;
                return Ok(report.all_passed());
            }
        }

        Ok(true)
    }
}
