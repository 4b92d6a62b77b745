//! Verify the embedded acceptance cases.
//!
//! `cases/acceptance.toml` is compiled into the library. Every case is run
//! under every [`Strategy`], so a divergence between the stack pass and the
//! reference rescan shows up as a failure.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::reduce::{reduce_with, Strategy};

static ACCEPTANCE_TOML: &str = include_str!("../cases/acceptance.toml");

/// One input/expected pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub name: String,
    pub input: String,
    pub expected: String,
}

#[derive(Debug, Deserialize)]
struct CaseFile {
    #[serde(default)]
    case: Vec<Case>,
}

/// Result of a single test case.
#[derive(Debug)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Result of verifying all cases.
#[derive(Debug)]
pub struct VerifyResult {
    pub results: Vec<TestResult>,
}

impl VerifyResult {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// Parse a case file in the `[[case]]` TOML format.
pub fn parse_cases(contents: &str) -> Result<Vec<Case>> {
    let file: CaseFile = toml::from_str(contents).context("failed to parse acceptance cases")?;
    Ok(file.case)
}

/// The cases compiled into the library.
pub fn embedded_cases() -> Result<Vec<Case>> {
    parse_cases(ACCEPTANCE_TOML)
}

/// Run `cases` under every strategy.
pub fn verify_cases(cases: &[Case]) -> VerifyResult {
    let mut results = Vec::with_capacity(cases.len() * Strategy::ALL.len());
    for strategy in Strategy::ALL {
        for case in cases {
            let actual = reduce_with(strategy, &case.input);
            results.push(TestResult {
                name: format!("{strategy}::{}", case.name),
                passed: actual == case.expected,
                expected: case.expected.clone(),
                actual,
            });
        }
    }
    VerifyResult { results }
}

/// Verify the embedded acceptance cases.
pub fn verify_embedded() -> Result<VerifyResult> {
    Ok(verify_cases(&embedded_cases()?))
}
