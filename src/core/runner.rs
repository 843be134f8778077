use crate::core::{CaseSource, CheckCase, Expectation};
use crate::utils::error::{CalcError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Passed,
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub operation: String,
    #[serde(flatten)]
    pub outcome: CaseOutcome,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.outcome == CaseOutcome::Passed
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub suite: String,
    pub cases: Vec<CaseReport>,
}

impl CheckReport {
    pub fn total(&self) -> usize {
        self.cases.len()
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|case| case.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|case| !case.passed())
    }

    pub fn into_result(self) -> Result<CheckReport> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CalcError::CheckFailed {
                failed: self.failed(),
                total: self.total(),
            })
        }
    }
}

pub struct CheckRunner<S: CaseSource> {
    source: S,
}

impl<S: CaseSource> CheckRunner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self) -> CheckReport {
        let cases = self.source.cases();
        tracing::info!(
            "Running {} cases from suite '{}'",
            cases.len(),
            self.source.suite_name()
        );

        let reports: Vec<CaseReport> = cases.iter().map(|case| self.run_case(case)).collect();
        let report = CheckReport {
            suite: self.source.suite_name().to_string(),
            cases: reports,
        };

        if report.is_success() {
            tracing::info!("All {} cases passed", report.total());
        } else {
            tracing::warn!("{} of {} cases failed", report.failed(), report.total());
        }
        report
    }

    fn run_case(&self, case: &CheckCase) -> CaseReport {
        let outcome = match case.expectation() {
            Ok(expectation) => {
                let tolerance = case.tolerance.unwrap_or(self.source.default_tolerance());
                judge(case, expectation, tolerance)
            }
            Err(e) => CaseOutcome::Failed {
                reason: e.to_string(),
            },
        };

        match &outcome {
            CaseOutcome::Passed => tracing::debug!("✅ {} ({})", case.name, case.operation),
            CaseOutcome::Failed { reason } => {
                tracing::warn!("❌ {} ({}): {}", case.name, case.operation, reason)
            }
        }

        CaseReport {
            name: case.name.clone(),
            operation: case.operation.to_string(),
            outcome,
        }
    }
}

fn judge(case: &CheckCase, expectation: Expectation<'_>, tolerance: f64) -> CaseOutcome {
    match (expectation, case.operation.evaluate()) {
        (Expectation::Value(expected), Ok(actual)) => {
            if actual.approx_eq(expected, tolerance) {
                CaseOutcome::Passed
            } else {
                CaseOutcome::Failed {
                    reason: format!(
                        "expected {}, got {} (tolerance {})",
                        expected, actual, tolerance
                    ),
                }
            }
        }
        (Expectation::Value(expected), Err(e)) => CaseOutcome::Failed {
            reason: format!("expected {}, got error: {}", expected, e),
        },
        (Expectation::Error(message), Ok(actual)) => CaseOutcome::Failed {
            reason: format!("expected error containing '{}', got {}", message, actual),
        },
        (Expectation::Error(message), Err(e)) => {
            if e.is_invalid_argument() && e.to_string().contains(message) {
                CaseOutcome::Passed
            } else {
                CaseOutcome::Failed {
                    reason: format!("expected error containing '{}', got: {}", message, e),
                }
            }
        }
    }
}
