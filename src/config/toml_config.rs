use crate::core::{arithmetic, CaseSource, CheckCase, Number, Operation};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A suite of check cases loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub suite: SuiteConfig,
    #[serde(default)]
    pub cases: Vec<CheckCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub name: String,
    pub description: Option<String>,
    pub tolerance: Option<f64>,
}

impl CheckConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CalcError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// The arithmetic contract as a suite, used when no check file is given.
    pub fn builtin() -> Self {
        let int = Number::Int;
        let add = |a: Number, b: Number| Operation::Add { a, b };
        let large = 10_i64.pow(10);

        let mut cases = vec![
            CheckCase::expecting("add positive numbers", add(int(5), int(3)), 8),
            CheckCase::expecting("add negative numbers", add(int(-5), int(3)), -2),
            CheckCase::expecting("add zero", add(int(5), int(0)), 5),
        ];

        let table: [(Number, Number, Number); 5] = [
            (int(1), int(1), int(2)),
            (int(0), int(0), int(0)),
            (int(-1), int(1), int(0)),
            (int(100), int(200), int(300)),
            (Number::Float(0.5), Number::Float(0.25), Number::Float(0.75)),
        ];
        cases.extend(table.into_iter().map(|(a, b, expected)| {
            CheckCase::expecting(&format!("add({}, {})", a, b), add(a, b), expected)
        }));

        cases.extend([
            CheckCase::expecting("add large numbers", add(int(large), int(large)), 2 * large),
            CheckCase::expecting(
                "divide positive numbers",
                Operation::Divide {
                    a: int(10),
                    b: int(2),
                },
                5.0,
            ),
            CheckCase::expecting_error(
                "divide by zero",
                Operation::Divide {
                    a: int(10),
                    b: int(0),
                },
                arithmetic::DIVIDE_BY_ZERO,
            ),
            CheckCase::expecting(
                "circle area positive radius",
                Operation::CircleArea { radius: int(3) },
                std::f64::consts::PI * 9.0,
            )
            .with_tolerance(0.001),
            CheckCase::expecting(
                "circle area zero radius",
                Operation::CircleArea { radius: int(0) },
                0,
            ),
            CheckCase::expecting_error(
                "circle area negative radius",
                Operation::CircleArea { radius: int(-5) },
                arithmetic::NEGATIVE_RADIUS,
            ),
        ]);

        Self {
            suite: SuiteConfig {
                name: "builtin".to_string(),
                description: Some("Arithmetic helper contract".to_string()),
                tolerance: None,
            },
            cases,
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("suite.name", &self.suite.name)?;

        if let Some(tolerance) = self.suite.tolerance {
            validation::validate_tolerance("suite.tolerance", tolerance)?;
        }

        if self.cases.is_empty() {
            return Err(CalcError::MissingConfigError {
                field: "cases".to_string(),
            });
        }

        for case in &self.cases {
            validation::validate_non_empty_string("cases.name", &case.name)?;
            if let Some(tolerance) = case.tolerance {
                validation::validate_tolerance(&format!("cases.{}.tolerance", case.name), tolerance)?;
            }
            // expected values must be finite
            if let Some(expect) = case.expect {
                validation::validate_finite(&format!("cases.{}.expect", case.name), expect.as_f64())?;
            }
            case.expectation()?;
        }

        validation::validate_unique_names("cases.name", self.cases.iter().map(|c| c.name.as_str()))
    }
}

impl CaseSource for CheckConfig {
    fn suite_name(&self) -> &str {
        &self.suite.name
    }

    fn cases(&self) -> &[CheckCase] {
        &self.cases
    }

    fn default_tolerance(&self) -> f64 {
        self.suite.tolerance.unwrap_or(0.0)
    }
}

impl Validate for CheckConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
