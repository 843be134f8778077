use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// A scalar operand or result. Integers stay integral until they can't.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    /// Numeric comparison across representations, `Int(2)` matches `Float(2.0)`.
    pub fn approx_eq(self, other: Number, tolerance: f64) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) if tolerance == 0.0 => a == b,
            (a, b) => {
                let (a, b) = (a.as_f64(), b.as_f64());
                a == b || (a - b).abs() <= tolerance
            }
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float(a as f64 + b as f64)),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.as_f64()
    }
}

impl FromStr for Number {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Number::Int(value));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| CalcError::invalid_argument(format!("Not a number: '{}'", s)))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add { a: Number, b: Number },
    Divide { a: Number, b: Number },
    CircleArea { radius: Number },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add { a, b } => write!(f, "add({}, {})", a, b),
            Operation::Divide { a, b } => write!(f, "divide({}, {})", a, b),
            Operation::CircleArea { radius } => write!(f, "circle_area({})", radius),
        }
    }
}

/// The result of evaluating one operation, as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub result: Number,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckCase {
    pub name: String,
    pub operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expectation<'a> {
    Value(Number),
    Error(&'a str),
}

impl CheckCase {
    pub fn expecting(name: &str, operation: Operation, expect: impl Into<Number>) -> Self {
        Self {
            name: name.to_string(),
            operation,
            expect: Some(expect.into()),
            expect_error: None,
            tolerance: None,
        }
    }

    pub fn expecting_error(name: &str, operation: Operation, message: &str) -> Self {
        Self {
            name: name.to_string(),
            operation,
            expect: None,
            expect_error: Some(message.to_string()),
            tolerance: None,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn expectation(&self) -> Result<Expectation<'_>> {
        match (&self.expect, &self.expect_error) {
            (Some(value), None) => Ok(Expectation::Value(*value)),
            (None, Some(message)) => Ok(Expectation::Error(message)),
            (Some(_), Some(_)) => Err(CalcError::InvalidConfigValueError {
                field: format!("cases.{}", self.name),
                value: "expect, expect_error".to_string(),
                reason: "Set either expect or expect_error, not both".to_string(),
            }),
            (None, None) => Err(CalcError::MissingConfigError {
                field: format!("cases.{}.expect", self.name),
            }),
        }
    }
}
