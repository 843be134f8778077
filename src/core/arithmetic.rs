//! The three arithmetic helpers. All of them are pure and never log; failures
//! come back as [`CalcError::InvalidArgument`].

use crate::domain::model::{Number, Operation};
use crate::utils::error::{CalcError, Result};
use std::f64::consts::PI;

pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";
pub const NEGATIVE_RADIUS: &str = "Radius cannot be negative";

/// Integer sums stay exact while they fit in `i64` and widen to `f64` past it.
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    a.into() + b.into()
}

pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> Result<f64> {
    let (a, b) = (a.into().as_f64(), b.into().as_f64());
    // -0.0 == 0.0, so both zero signs are rejected
    if b == 0.0 {
        return Err(CalcError::invalid_argument(DIVIDE_BY_ZERO));
    }
    Ok(a / b)
}

pub fn circle_area(radius: impl Into<Number>) -> Result<f64> {
    let radius = radius.into().as_f64();
    if radius < 0.0 {
        return Err(CalcError::invalid_argument(NEGATIVE_RADIUS));
    }
    Ok(PI * radius.powi(2))
}

impl Operation {
    pub fn evaluate(&self) -> Result<Number> {
        match *self {
            Operation::Add { a, b } => Ok(add(a, b)),
            Operation::Divide { a, b } => divide(a, b).map(Number::Float),
            Operation::CircleArea { radius } => circle_area(radius).map(Number::Float),
        }
    }
}
