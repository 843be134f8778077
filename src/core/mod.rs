pub mod arithmetic;
pub mod runner;

pub use crate::domain::model::{CheckCase, Evaluation, Expectation, Number, Operation};
pub use crate::domain::ports::CaseSource;
pub use crate::utils::error::Result;
