use crate::domain::model::CheckCase;

/// Anything that can hand the runner a named list of check cases.
pub trait CaseSource {
    fn suite_name(&self) -> &str;
    fn cases(&self) -> &[CheckCase];
    /// Tolerance applied to cases that don't set their own.
    fn default_tolerance(&self) -> f64;
}
