use crate::utils::error::{CalcError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_tolerance(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Tolerance must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CalcError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("suite.name", "smoke").is_ok());
        assert!(validate_non_empty_string("suite.name", "").is_err());
        assert!(validate_non_empty_string("suite.name", "   ").is_err());
    }

    #[test]
    fn test_validate_tolerance() {
        assert!(validate_tolerance("suite.tolerance", 0.0).is_ok());
        assert!(validate_tolerance("suite.tolerance", 0.001).is_ok());
        assert!(validate_tolerance("suite.tolerance", -0.1).is_err());
        assert!(validate_tolerance("suite.tolerance", f64::NAN).is_err());
        assert!(validate_tolerance("suite.tolerance", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("cases.a.expect", 28.27).is_ok());
        assert!(validate_finite("cases.a.expect", f64::NAN).is_err());
        assert!(validate_finite("cases.a.expect", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("cases.name", ["a", "b"]).is_ok());
        let err = validate_unique_names("cases.name", ["a", "b", "a"]).unwrap_err();
        assert!(err.to_string().contains("Duplicate name"));
    }
}
