use crate::utils::error::{PlannerError, Result};
use std::collections::HashSet;

/// Fractions coming from configuration may carry float noise
pub const FRACTION_TOLERANCE: f64 = 1e-9;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 不滿足任何比較，要明確拒絕
    if !(value >= min && value <= max) {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_fraction_sum(field_name: &str, text_fraction: f64, media_fraction: f64) -> Result<()> {
    let sum = text_fraction + media_fraction;
    if (sum - 1.0).abs() > FRACTION_TOLERANCE {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} + {}", text_fraction, media_fraction),
            reason: format!("Text and media fractions must sum to 1.0 (got {})", sum),
        });
    }
    Ok(())
}

/// 名稱不分大小寫必須唯一
pub fn validate_unique_names<'a>(
    field_name: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.trim().to_lowercase()) {
            return Err(PlannerError::ConfigValidationError {
                field: field_name.to_string(),
                message: format!("Duplicate name (case-insensitive): {}", name),
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
        assert!(validate_non_empty_string("territories.name", "Skincare").is_ok());
        assert!(validate_non_empty_string("territories.name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("text_fraction", 0.9, 0.0, 1.0).is_ok());
        assert!(validate_range("text_fraction", 1.0, 0.0, 1.0).is_ok());
        assert!(validate_range("text_fraction", 1.2, 0.0, 1.0).is_err());
        assert!(validate_range("text_fraction", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_validate_fraction_sum() {
        assert!(validate_fraction_sum("Skincare", 0.9, 0.1).is_ok());
        assert!(validate_fraction_sum("Make Up", 0.6, 0.4).is_ok());
        assert!(validate_fraction_sum("Broken", 0.6, 0.6).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("territories", ["Skincare", "Make Up"]).is_ok());
        assert!(validate_unique_names("territories", ["Skincare", " skincare"]).is_err());
    }
}
