use crate::utils::error::{InstallmentError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InstallmentError::config(
            field_name,
            "значение не может быть пустым",
        ));
    }
    Ok(())
}

pub fn validate_digits(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(InstallmentError::config(
            field_name,
            format!("ожидаются только цифры, получено \"{}\"", value),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(InstallmentError::config(
            field_name,
            format!("значение {} должно быть от {} до {}", value, min, max),
        ));
    }
    Ok(())
}

pub fn validate_one_of<T: PartialEq + std::fmt::Display>(
    field_name: &str,
    value: T,
    allowed: &[T],
) -> Result<()> {
    if !allowed.contains(&value) {
        let allowed = allowed
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(InstallmentError::config(
            field_name,
            format!("значение {} не входит в список: {}", value, allowed),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_digits() {
        assert!(validate_digits("country_code", "992").is_ok());
        assert!(validate_digits("country_code", "").is_err());
        assert!(validate_digits("country_code", "+992").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("tariff.tv.rate", 0.05, 0.0, 1.0).is_ok());
        assert!(validate_range("tariff.tv.rate", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range("tariff.tv.rate", -0.1, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("max_months", 12, &[3, 6, 9, 12]).is_ok());

        let err = validate_one_of("max_months", 10, &[3, 6, 9, 12]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ошибка конфигурации (max_months): значение 10 не входит в список: 3, 6, 9, 12"
        );
    }
}
