use crate::core::calculator::DEFAULT_CURRENCY;
use crate::domain::model::{ProductType, Tariff, INSTALLMENT_PERIODS};
use crate::utils::error::{InstallmentError, Result};
use crate::utils::validation::{
    validate_digits, validate_non_empty_string, validate_one_of, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_COUNTRY_CODE: &str = "992";

/// 可由 TOML 覆寫的執行設定，缺少的鍵使用預設值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub country_code: String,
    pub currency: String,
    pub tariff: Tariff,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            tariff: Tariff::default(),
        }
    }
}

impl Settings {
    /// 有指定路徑時讀檔，否則使用預設值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("📁 Loading settings from: {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InstallmentError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| InstallmentError::config("toml_parsing", e.to_string()))
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_digits("country_code", &self.country_code)?;
        validate_non_empty_string("currency", &self.currency)?;

        for product in ProductType::ALL {
            let terms = self.tariff.terms(product);
            let key = product.config_key();
            validate_range(&format!("tariff.{key}.rate"), terms.rate, 0.0, 1.0)?;
            validate_one_of(
                &format!("tariff.{key}.max_months"),
                terms.max_months,
                &INSTALLMENT_PERIODS,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.country_code, "992");
        assert_eq!(settings.currency, "сомони");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml_str(
            r#"
currency = "TJS"

[tariff.computer]
rate = 0.045
max_months = 24
"#,
        )
        .unwrap();

        assert_eq!(settings.country_code, "992");
        assert_eq!(settings.currency, "TJS");
        assert_eq!(settings.tariff.computer.rate, 0.045);
        assert_eq!(settings.tariff.computer.max_months, 24);
        assert_eq!(settings.tariff.smartphone, Tariff::default().smartphone);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_product_table_keeps_product_defaults() {
        let settings = Settings::from_toml_str(
            r#"
[tariff.computer]
max_months = 24

[tariff.tv]
rate = 0.06
"#,
        )
        .unwrap();

        assert_eq!(settings.tariff.computer.rate, 0.04);
        assert_eq!(settings.tariff.computer.max_months, 24);
        assert_eq!(settings.tariff.tv.rate, 0.06);
        assert_eq!(settings.tariff.tv.max_months, 18);
        assert_eq!(settings.tariff.smartphone, Tariff::default().smartphone);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let settings = Settings::from_toml_str("country_code = \"+992\"").unwrap();
        assert!(settings.validate().is_err());

        let settings = Settings::from_toml_str(
            r#"
[tariff.tv]
rate = 0.05
max_months = 10
"#,
        )
        .unwrap();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("tariff.tv.max_months"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Settings::from_toml_str("country_code = ").unwrap_err();
        assert!(matches!(err, InstallmentError::ConfigError { ref field, .. } if field == "toml_parsing"));
    }
}
