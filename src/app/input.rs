use crate::config::settings::Settings;
use crate::domain::model::{check_period_offered, ProductType, Purchase};
use crate::utils::error::{InstallmentError, PhoneNumberError, Result};
use regex::Regex;

pub const LOCAL_NUMBER_DIGITS: usize = 9;

/// 命令列上提供的原始參數（尚未驗證）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlagInput {
    pub interactive: bool,
    pub product: Option<String>,
    pub cost: Option<f64>,
    pub number: Option<String>,
    pub months: Option<u32>,
}

/// 已驗證但可能不完整的購買資料，互動模式下作為預設值
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseDraft {
    pub product: Option<ProductType>,
    pub price: Option<f64>,
    pub phone_number: Option<String>,
    pub period_months: Option<u32>,
}

impl FlagInput {
    pub fn missing_flags(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.product.is_none() {
            missing.push("-p/--product");
        }
        if self.cost.is_none() {
            missing.push("-c/--cost");
        }
        if self.number.is_none() {
            missing.push("-n/--number");
        }
        if self.months.is_none() {
            missing.push("-m/--months");
        }
        missing
    }

    /// 非互動模式要求四個參數齊全；有提供的欄位一律先驗證
    pub fn validate(&self, settings: &Settings) -> Result<PurchaseDraft> {
        if !self.interactive {
            let missing = self.missing_flags();
            if !missing.is_empty() {
                return Err(InstallmentError::MissingFlags {
                    missing: missing.join(", "),
                });
            }
        }

        let product = self
            .product
            .as_deref()
            .map(str::parse::<ProductType>)
            .transpose()?;
        let price = self.cost.map(checked_price).transpose()?;
        let phone_number = self
            .number
            .as_deref()
            .map(|number| normalize_phone_number(number, &settings.country_code))
            .transpose()?;

        let period_months = match (self.months, product) {
            (Some(months), Some(product)) => {
                settings.tariff.check_period(product, months)?;
                Some(months)
            }
            (Some(months), None) => {
                check_period_offered(months)?;
                Some(months)
            }
            (None, _) => None,
        };

        Ok(PurchaseDraft {
            product,
            price,
            phone_number,
            period_months,
        })
    }
}

impl PurchaseDraft {
    pub fn into_purchase(self) -> Result<Purchase> {
        match (self.product, self.price, self.phone_number, self.period_months) {
            (Some(product), Some(price), Some(phone_number), Some(period_months)) => {
                Ok(Purchase::new(product, price, phone_number, period_months))
            }
            (product, price, phone_number, period_months) => {
                let missing = [
                    (product.is_none(), "-p/--product"),
                    (price.is_none(), "-c/--cost"),
                    (phone_number.is_none(), "-n/--number"),
                    (period_months.is_none(), "-m/--months"),
                ]
                .into_iter()
                .filter(|(absent, _)| *absent)
                .map(|(_, flag)| flag)
                .collect::<Vec<_>>();
                Err(InstallmentError::MissingFlags {
                    missing: missing.join(", "),
                })
            }
        }
    }
}

/// 轉成 `<國碼><9 位數字>`；接受 `+<國碼>…`、`<國碼>…` 或 9 位本地號碼，
/// 中間可夾空白、連字號與括號
pub fn normalize_phone_number(input: &str, country_code: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PhoneNumberError::Missing.into());
    }

    let compact: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    let pattern = national_number_pattern(country_code)?;
    let local = pattern
        .captures(&compact)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .ok_or_else(|| PhoneNumberError::Malformed {
            country_code: country_code.to_string(),
        })?;

    Ok(format!("{}{}", country_code, local.as_str()))
}

fn national_number_pattern(country_code: &str) -> Result<Regex> {
    let pattern = format!(
        r"^(?:\+?{cc}(\d{{{n}}})|(\d{{{n}}}))$",
        cc = regex::escape(country_code),
        n = LOCAL_NUMBER_DIGITS
    );
    Regex::new(&pattern).map_err(|e| InstallmentError::config("country_code", e.to_string()))
}

/// 解析使用者輸入的價格，接受 `,` 作為小數點
pub fn parse_price(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| InstallmentError::invalid_input("введите корректное число"))?;
    checked_price(value)
}

/// 價格必須為正數，並四捨五入到分
pub fn checked_price(value: f64) -> Result<f64> {
    let rounded = (value * 100.0).round() / 100.0;
    if !rounded.is_finite() || rounded <= 0.0 {
        return Err(InstallmentError::InvalidPrice);
    }
    Ok(rounded)
}

pub fn parse_months(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| InstallmentError::invalid_input("введите корректное число"))
}
