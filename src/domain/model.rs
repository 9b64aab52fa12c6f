use crate::utils::error::{InstallmentError, PeriodError, PhoneNumberError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 可選的分期期數（月）
pub const INSTALLMENT_PERIODS: [u32; 6] = [3, 6, 9, 12, 18, 24];

/// 免息月數，之後每滿一個計息週期加收一次利息
pub const INTEREST_FREE_MONTHS: u32 = 3;

pub const BILLING_STEP_MONTHS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Smartphone,
    Computer,
    Tv,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [Self::Smartphone, Self::Computer, Self::Tv];

    pub fn label(self) -> &'static str {
        match self {
            Self::Smartphone => "Смартфон",
            Self::Computer => "Компьютер",
            Self::Tv => "Телевизор",
        }
    }

    /// 互動選單中的編號
    pub fn menu_key(self) -> &'static str {
        match self {
            Self::Smartphone => "1",
            Self::Computer => "2",
            Self::Tv => "3",
        }
    }

    /// 設定檔中的鍵名
    pub fn config_key(self) -> &'static str {
        match self {
            Self::Smartphone => "smartphone",
            Self::Computer => "computer",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductType {
    type Err = InstallmentError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "1" | "смартфон" | "smartphone" => Ok(Self::Smartphone),
            "2" | "компьютер" | "computer" => Ok(Self::Computer),
            "3" | "телевизор" | "tv" => Ok(Self::Tv),
            _ => Err(InstallmentError::InvalidProductType(trimmed.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductTerms {
    /// 每個計息週期的利率
    pub rate: f64,
    pub max_months: u32,
}

/// 各商品的利率與最長分期；設定檔中缺少的鍵沿用該商品的預設值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TariffOverrides")]
pub struct Tariff {
    pub smartphone: ProductTerms,
    pub computer: ProductTerms,
    pub tv: ProductTerms,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            smartphone: ProductTerms {
                rate: 0.03,
                max_months: 9,
            },
            computer: ProductTerms {
                rate: 0.04,
                max_months: 12,
            },
            tv: ProductTerms {
                rate: 0.05,
                max_months: 18,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TermsOverride {
    rate: Option<f64>,
    max_months: Option<u32>,
}

impl TermsOverride {
    fn apply(self, base: ProductTerms) -> ProductTerms {
        ProductTerms {
            rate: self.rate.unwrap_or(base.rate),
            max_months: self.max_months.unwrap_or(base.max_months),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TariffOverrides {
    smartphone: TermsOverride,
    computer: TermsOverride,
    tv: TermsOverride,
}

impl From<TariffOverrides> for Tariff {
    fn from(overrides: TariffOverrides) -> Self {
        let base = Tariff::default();
        Self {
            smartphone: overrides.smartphone.apply(base.smartphone),
            computer: overrides.computer.apply(base.computer),
            tv: overrides.tv.apply(base.tv),
        }
    }
}

impl Tariff {
    pub fn terms(&self, product: ProductType) -> &ProductTerms {
        match product {
            ProductType::Smartphone => &self.smartphone,
            ProductType::Computer => &self.computer,
            ProductType::Tv => &self.tv,
        }
    }

    pub fn interest_rate(&self, product: ProductType) -> f64 {
        self.terms(product).rate
    }

    pub fn period_range(&self, product: ProductType) -> (u32, u32) {
        (INTEREST_FREE_MONTHS, self.terms(product).max_months)
    }

    pub fn available_periods(&self, product: ProductType) -> Vec<u32> {
        let (min, max) = self.period_range(product);
        INSTALLMENT_PERIODS
            .iter()
            .copied()
            .filter(|months| (min..=max).contains(months))
            .collect()
    }

    /// 先檢查商品允許的範圍，再檢查是否為選單中的期數
    pub fn check_period(&self, product: ProductType, months: u32) -> Result<()> {
        let (min, max) = self.period_range(product);
        if months < min || months > max {
            return Err(PeriodError::OutOfRange { product, min, max }.into());
        }
        check_period_offered(months)
    }
}

pub fn check_period_offered(months: u32) -> Result<()> {
    if INSTALLMENT_PERIODS.contains(&months) {
        Ok(())
    } else {
        Err(PeriodError::NotOffered {
            allowed: format_periods(&INSTALLMENT_PERIODS),
        }
        .into())
    }
}

pub fn format_periods(periods: &[u32]) -> String {
    periods
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub product: ProductType,
    pub price: f64,
    pub phone_number: String,
    pub period_months: u32,
}

impl Purchase {
    pub fn new(
        product: ProductType,
        price: f64,
        phone_number: impl Into<String>,
        period_months: u32,
    ) -> Self {
        Self {
            product,
            price,
            phone_number: phone_number.into(),
            period_months,
        }
    }

    pub fn validate(&self, tariff: &Tariff) -> Result<()> {
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(InstallmentError::InvalidPrice);
        }

        if self.phone_number.trim().is_empty() {
            return Err(PhoneNumberError::Missing.into());
        }

        tariff.check_period(self.product, self.period_months)
    }

    /// 前三個月免息，之後每滿三個月加收一次單利
    pub fn total_payment(&self, tariff: &Tariff) -> f64 {
        if self.period_months <= INTEREST_FREE_MONTHS {
            return self.price;
        }

        let extra_periods = (self.period_months - INTEREST_FREE_MONTHS) / BILLING_STEP_MONTHS;
        let rate = tariff.interest_rate(self.product);
        self.price * (1.0 + f64::from(extra_periods) * rate)
    }

    pub fn overpayment(&self, tariff: &Tariff) -> f64 {
        self.total_payment(tariff) - self.price
    }
}

/// 計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub product: ProductType,
    pub price: f64,
    pub period_months: u32,
    pub total: f64,
    pub overpayment: f64,
    pub calculated_at: DateTime<Utc>,
}
