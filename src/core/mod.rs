pub mod calculator;

pub use crate::domain::model::{ProductType, Purchase, Quote, Tariff};
pub use crate::domain::ports::NotificationSender;
pub use crate::utils::error::Result;
