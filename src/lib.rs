pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::notification::ConsoleSender;
pub use app::handler::{Handler, OutputFormat};
pub use app::input::FlagInput;
pub use config::settings::Settings;
pub use crate::core::calculator::InstallmentCalculator;
pub use domain::model::{ProductType, Purchase, Quote, Tariff};
pub use domain::ports::NotificationSender;
pub use utils::error::{InstallmentError, NotificationError, Result};
