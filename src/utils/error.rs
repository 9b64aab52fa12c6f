use crate::domain::model::ProductType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallmentError {
    #[error("цена должна быть больше 0")]
    InvalidPrice,

    #[error("{0}")]
    InvalidPhoneNumber(#[from] PhoneNumberError),

    #[error("неверный тип продукта: {0}. Допустимые значения: 1/Смартфон, 2/Компьютер, 3/Телевизор")]
    InvalidProductType(String),

    #[error("неверный срок рассрочки: {0}")]
    InvalidPeriod(#[from] PeriodError),

    #[error("не удалось отправить SMS: {0}")]
    NotificationSendFailed(#[source] NotificationError),

    #[error(
        "все флаги обязательны в неинтерактивном режиме (не указаны: {missing}), \
         либо используйте интерактивный режим (-i/--interactive)"
    )]
    MissingFlags { missing: String },

    #[error("{message}")]
    InvalidInput { message: String },

    #[error("ввод прерван")]
    InputClosed,

    #[error("ошибка конфигурации ({field}): {message}")]
    ConfigError { field: String, message: String },

    #[error("ошибка ввода-вывода: {0}")]
    IoError(#[from] std::io::Error),

    #[error("ошибка сериализации: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    #[error("необходимо указать номер телефона")]
    Missing,

    #[error(
        "неверный формат номера телефона. Используйте формат: \
         {country_code}XXXXXXXXX, +{country_code}XXXXXXXXX или XXXXXXXXX"
    )]
    Malformed { country_code: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("для {product} допустимый срок от {min} до {max} месяцев")]
    OutOfRange {
        product: ProductType,
        min: u32,
        max: u32,
    },

    #[error("допустимые значения: {allowed}")]
    NotOffered { allowed: String },
}

/// 通知通道（SMS 閘道等）回報的錯誤
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("{0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InstallmentError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 給使用者的修正建議
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPrice => Some("Укажите положительную цену, например: -c 1500"),
            Self::InvalidPhoneNumber(_) => {
                Some("Укажите номер с кодом страны или 9 цифр местного номера")
            }
            Self::InvalidPeriod(_) => {
                Some("Срок выбирается из 3, 6, 9, 12, 18, 24 месяцев с учётом ограничения товара")
            }
            Self::NotificationSendFailed(_) => Some("Повторите попытку позже"),
            Self::MissingFlags { .. } => {
                Some("Запустите с -i для интерактивного ввода или с --help для справки")
            }
            Self::ConfigError { .. } => Some("Проверьте файл настроек TOML"),
            _ => None,
        }
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPrice
                | Self::InvalidPhoneNumber(_)
                | Self::InvalidProductType(_)
                | Self::InvalidPeriod(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, InstallmentError>;
