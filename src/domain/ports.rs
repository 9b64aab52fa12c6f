use crate::utils::error::NotificationError;

/// 將訊息送到客戶手機的通道
pub trait NotificationSender: Send + Sync {
    fn send_notification(
        &self,
        phone_number: &str,
        message: &str,
    ) -> Result<(), NotificationError>;
}
