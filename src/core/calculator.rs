use crate::core::{NotificationSender, Purchase, Quote, Result, Tariff};
use crate::utils::error::InstallmentError;
use chrono::Utc;

pub const DEFAULT_CURRENCY: &str = "сомони";

pub struct InstallmentCalculator<S: NotificationSender> {
    sender: S,
    tariff: Tariff,
    currency: String,
}

impl<S: NotificationSender> InstallmentCalculator<S> {
    pub fn new(sender: S) -> Self {
        Self {
            sender,
            tariff: Tariff::default(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_tariff(mut self, tariff: Tariff) -> Self {
        self.tariff = tariff;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// 驗證、計算並通知客戶；通知失敗時不回傳結果
    pub fn calculate(&self, purchase: &Purchase) -> Result<Quote> {
        purchase.validate(&self.tariff)?;

        let total = purchase.total_payment(&self.tariff);
        let overpayment = total - purchase.price;
        tracing::debug!(
            "Calculated {} for {:.2} over {} months: total {:.2}, overpayment {:.2}",
            purchase.product.config_key(),
            purchase.price,
            purchase.period_months,
            total,
            overpayment
        );

        let message = self.render_message(purchase, total, overpayment);
        self.sender
            .send_notification(&purchase.phone_number, &message)
            .map_err(|e| {
                tracing::warn!("📵 Notification to {} failed: {}", purchase.phone_number, e);
                InstallmentError::NotificationSendFailed(e)
            })?;
        tracing::info!("📨 Notification sent to {}", purchase.phone_number);

        Ok(Quote {
            product: purchase.product,
            price: purchase.price,
            period_months: purchase.period_months,
            total,
            overpayment,
            calculated_at: Utc::now(),
        })
    }

    fn render_message(&self, purchase: &Purchase, total: f64, overpayment: f64) -> String {
        let currency = &self.currency;
        format!(
            "Уважаемый клиент!\n\
             Детали вашей покупки:\n\
             Товар: {}\n\
             Сумма: {:.2} {currency}\n\
             Срок рассрочки: {} мес.\n\
             Переплата: {:.2} {currency}\n\
             Итого к оплате: {:.2} {currency}",
            purchase.product, purchase.price, purchase.period_months, overpayment, total,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProductType;
    use crate::utils::error::NotificationError;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingSender {
        sent: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl NotificationSender for RecordingSender {
        fn send_notification(
            &self,
            phone_number: &str,
            message: &str,
        ) -> std::result::Result<(), NotificationError> {
            self.sent
                .lock()
                .unwrap()
                .push((phone_number.to_string(), message.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_message_template() {
        let sender = RecordingSender::default();
        let calculator = InstallmentCalculator::new(sender.clone());
        let purchase = Purchase::new(ProductType::Computer, 3000.0, "992001002005", 6);

        calculator.calculate(&purchase).unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "992001002005");
        assert_eq!(
            sent[0].1,
            "Уважаемый клиент!\n\
             Детали вашей покупки:\n\
             Товар: Компьютер\n\
             Сумма: 3000.00 сомони\n\
             Срок рассрочки: 6 мес.\n\
             Переплата: 120.00 сомони\n\
             Итого к оплате: 3120.00 сомони"
        );
    }

    #[test]
    fn test_invalid_purchase_sends_nothing() {
        let sender = RecordingSender::default();
        let calculator = InstallmentCalculator::new(sender.clone());
        let purchase = Purchase::new(ProductType::Smartphone, 1000.0, "992001002005", 2);

        assert!(calculator.calculate(&purchase).is_err());
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_custom_currency() {
        let sender = RecordingSender::default();
        let calculator = InstallmentCalculator::new(sender.clone()).with_currency("TJS");
        let purchase = Purchase::new(ProductType::Tv, 2000.0, "992001002005", 3);

        let quote = calculator.calculate(&purchase).unwrap();
        assert_eq!(quote.total, 2000.0);
        assert!(sender.sent.lock().unwrap()[0].1.ends_with("2000.00 TJS"));
    }
}
