use crate::app::input::{normalize_phone_number, parse_months, parse_price, PurchaseDraft};
use crate::config::settings::Settings;
use crate::domain::model::{format_periods, ProductType, Purchase, Tariff};
use crate::utils::error::{InstallmentError, Result};
use std::io::{BufRead, Write};

/// 逐欄詢問購買資料；輸入錯誤時顯示訊息並重新詢問
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    pub fn collect(&mut self, draft: PurchaseDraft, settings: &Settings) -> Result<Purchase> {
        let product = self.prompt_product(draft.product)?;
        let price = self.prompt_price(draft.price, &settings.currency)?;
        let phone_number =
            self.prompt_phone_number(draft.phone_number.as_deref(), &settings.country_code)?;
        let period_months = self.prompt_period(draft.period_months, product, &settings.tariff)?;
        writeln!(self.writer)?;

        Ok(Purchase::new(product, price, phone_number, period_months))
    }

    pub fn prompt_product(&mut self, default: Option<ProductType>) -> Result<ProductType> {
        let menu = ProductType::ALL
            .iter()
            .map(|product| format!("{}-{}", product.menu_key(), product.label()))
            .collect::<Vec<_>>()
            .join(", ");
        let label = format!("Выберите тип товара ({menu})");
        let default = default.map(|product| product.menu_key().to_string());

        self.ask(&label, default, |input| input.parse::<ProductType>())
    }

    pub fn prompt_price(&mut self, default: Option<f64>, currency: &str) -> Result<f64> {
        let label = format!("Введите цену товара ({currency})");
        let default = default.map(|price| format!("{price:.2}"));

        self.ask(&label, default, parse_price)
    }

    pub fn prompt_phone_number(
        &mut self,
        default: Option<&str>,
        country_code: &str,
    ) -> Result<String> {
        let label = format!("Введите номер телефона (в формате {country_code}XXXXXXXXX)");
        let default = default.map(str::to_string);

        self.ask(&label, default, |input| {
            normalize_phone_number(input, country_code)
        })
    }

    /// 只列出該商品可選的期數；預設值不適用於該商品時不顯示
    pub fn prompt_period(
        &mut self,
        default: Option<u32>,
        product: ProductType,
        tariff: &Tariff,
    ) -> Result<u32> {
        let available = tariff.available_periods(product);
        let label = format!(
            "Выберите срок рассрочки (доступно: {})",
            format_periods(&available)
        );
        let default = default
            .filter(|months| tariff.check_period(product, *months).is_ok())
            .map(|months| months.to_string());

        self.ask(&label, default, |input| {
            let months = parse_months(input)?;
            tariff.check_period(product, months)?;
            Ok(months)
        })
    }

    fn ask<T>(
        &mut self,
        label: &str,
        default: Option<String>,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        let prompt = match &default {
            Some(value) => format!("{label} [{value}]: "),
            None => format!("{label}: "),
        };

        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            let line = self.read_line()?.ok_or(InstallmentError::InputClosed)?;
            let input = match (line.is_empty(), default.as_deref()) {
                (true, Some(value)) => value,
                (true, None) => {
                    writeln!(self.writer, "Ошибка: поле не может быть пустым")?;
                    continue;
                }
                (false, _) => line.as_str(),
            };

            match parse(input) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("Rejected input {:?}: {}", input, e);
                    writeln!(self.writer, "Ошибка: {e}")?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    #[test]
    fn test_product_by_number_or_name() {
        let mut p = prompter("2\nтелевизор\n");
        assert_eq!(p.prompt_product(None).unwrap(), ProductType::Computer);
        assert_eq!(p.prompt_product(None).unwrap(), ProductType::Tv);
        assert!(output(p).starts_with(
            "Выберите тип товара (1-Смартфон, 2-Компьютер, 3-Телевизор): "
        ));
    }

    #[test]
    fn test_empty_line_accepts_default() {
        let mut p = prompter("\n\n");
        assert_eq!(
            p.prompt_product(Some(ProductType::Tv)).unwrap(),
            ProductType::Tv
        );
        assert_eq!(p.prompt_price(Some(1500.0), "сомони").unwrap(), 1500.0);

        let out = output(p);
        assert!(out.contains("3-Телевизор) [3]: "));
        assert!(out.contains("Введите цену товара (сомони) [1500.00]: "));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut p = prompter("\nабв\n-3\n2500\n");
        assert_eq!(p.prompt_price(None, "сомони").unwrap(), 2500.0);

        let out = output(p);
        assert!(out.contains("Ошибка: поле не может быть пустым"));
        assert!(out.contains("Ошибка: введите корректное число"));
        assert!(out.contains("Ошибка: цена должна быть больше 0"));
        assert_eq!(out.matches("Введите цену товара").count(), 4);
    }

    #[test]
    fn test_phone_number_is_normalized() {
        let mut p = prompter("12\n001002005\n");
        assert_eq!(
            p.prompt_phone_number(None, "992").unwrap(),
            "992001002005"
        );
        assert!(output(p).contains("Ошибка: неверный формат номера телефона"));
    }

    #[test]
    fn test_period_lists_available_values() {
        let tariff = Tariff::default();
        let mut p = prompter("12\n9\n");
        assert_eq!(
            p.prompt_period(None, ProductType::Smartphone, &tariff)
                .unwrap(),
            9
        );

        let out = output(p);
        assert!(out.starts_with("Выберите срок рассрочки (доступно: 3, 6, 9): "));
        assert!(out.contains("для Смартфон допустимый срок от 3 до 9 месяцев"));
    }

    #[test]
    fn test_period_default_dropped_when_not_allowed() {
        let tariff = Tariff::default();
        let mut p = prompter("6\n");
        assert_eq!(
            p.prompt_period(Some(18), ProductType::Computer, &tariff)
                .unwrap(),
            6
        );
        assert!(!output(p).contains("[18]"));
    }

    #[test]
    fn test_end_of_input_aborts() {
        let mut p = prompter("");
        assert!(matches!(
            p.prompt_product(None),
            Err(InstallmentError::InputClosed)
        ));
    }

    #[test]
    fn test_collect_full_purchase() {
        let draft = PurchaseDraft {
            product: Some(ProductType::Smartphone),
            ..PurchaseDraft::default()
        };
        let mut p = prompter("\n1000\n+992001002005\n6\n");
        let purchase = p.collect(draft, &Settings::default()).unwrap();

        assert_eq!(
            purchase,
            Purchase::new(ProductType::Smartphone, 1000.0, "992001002005", 6)
        );
    }
}
