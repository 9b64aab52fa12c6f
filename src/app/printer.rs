use crate::domain::model::Quote;
use crate::utils::error::Result;
use std::io::Write;

/// 框線內的最小寬度（字元），數值過長時整個框一起加寬
const INNER_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 16;
const VALUE_WIDTH: usize = INNER_WIDTH - LABEL_WIDTH - 2;

pub struct ReportPrinter {
    currency: String,
}

impl ReportPrinter {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn render(&self, quote: &Quote) -> String {
        let price = self.amount(quote.price);
        let period = format!("{} мес.", quote.period_months);
        let total = self.amount(quote.total);
        let overpayment = self.amount(quote.overpayment);

        let value_width = [&price, &period, &total, &overpayment]
            .iter()
            .map(|value| value.chars().count())
            .fold(VALUE_WIDTH, usize::max);
        let inner = LABEL_WIDTH + value_width + 2;
        let rule = "═".repeat(inner);

        let lines = [
            String::new(),
            format!("╔{rule}╗"),
            format!("║{:^inner$}║", "РАССРОЧКА"),
            format!("╠{rule}╣"),
            row("Цена товара:", &price, value_width),
            row("Срок:", &period, value_width),
            format!("╠{rule}╣"),
            row("Итоговая сумма:", &total, value_width),
            row("Переплата:", &overpayment, value_width),
            format!("╚{rule}╝"),
        ];
        lines.join("\n")
    }

    pub fn print<W: Write>(&self, writer: &mut W, quote: &Quote) -> Result<()> {
        writeln!(writer, "{}", self.render(quote))?;
        Ok(())
    }

    pub fn render_json(quote: &Quote) -> Result<String> {
        Ok(serde_json::to_string_pretty(quote)?)
    }

    fn amount(&self, value: f64) -> String {
        format!("{:.2} {}", value, self.currency)
    }
}

fn row(label: &str, value: &str, value_width: usize) -> String {
    format!("║ {label:<LABEL_WIDTH$}{value:>value_width$} ║")
}
