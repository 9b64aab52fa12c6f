use crate::app::input::FlagInput;
use crate::app::printer::ReportPrinter;
use crate::app::prompter::Prompter;
use crate::config::settings::Settings;
use crate::core::calculator::InstallmentCalculator;
use crate::domain::model::Quote;
use crate::domain::ports::NotificationSender;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub struct Handler<S: NotificationSender> {
    calculator: InstallmentCalculator<S>,
    settings: Settings,
    format: OutputFormat,
}

impl<S: NotificationSender> Handler<S> {
    pub fn new(sender: S, settings: Settings) -> Self {
        let calculator = InstallmentCalculator::new(sender)
            .with_tariff(settings.tariff.clone())
            .with_currency(settings.currency.clone());

        Self {
            calculator,
            settings,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn calculator(&self) -> &InstallmentCalculator<S> {
        &self.calculator
    }

    /// 收集輸入、計算、通知並輸出報表
    pub fn run<R: BufRead, W: Write>(
        &self,
        flags: &FlagInput,
        reader: R,
        writer: &mut W,
    ) -> Result<Quote> {
        let draft = flags.validate(&self.settings)?;

        let purchase = if flags.interactive {
            tracing::info!("🖊️ Interactive mode");
            let mut prompter = Prompter::new(reader, &mut *writer);
            prompter.collect(draft, &self.settings)?
        } else {
            draft.into_purchase()?
        };
        tracing::debug!("Purchase: {:?}", purchase);

        let quote = self.calculator.calculate(&purchase)?;

        match self.format {
            OutputFormat::Table => ReportPrinter::new(&self.settings.currency).print(writer, &quote)?,
            OutputFormat::Json => writeln!(writer, "{}", ReportPrinter::render_json(&quote)?)?,
        }

        Ok(quote)
    }
}
