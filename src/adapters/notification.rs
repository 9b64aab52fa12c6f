use crate::app::handler::OutputFormat;
use crate::domain::ports::NotificationSender;
use crate::utils::error::NotificationError;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// 以印出到終端機代替真正的 SMS 閘道
pub struct ConsoleSender<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl ConsoleSender<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleSender<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSender<Box<dyn Write + Send>> {
    /// JSON 輸出時通知改寫到 stderr，stdout 只留給 JSON 文件
    pub fn for_format(format: OutputFormat) -> Self {
        let out: Box<dyn Write + Send> = match format {
            OutputFormat::Table => Box::new(io::stdout()),
            OutputFormat::Json => Box::new(io::stderr()),
        };
        Self::with_writer(out)
    }
}

impl<W: Write + Send> ConsoleSender<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> NotificationSender for ConsoleSender<W> {
    fn send_notification(&self, phone_number: &str, message: &str) -> Result<(), NotificationError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| NotificationError::Unavailable("console output is poisoned".to_string()))?;

        writeln!(out, "Уведомление отправлено на номер {phone_number}:")?;
        writeln!(out, "{message}")?;
        out.flush()?;

        tracing::debug!("Console notification written for {}", phone_number);
        Ok(())
    }
}
