pub mod settings;

#[cfg(feature = "cli")]
use crate::app::input::FlagInput;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
const USAGE_EXAMPLES: &str = "\
Примеры:
  installment-cli -p Смартфон -c 1000 -n +992001234567 -m 6
  installment-cli --product=Компьютер --cost=2000 --number=+992001234567 --months=12
  installment-cli -i
  installment-cli -p Телевизор -i

Для интерактивного режима можно указать часть параметров,
а остальные ввести в диалоговом режиме.";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "installment-cli", version)]
#[command(about = "Калькулятор рассрочки: итоговая сумма и уведомление клиента")]
#[command(after_help = USAGE_EXAMPLES)]
pub struct CliConfig {
    #[arg(short, long, help = "Включить интерактивный режим")]
    pub interactive: bool,

    #[arg(
        short,
        long,
        value_name = "ТОВАР",
        help = "Тип товара (Смартфон, Компьютер, Телевизор или 1, 2, 3)"
    )]
    pub product: Option<String>,

    #[arg(
        short = 'c',
        long = "cost",
        value_name = "ЦЕНА",
        allow_negative_numbers = true,
        help = "Цена товара в сомони"
    )]
    pub cost: Option<f64>,

    #[arg(short = 'n', long = "number", value_name = "НОМЕР", help = "Номер телефона клиента")]
    pub number: Option<String>,

    #[arg(short, long, value_name = "МЕСЯЦЫ", help = "Срок рассрочки в месяцах")]
    pub months: Option<u32>,

    #[arg(long, value_name = "ПУТЬ", help = "Файл настроек TOML (тарифы, код страны, валюта)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Вывести результат в формате JSON")]
    pub json: bool,

    #[arg(short, long, help = "Подробный журнал в stderr")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn flag_input(&self) -> FlagInput {
        FlagInput {
            interactive: self.interactive,
            product: self.product.clone(),
            cost: self.cost,
            number: self.number.clone(),
            months: self.months,
        }
    }
}
