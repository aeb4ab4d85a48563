use clap::Args;

use super::calculate::{parse_format, resolve_rates};
use crate::calculator::{OutputFormat, ReportFormatter};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::rates::fallback;

#[derive(Args)]
#[command(author, version, about, long_about = None)]
pub struct RatesCommand {
    /// Skip the rate source and use static fallback rates
    #[arg(long)]
    offline: bool,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    format: String,
}

impl RatesCommand {
    pub async fn run(&self) -> AppResult<()> {
        let app_config = AppConfig::load()?;
        let rates = resolve_rates(&app_config.rates_api, self.offline).await?;
        let network = fallback::network_table();

        let parsed_format = parse_format(&self.format);
        let formatted_output = ReportFormatter::format_rates(&rates, &network, &parsed_format)?;

        if matches!(parsed_format, OutputFormat::Console) {
            println!("📊 Exchange Rates & Network Info");
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!();
        }
        print!("{}", formatted_output);
        Ok(())
    }
}
