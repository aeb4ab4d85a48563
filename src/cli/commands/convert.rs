use clap::Args;

use super::calculate::resolve_rates;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::types::params::FiatCurrency;
use crate::utils::currency::{convert_cost_inputs, format_fiat, CostInputs};

#[derive(Args)]
#[command(author, version, about, long_about = None)]
pub struct ConvertCommand {
    /// Farm purchase cost in the source currency
    #[arg(long)]
    farm_cost: f64,

    /// Electricity tariff per kWh in the source currency
    #[arg(long)]
    electricity_rate: f64,

    /// Source currency: USD or RUB
    #[arg(long)]
    from: String,

    /// Target currency: USD or RUB
    #[arg(long)]
    to: String,

    /// Skip the rate source and use static fallback rates
    #[arg(long)]
    offline: bool,
}

impl ConvertCommand {
    pub async fn run(&self) -> AppResult<()> {
        let from: FiatCurrency = self.from.parse()?;
        let to: FiatCurrency = self.to.parse()?;

        let app_config = AppConfig::load()?;
        let rates = resolve_rates(&app_config.rates_api, self.offline).await?;

        let converted = convert_cost_inputs(
            CostInputs {
                farm_cost: self.farm_cost,
                electricity_rate: self.electricity_rate,
            },
            from,
            to,
            &rates,
        );

        println!("📊 Cost Input Conversion - {} to {}", from, to);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!();
        println!(
            "Farm cost:        {} = {}",
            format_fiat(self.farm_cost, from),
            format_fiat(converted.farm_cost, to)
        );
        println!(
            "Electricity rate: {} = {}",
            format_fiat(self.electricity_rate, from),
            format_fiat(converted.electricity_rate, to)
        );
        Ok(())
    }
}
