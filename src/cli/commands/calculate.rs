use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::calculator::{CalculatorEngine, OutputFormat, ReportFormatter};
use crate::config::{AppConfig, RatesApiConfig};
use crate::errors::AppResult;
use crate::rates::{fallback, RatesCache, RatesClient};
use crate::types::market::CryptoRates;
use crate::types::params::ParameterForm;

// ===== Helper Functions =====

/// Parse output format string to OutputFormat enum
pub(super) fn parse_format(format_str: &str) -> OutputFormat {
    match format_str.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Console,
    }
}

/// Write output to file with safe directory creation
pub(super) fn write_output_to_file(
    path: &PathBuf,
    content: &str,
    description: &str,
) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("{} written to: {}", description, path.display());
    Ok(())
}

/// Resolve exchange rates through the cache, or from the static table
/// when running offline
pub(super) async fn resolve_rates(
    rates_api: &RatesApiConfig,
    offline: bool,
) -> AppResult<CryptoRates> {
    if offline {
        info!("Offline mode, using static fallback rates");
        return Ok(fallback::crypto_rates());
    }

    let client = RatesClient::new(rates_api.base_url.clone(), rates_api.timeout())?;
    let cache = RatesCache::new(client, rates_api.cache_ttl());
    Ok(cache.get().await)
}

// ===== Command Definition =====

#[derive(Args)]
#[command(author, version, about, long_about = None)]
pub struct CalculateCommand {
    /// Crypto asset to mine: BTC or DOGE (overrides config.toml)
    #[arg(long)]
    asset: Option<String>,

    /// Fiat currency for costs and profit: USD or RUB (overrides config.toml)
    #[arg(long)]
    fiat: Option<String>,

    /// Farm hash rate in TH/s (overrides config.toml)
    #[arg(long)]
    hash_rate: Option<f64>,

    /// Pool fee in percent (overrides config.toml)
    #[arg(long)]
    pool_fee: Option<f64>,

    /// Block reward in asset units (defaults to current network value)
    #[arg(long)]
    block_reward: Option<f64>,

    /// Network difficulty (defaults to current network value)
    #[arg(long)]
    difficulty: Option<f64>,

    /// Farm purchase cost in the selected fiat currency (overrides config.toml)
    #[arg(long)]
    farm_cost: Option<f64>,

    /// Farm power consumption in watts (overrides config.toml)
    #[arg(long)]
    power: Option<f64>,

    /// Electricity tariff per kWh in the selected fiat currency (overrides config.toml)
    #[arg(long)]
    electricity_rate: Option<f64>,

    /// Forecast horizon in months, 1 to 60 (overrides config.toml)
    #[arg(long)]
    period: Option<u32>,

    /// First forecast month as YYYY-MM (defaults to the current month)
    #[arg(long)]
    start_month: Option<String>,

    /// Expected difficulty change per month in percent (overrides config.toml)
    #[arg(long)]
    difficulty_drift: Option<f64>,

    /// Expected price change per month in percent (overrides config.toml)
    #[arg(long)]
    price_drift: Option<f64>,

    /// JSON file with a partial parameter set (flags override its values)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Skip the rate source and use static fallback rates
    #[arg(long)]
    offline: bool,

    /// Output format (console, json, or csv)
    #[arg(long, default_value = "console")]
    format: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

impl CalculateCommand {
    pub async fn run(&self) -> AppResult<()> {
        let app_config = AppConfig::load()?;

        // Config defaults, then the parameter file, then flags
        let mut form = app_config.defaults.parameter_form()?;
        if let Some(path) = &self.params {
            let contents = std::fs::read_to_string(path)?;
            let file_form: ParameterForm = serde_json::from_str(&contents)?;
            form = form.merge(file_form);
        }
        form = form.merge(self.flag_form()?);

        let rates = resolve_rates(&app_config.rates_api, self.offline).await?;
        let engine = CalculatorEngine::new(fallback::network_table());

        let Some(report) = engine.calculate(&form, &rates)? else {
            warn!("Parameter set has no asset or fiat selector, nothing to calculate");
            return Ok(());
        };

        let parsed_format = parse_format(&self.format);
        let formatted_output = ReportFormatter::format_calculation(&report, &parsed_format)?;

        if let Some(path) = &self.output {
            write_output_to_file(path, &formatted_output, "Profitability report")?;
        } else if matches!(parsed_format, OutputFormat::Console) {
            println!(
                "📊 Mining Profitability Report - {} / {}",
                report.parameters.asset, report.parameters.fiat_currency
            );
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!();
            print!("{}", formatted_output);
        } else {
            print!("{}", formatted_output);
        }
        Ok(())
    }

    /// Parameter form carrying only the values given on the command line
    fn flag_form(&self) -> AppResult<ParameterForm> {
        Ok(ParameterForm {
            asset: self.asset.as_deref().map(str::parse).transpose()?,
            fiat_currency: self.fiat.as_deref().map(str::parse).transpose()?,
            hash_rate_ths: self.hash_rate,
            pool_fee_percent: self.pool_fee,
            block_reward: self.block_reward,
            difficulty: self.difficulty,
            farm_cost: self.farm_cost,
            power_consumption_watts: self.power,
            electricity_rate: self.electricity_rate,
            mining_period_months: self.period,
            start_month: self.start_month.clone(),
            difficulty_drift_percent: self.difficulty_drift,
            price_drift_percent: self.price_drift,
        })
    }
}
