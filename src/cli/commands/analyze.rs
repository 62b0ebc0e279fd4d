//! Analyze command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{info, warn};

use stockta_config::{load_config, AppConfig, IndicatorSettings};
use stockta_core::traits::PriceSource;
use stockta_core::types::PriceSeries;
use stockta_data::CsvPriceSource;
use stockta_indicators::{monthly_change, weekly_change, BollingerBands, GoldenCross, Macd};
use stockta_signals::{FeatureTable, SignalGenerator};

use crate::cli::AnalyzeArgs;

pub fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    let config = if config_path.exists() {
        load_config(config_path).context("Failed to load configuration")?
    } else {
        AppConfig::default()
    };

    let start = parse_date(&args.start).context("Invalid --start date")?;
    let end = parse_date(&args.end).context("Invalid --end date")?;

    let source = CsvPriceSource::new(&args.data)?;
    let generator =
        SignalGenerator::new(config.signals.clone()).context("Invalid signal configuration")?;

    let mut tables: Vec<FeatureTable> = Vec::new();

    for symbol in &args.symbols {
        let series = match source.history(symbol) {
            Ok(series) => series,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "skipping symbol");
                continue;
            }
        };

        info!(symbol = %symbol, days = series.len(), "generating signals");
        let table = generator.generate(&series, start, end)?;

        match args.output.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&table)?),
            _ => {
                println!("{}", symbol);
                print!("{}", table);
                print_snapshot(&config.indicators, &series);
                println!();
            }
        }

        tables.push(table);
    }

    if tables.is_empty() {
        anyhow::bail!("No data loaded for any requested symbol");
    }

    if let Some(save_path) = &args.save {
        let json = serde_json::to_string_pretty(&tables)?;
        std::fs::write(save_path, json)?;
        info!("Results saved to {:?}", save_path);
    }

    Ok(())
}

/// Print the latest state of the remaining indicators for a series.
fn print_snapshot(settings: &IndicatorSettings, series: &PriceSeries) {
    match weekly_change(series) {
        Ok(change) => println!("  weekly change:  {:+.1}%", change * 100.0),
        Err(e) => println!("  weekly change:  n/a ({})", e),
    }

    match monthly_change(series) {
        Ok(change) => println!("  monthly change: {:+.1}%", change * 100.0),
        Err(e) => println!("  monthly change: n/a ({})", e),
    }

    let cross = GoldenCross::with_windows(settings.cross_fast, settings.cross_slow);
    match cross.evaluate_series(series) {
        Ok(signal) => println!(
            "  golden cross:   {} (SMA {}/{})",
            signal, settings.cross_fast, settings.cross_slow
        ),
        Err(e) => println!("  golden cross:   n/a ({})", e),
    }

    let macd = Macd::with_periods(settings.macd_fast, settings.macd_slow, settings.macd_signal);
    let macd_series = macd.calculate_series(series);
    if let Some((date, out)) = macd_series.last() {
        let posture = if out.bullish { "bullish" } else { "bearish" };
        println!(
            "  MACD:           {} ({:.2} vs signal {:.2} on {})",
            posture, out.macd, out.signal, date
        );
    }

    let bands = BollingerBands::with_params(settings.bollinger_window, settings.bollinger_k);
    let band_series = bands.calculate_series(series);
    if let Some((date, out)) = band_series.last() {
        println!(
            "  bollinger:      [{:.2}, {:.2}] %B {:.2} on {}",
            out.lower, out.upper, out.percent_b, date
        );
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Could not parse date: {}", s))
}
