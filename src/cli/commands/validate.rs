//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use stockta_config::load_config;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("RSI period: {}", config.signals.rsi_period);
            println!("Overbought threshold: {}", config.signals.overbought);
            println!("Oversold threshold: {}", config.signals.oversold);
            println!(
                "MACD periods: {}/{}/{}",
                config.indicators.macd_fast,
                config.indicators.macd_slow,
                config.indicators.macd_signal
            );
            println!(
                "Golden cross windows: {}/{}",
                config.indicators.cross_fast, config.indicators.cross_slow
            );
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
