//! List indicators command.

use anyhow::Result;

pub fn run() -> Result<()> {
    println!("Available Indicators");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    let entries = [
        (
            "SMA",
            "Simple moving average of adjusted close (warm-up dates omitted)",
        ),
        (
            "EMA",
            "Exponential moving average, seeded with the first observation",
        ),
        (
            "RSI",
            "Relative strength index over a trailing window (default period 14)",
        ),
        (
            "MACD",
            "EMA(12) - EMA(26) with an EMA(9) signal line and bullish flag",
        ),
        (
            "Bollinger Bands",
            "Rolling mean ± 2 sample standard deviations over 20 days",
        ),
        (
            "Golden Cross",
            "Latest SMA(50) vs SMA(200): BUY above, SELL at or below",
        ),
        (
            "Percentage Change",
            "Daily, weekly (6 trading days) and month-end change metrics",
        ),
    ];

    for (name, description) in entries {
        println!("  {}", name);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", description);
        println!();
    }

    println!("Periods and thresholds are configurable; see config/default.toml.");

    Ok(())
}
