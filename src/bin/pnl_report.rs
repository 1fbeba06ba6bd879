use anyhow::Context;
use clap::Parser;
use pnlscope::config::{AppConfig, ConfigManager};
use pnlscope::report::{format_percentage, format_pnl, format_profit_factor, share_of, BarChart};
use pnlscope::{AnalysisEngine, AnalysisReport, TradeLoader};
use std::path::PathBuf;

/// Print the trade-log analysis as text
#[derive(Parser, Debug)]
#[command(name = "pnl_report", version)]
struct Args {
    /// Trade log (.csv or .xlsx)
    file: PathBuf,

    /// Year for the monthly breakdown (default: earliest year in the log)
    #[arg(long)]
    year: Option<i32>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config: AppConfig = ConfigManager::layered(args.config.as_deref())?.get().clone();

    let df = TradeLoader::new(config.loader.clone())
        .load(&args.file)
        .with_context(|| format!("while loading {}", args.file.display()))?;
    let report = AnalysisEngine::new().run(&df, args.year)?;
    let charts = report.charts(&config.display)?;

    print_statistics(&report);
    for chart in &charts {
        print_chart(chart);
    }
    Ok(())
}

fn print_statistics(report: &AnalysisReport) {
    let summary = &report.summary;
    let stats = &report.win_loss;

    println!("General statistics");
    println!("  {:<24} {:>12}", "Total PnL", format_pnl(summary.total_pnl));
    println!("  {:<24} {:>12}", "Number of trades", summary.trade_count);
    println!("  {:<24} {:>12}", "Average PnL per trade", format_pnl(summary.mean_pnl));
    println!();

    println!("Wins / Losses");
    println!("  {:<24} {:>12}", "Win rate", format_percentage(stats.win_rate));
    println!("  {:<24} {:>12}", "Profit factor", format_profit_factor(stats.profit_factor));
    println!(
        "  {:<24} {:>12} ({})",
        "Winning trades",
        stats.winning_trades,
        format_percentage(share_of(stats.winning_trades, stats.total_trades))
    );
    println!(
        "  {:<24} {:>12} ({})",
        "Losing trades",
        stats.losing_trades,
        format_percentage(share_of(stats.losing_trades, stats.total_trades))
    );
    println!("  {:<24} {:>12}", "Break-even trades", stats.neutral_trades);
    println!("  {:<24} {:>12}", "Average win", format_pnl(stats.avg_win));
    println!("  {:<24} {:>12}", "Average loss", format_pnl(stats.avg_loss));
    println!("  {:<24} {:>12}", "Largest win", format_pnl(stats.max_win));
    println!("  {:<24} {:>12}", "Largest loss", format_pnl(stats.max_loss));
}

fn print_chart(chart: &BarChart) {
    println!();
    println!("{}", chart.title);
    println!("  {:<24} {:>12}", chart.x_label, chart.y_label);
    println!("  {:─<24} {:─>12}", "", "");
    for bar in &chart.bars {
        println!("  {:<24} {:>12}", bar.category, bar.text);
    }
}
