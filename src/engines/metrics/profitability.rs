// src/engines/metrics/profitability.rs
use crate::types::{SummaryStats, WinLossStats};

pub struct ProfitabilityMetrics;

impl ProfitabilityMetrics {
    pub fn summary(pnl: &[f64]) -> SummaryStats {
        let total_pnl: f64 = pnl.iter().sum();
        let mean_pnl = if pnl.is_empty() {
            0.0
        } else {
            total_pnl / pnl.len() as f64
        };

        SummaryStats {
            total_pnl,
            mean_pnl,
            trade_count: pnl.len(),
        }
    }

    pub fn win_loss(pnl: &[f64]) -> WinLossStats {
        let winning: Vec<f64> = pnl.iter().copied().filter(|p| *p > 0.0).collect();
        let losing: Vec<f64> = pnl.iter().copied().filter(|p| *p < 0.0).collect();
        let neutral_trades = pnl.iter().filter(|p| **p == 0.0).count();

        let total_trades = pnl.len();

        // Win rate
        let win_rate = if total_trades > 0 {
            winning.len() as f64 / total_trades as f64 * 100.0
        } else {
            0.0
        };

        // Average win/loss
        let avg_win = mean(&winning);
        let avg_loss = mean(&losing);

        // Largest win, deepest loss
        let max_win = winning.iter().copied().fold(None, |acc: Option<f64>, p| {
            Some(acc.map_or(p, |a| a.max(p)))
        });
        let max_loss = losing.iter().copied().fold(None, |acc: Option<f64>, p| {
            Some(acc.map_or(p, |a| a.min(p)))
        });

        // Profit factor
        let gross_profit: f64 = winning.iter().sum();
        let gross_loss: f64 = losing.iter().sum::<f64>().abs();
        let profit_factor = if gross_loss != 0.0 {
            gross_profit / gross_loss
        } else {
            f64::INFINITY
        };

        WinLossStats {
            total_trades,
            winning_trades: winning.len(),
            losing_trades: losing.len(),
            neutral_trades,
            win_rate,
            avg_win,
            avg_loss,
            max_win: max_win.unwrap_or(0.0),
            max_loss: max_loss.unwrap_or(0.0),
            profit_factor,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
