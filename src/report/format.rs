//! Text rendering of amounts and ratios.
//!
//! Non-finite inputs keep Rust's float spelling: `NaN`, `inf`, `-inf`
//! (positive infinity gets the usual `+` prefix from [`format_pnl`]).

/// Two decimals, `+` prefix for strictly positive amounts. Zero renders as `0.00`.
pub fn format_pnl(value: f64) -> String {
    // -0.0 would otherwise print as "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    if value > 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// One decimal with a trailing `%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Two decimals; a profit factor with no losing sum renders as `inf`
pub fn format_profit_factor(value: f64) -> String {
    format!("{:.2}", value)
}

/// Share of `part` in `total` as a percentage, 0 when `total` is 0
pub fn share_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pnl_signs() {
        assert_eq!(format_pnl(5.0), "+5.00");
        assert_eq!(format_pnl(-5.0), "-5.00");
        assert_eq!(format_pnl(0.0), "0.00");
        assert_eq!(format_pnl(-0.0), "0.00");
        assert_eq!(format_pnl(1234.567), "+1234.57");
    }

    #[test]
    fn test_format_pnl_non_finite() {
        assert_eq!(format_pnl(f64::NAN), "NaN");
        assert_eq!(format_pnl(f64::INFINITY), "+inf");
        assert_eq!(format_pnl(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(33.333), "33.3%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(100.0), "100.0%");
        assert_eq!(format_percentage(200.0 / 3.0), "66.7%");
    }

    #[test]
    fn test_profit_factor_sentinel() {
        assert_eq!(format_profit_factor(f64::INFINITY), "inf");
        assert_eq!(format_profit_factor(3.75), "3.75");
    }

    #[test]
    fn test_share_of() {
        assert_eq!(share_of(1, 4), 25.0);
        assert_eq!(share_of(0, 0), 0.0);
    }
}
