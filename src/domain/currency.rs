use strum_macros::{AsRefStr, Display};

use crate::config::CURRENCY;

/// Currency a price is displayed in. Source amounts are always INR.
#[derive(Debug, Display, AsRefStr, Default, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
}

impl Currency {
    /// Interpret a currency `<select>` value. Anything but `USD` shows INR.
    pub fn from_selector_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("USD") {
            Currency::Usd
        } else {
            Currency::Inr
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
        }
    }
}

/// Read the INR amount stored on a price element. Missing or non-numeric
/// amounts yield `None` and the element is left untouched.
pub fn parse_inr(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Extra digits printed to tell an exact halfway value from a near one.
const TIE_CHECK_DIGITS: usize = 25;

/// Fixed-point text of `value`, rounding exact halfway values away from zero.
///
/// `{:.N}` alone breaks ties to even (`0.125` -> `0.12`); prices shown on the
/// page must read `0.13`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value:.decimals$}");
    }
    let expanded = format!("{:.*}", decimals + TIE_CHECK_DIGITS, value.abs());
    let tail = &expanded[expanded.len() - TIE_CHECK_DIGITS..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{value:.decimals$}");
    }
    // Any nudge below half a unit lands strictly past the tie
    let nudge = 0.25 * 10f64.powi(-(decimals as i32));
    format!("{:.decimals$}", value + value.signum() * nudge)
}

/// Selected display currency plus the INR -> USD multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyState {
    display: Currency,
    rate: f64,
}

impl Default for CurrencyState {
    fn default() -> Self {
        Self {
            display: Currency::Inr,
            rate: CURRENCY.fallback_inr_to_usd,
        }
    }
}

impl CurrencyState {
    pub fn display(&self) -> Currency {
        self.display
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns true when the displayed currency actually changed.
    pub fn set_display(&mut self, currency: Currency) -> bool {
        let changed = self.display != currency;
        self.display = currency;
        changed
    }

    /// Replace the rate. Non-finite or non-positive rates are rejected and the
    /// previous rate stays in effect.
    pub fn set_rate(&mut self, rate: f64) -> bool {
        if !rate.is_finite() || rate <= 0.0 {
            return false;
        }
        self.rate = rate;
        true
    }

    /// Text shown for a price whose source amount is `inr`.
    pub fn format_price(&self, inr: f64) -> String {
        match self.display {
            Currency::Usd => format!(
                "{} {}",
                Currency::Usd.symbol(),
                to_fixed(inr * self.rate, CURRENCY.usd_decimals)
            ),
            Currency::Inr => format!("{} {}", Currency::Inr.symbol(), inr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_conversion_rounds_to_cents() {
        let mut state = CurrencyState::default();
        assert!(state.set_rate(0.01164));
        state.set_display(Currency::Usd);
        assert_eq!(state.format_price(999.0), "$ 11.63");

        state.set_display(Currency::Inr);
        assert_eq!(state.format_price(999.0), "₹ 999");
    }

    #[test]
    fn usd_halfway_cents_round_up() {
        let mut state = CurrencyState::default();
        state.set_display(Currency::Usd);

        assert!(state.set_rate(0.0125));
        assert_eq!(state.format_price(250.0), "$ 3.13");
        assert!(state.set_rate(0.025));
        assert_eq!(state.format_price(5.0), "$ 0.13");
        assert!(state.set_rate(0.0625));
        assert_eq!(state.format_price(2.0), "$ 0.13");
    }

    #[test]
    fn to_fixed_only_moves_exact_ties() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        // 1.005 is stored just below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(11.62836, 2), "11.63");
        assert_eq!(to_fixed(7.0, 2), "7.00");
    }

    #[test]
    fn inr_keeps_the_source_amount_unrounded() {
        let state = CurrencyState::default();
        assert_eq!(state.format_price(1499.5), "₹ 1499.5");
    }

    #[test]
    fn invalid_rates_keep_the_previous_one() {
        let mut state = CurrencyState::default();
        let fallback = state.rate();
        assert!(!state.set_rate(0.0));
        assert!(!state.set_rate(-0.5));
        assert!(!state.set_rate(f64::NAN));
        assert!(!state.set_rate(f64::INFINITY));
        assert_eq!(state.rate(), fallback);
    }

    #[test]
    fn selector_values_map_to_currencies() {
        assert_eq!(Currency::from_selector_value("USD"), Currency::Usd);
        assert_eq!(Currency::from_selector_value(" usd "), Currency::Usd);
        assert_eq!(Currency::from_selector_value("INR"), Currency::Inr);
        assert_eq!(Currency::from_selector_value("EUR"), Currency::Inr);
        assert_eq!(Currency::Usd.to_string(), "USD");
    }

    #[test]
    fn price_attributes_are_parsed_leniently() {
        assert_eq!(parse_inr("999"), Some(999.0));
        assert_eq!(parse_inr(" 12.5 "), Some(12.5));
        assert_eq!(parse_inr(""), None);
        assert_eq!(parse_inr("n/a"), None);
        assert_eq!(parse_inr("inf"), None);
    }

    #[test]
    fn set_display_reports_changes() {
        let mut state = CurrencyState::default();
        assert!(!state.set_display(Currency::Inr));
        assert!(state.set_display(Currency::Usd));
        assert!(!state.set_display(Currency::Usd));
    }
}
