use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed INR per USDT rate applied across the calculator.
pub const USDT_INR_RATE: f64 = 85.0;

fn default_conversion_rate() -> f64 {
    USDT_INR_RATE
}

/// Trade direction. Serialized lowercase to match the form's select values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Long,
    Short,
}

impl Direction {
    /// +1.0 for long, -1.0 for short. Every percent-to-price and profit
    /// conversion goes through this sign.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }
}

/// Validated numeric trade parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeInput {
    pub direction: Direction,
    /// Entry price in USDT per unit
    pub entry_price: f64,
    /// Stop-loss distance from entry, in percent
    pub stop_loss_percent: f64,
    /// Maximum acceptable loss in INR if the stop hits
    pub stop_loss_amount: f64,
    /// The form widget offers 50x steps up to 1000x; the calculator
    /// itself only requires a positive value
    pub leverage: u32,
    /// INR per USDT; fixed, not collected from the form
    #[serde(default = "default_conversion_rate")]
    pub conversion_rate: f64,
}

impl TradeInput {
    /// All user-supplied numerics must be strictly positive before any
    /// formula is evaluated against them.
    pub fn is_valid(&self) -> bool {
        self.entry_price > 0.0
            && self.stop_loss_percent > 0.0
            && self.stop_loss_amount > 0.0
            && self.leverage > 0
            && self.conversion_rate > 0.0
    }
}

/// Raw form values as collected by the UI. Numeric fields arrive as
/// text; the amount field may carry digit-grouping commas ("1,00,000").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeForm {
    pub direction: Direction,
    pub entry_price: String,
    pub stop_loss_percent: String,
    pub stop_loss_amount: String,
    pub leverage: String,
}

impl TradeForm {
    /// Coerce the form text into a validated TradeInput. Returns None
    /// when any field is missing, non-numeric, or not strictly positive.
    pub fn parse(&self) -> Option<TradeInput> {
        let entry_price = coerce_numeric(&self.entry_price)?;
        let stop_loss_percent = coerce_numeric(&self.stop_loss_percent)?;
        let stop_loss_amount = coerce_numeric(&self.stop_loss_amount)?;
        let leverage = self.leverage.trim().replace(',', "").parse::<u32>().ok()?;

        let input = TradeInput {
            direction: self.direction,
            entry_price,
            stop_loss_percent,
            stop_loss_amount,
            leverage,
            conversion_rate: USDT_INR_RATE,
        };

        input.is_valid().then_some(input)
    }
}

/// Extract a numeric value from form text after stripping grouping commas.
fn coerce_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    let re = Regex::new(r"^-?\d+\.?\d*$").ok()?;
    if !re.is_match(&cleaned) {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Leverage choices offered by the form widget: 50x steps up to 1000x.
pub fn leverage_options() -> Vec<u32> {
    (1..=20).map(|i| i * 50).collect()
}
