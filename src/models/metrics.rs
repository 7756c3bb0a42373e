use serde::{Deserialize, Serialize};

/// A price level at a fixed multiple of the stop-loss distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskTarget {
    /// Reward multiple (1 = a move equal to the stop distance)
    pub r: f64,
    /// Distance from entry, in percent
    pub percent: f64,
    pub price: f64,
    pub profit_usdt: f64,
    pub profit_inr: f64,
}

/// Worst-case loss for each fee pairing, in USDT.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LossEstimates {
    /// Stop-loss amount plus the headline round-trip fee
    pub sl_with_fees: f64,
    pub maker_maker: f64,
    pub taker_maker: f64,
    pub taker_taker: f64,
}

/// Everything derived from a valid TradeInput. Recomputed in full on
/// every call; nothing here is persisted or cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// Position size in base units
    pub quantity: f64,
    /// Total position value in USDT
    pub notional: f64,
    /// Capital required to open the position, in USDT
    pub margin: f64,
    /// Round-trip taker fee, in USDT
    pub fee: f64,
    /// Minimum favorable move needed to cover fees, in percent
    pub break_even_percent: f64,
    pub stop_loss_price: f64,
    /// Adverse move that triggers liquidation, in percent
    pub liquidation_drop_percent: f64,
    pub liquidation_price: f64,
    /// Whether the stop sits on the survivable side of liquidation
    pub stop_loss_safe: bool,
    pub targets: Vec<RiskTarget>,
    pub loss_estimates: LossEstimates,
}
