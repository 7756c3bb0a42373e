use serde::{Deserialize, Serialize};

use crate::models::{DerivedMetrics, RiskTarget, TradeInput};

/// One labelled line of the results panel, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRow {
    pub label: String,
    pub value: String,
}

/// Currency values render to 2 decimal places.
pub fn format_usdt(value: f64) -> String {
    format!("{:.2}", value)
}

/// Quantities render to 4 decimal places.
pub fn format_quantity(value: f64) -> String {
    format!("{:.4}", value)
}

/// Percentages render to 2 decimal places.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}

/// INR amounts render with thousands grouping and 2 decimal places.
pub fn format_inr(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Whole-number rates print without a decimal tail ("₹85 per USDT").
fn format_rate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn format_multiple(r: f64) -> String {
    if r.fract() == 0.0 {
        format!("{}", r as i64)
    } else {
        format!("{}", r)
    }
}

fn usdt_inr_pair(usdt: f64, conversion_rate: f64) -> String {
    format!(
        "${} USDT / ₹{} INR",
        format_usdt(usdt),
        format_inr(usdt * conversion_rate)
    )
}

/// Assemble the labelled result rows the UI renders, in display order.
pub fn build_result_rows(input: &TradeInput, metrics: &DerivedMetrics) -> Vec<ResultRow> {
    let rate = input.conversion_rate;
    let losses = &metrics.loss_estimates;

    let safety_note = if metrics.stop_loss_safe {
        "SL is Safe ✅"
    } else {
        "❌ SL below liquidation"
    };

    vec![
        ResultRow {
            label: "Margin Required".to_string(),
            value: usdt_inr_pair(metrics.margin, rate),
        },
        ResultRow {
            label: "💱 Using INR/USDT Rate".to_string(),
            value: format!("₹{} per USDT", format_rate(rate)),
        },
        ResultRow {
            label: "Potential Loss (SL + Fees)".to_string(),
            value: format!(
                "${} USDT / ₹{} INR",
                format_usdt(losses.sl_with_fees),
                format_inr(metrics.fee * rate + input.stop_loss_amount)
            ),
        },
        ResultRow {
            label: "Potential Loss (Maker+Maker)".to_string(),
            value: usdt_inr_pair(losses.maker_maker, rate),
        },
        ResultRow {
            label: "Potential Loss (Taker+Maker)".to_string(),
            value: usdt_inr_pair(losses.taker_maker, rate),
        },
        ResultRow {
            label: "Potential Loss (Taker+Taker)".to_string(),
            value: usdt_inr_pair(losses.taker_taker, rate),
        },
        ResultRow {
            label: "Quantity".to_string(),
            value: format!("{} BTC", format_quantity(metrics.quantity)),
        },
        ResultRow {
            label: "Notional".to_string(),
            value: format!("${} USDT", format_usdt(metrics.notional)),
        },
        ResultRow {
            label: "SL Price".to_string(),
            value: format!("{} USDT", format_usdt(metrics.stop_loss_price)),
        },
        ResultRow {
            label: "Liquidation Price".to_string(),
            value: format!(
                "{} USDT — {}",
                format_usdt(metrics.liquidation_price),
                safety_note
            ),
        },
        ResultRow {
            label: "Break-even Move".to_string(),
            value: format!("{}%", format_percent(metrics.break_even_percent)),
        },
    ]
}

/// One display line per reward target.
pub fn target_lines(targets: &[RiskTarget]) -> Vec<String> {
    targets
        .iter()
        .map(|t| {
            format!(
                "{}:1 → {} USDT ({}%) — Profit: ${} / ₹{}",
                format_multiple(t.r),
                format_usdt(t.price),
                format_percent(t.percent),
                format_usdt(t.profit_usdt),
                format_inr(t.profit_inr)
            )
        })
        .collect()
}

/// Flatten the rows into the text block handed to the clipboard.
pub fn copy_all(rows: &[ResultRow]) -> String {
    rows.iter()
        .map(|r| format!("{}: {}", r.label, r.value))
        .collect::<Vec<_>>()
        .join("\n")
}
