use crate::models::{DerivedMetrics, Direction, LossEstimates, RiskTarget, TradeInput};

/// Per-side taker rate behind the headline round-trip fee figure.
pub const TAKER_FEE_RATE: f64 = 0.0008;

/// Per-side rates for the loss-estimate table. The estimate rows quote
/// the exchange's maker/taker schedule, which differs from the headline
/// rate above.
pub const ESTIMATE_MAKER_RATE: f64 = 0.0002;
pub const ESTIMATE_TAKER_RATE: f64 = 0.0004;

/// Adverse move that exhausts margin: 50 / leverage percent.
const LIQUIDATION_NUMERATOR: f64 = 50.0;

/// Reward multiples computed on every pass.
pub const DEFAULT_TARGET_MULTIPLES: [f64; 3] = [1.0, 2.0, 3.0];

/// Convert a percent distance from entry into a price. `favorable`
/// moves with the trade, otherwise against it; the long/short sign
/// lives here and nowhere else.
fn percent_to_price(input: &TradeInput, percent: f64, favorable: bool) -> f64 {
    let sign = if favorable {
        input.direction.sign()
    } else {
        -input.direction.sign()
    };
    input.entry_price + (input.entry_price * percent / 100.0) * sign
}

fn target(input: &TradeInput, quantity: f64, r: f64) -> RiskTarget {
    let percent = input.stop_loss_percent * r;
    let price = percent_to_price(input, percent, true);
    let profit_usdt = (price - input.entry_price) * quantity * input.direction.sign();

    RiskTarget {
        r,
        percent,
        price,
        profit_usdt,
        profit_inr: profit_usdt * input.conversion_rate,
    }
}

/// Target price and projected profit at a caller-selected reward
/// multiple. Returns None for invalid input, same as compute_metrics.
pub fn target_for(input: &TradeInput, r: f64) -> Option<RiskTarget> {
    if !input.is_valid() || r <= 0.0 {
        return None;
    }
    Some(target(input, quantity(input), r))
}

fn quantity(input: &TradeInput) -> f64 {
    input.stop_loss_amount
        / (input.entry_price * input.conversion_rate * (input.stop_loss_percent / 100.0))
}

/// Derive the full metric set from a trade input. Returns None when any
/// required numeric is missing or not strictly positive; no formula is
/// evaluated against an invalid operand.
pub fn compute_metrics(input: &TradeInput) -> Option<DerivedMetrics> {
    if !input.is_valid() {
        return None;
    }

    let quantity = quantity(input);
    let notional = quantity * input.entry_price;
    let margin = notional / input.leverage as f64;
    let fee = notional * TAKER_FEE_RATE * 2.0;
    let break_even_percent = (fee / notional) * 100.0;

    let stop_loss_price = percent_to_price(input, input.stop_loss_percent, false);
    let liquidation_drop_percent = LIQUIDATION_NUMERATOR / input.leverage as f64;
    let liquidation_price = percent_to_price(input, liquidation_drop_percent, false);

    // Verdict kept exactly as the form logic had it: a long stop must
    // sit above the liquidation price, a short stop below it.
    let stop_loss_safe = match input.direction {
        Direction::Long => stop_loss_price > liquidation_price,
        Direction::Short => stop_loss_price < liquidation_price,
    };

    let targets = DEFAULT_TARGET_MULTIPLES
        .iter()
        .map(|&r| target(input, quantity, r))
        .collect();

    let sl_in_usdt = input.stop_loss_amount / input.conversion_rate;
    let loss_estimates = LossEstimates {
        sl_with_fees: fee + sl_in_usdt,
        maker_maker: sl_in_usdt + notional * ESTIMATE_MAKER_RATE * 2.0,
        taker_maker: sl_in_usdt + notional * (ESTIMATE_TAKER_RATE + ESTIMATE_MAKER_RATE),
        taker_taker: sl_in_usdt + notional * ESTIMATE_TAKER_RATE * 2.0,
    };

    Some(DerivedMetrics {
        quantity,
        notional,
        margin,
        fee,
        break_even_percent,
        stop_loss_price,
        liquidation_drop_percent,
        liquidation_price,
        stop_loss_safe,
        targets,
        loss_estimates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::USDT_INR_RATE;

    fn sample_input() -> TradeInput {
        TradeInput {
            direction: Direction::Long,
            entry_price: 29000.0,
            stop_loss_percent: 2.0,
            stop_loss_amount: 1000.0,
            leverage: 50,
            conversion_rate: USDT_INR_RATE,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_worked_example_long() {
        let m = compute_metrics(&sample_input()).unwrap();

        assert!(approx(m.quantity, 1000.0 / 49300.0)); // ~0.020284
        assert!(approx(m.notional, 588.2352941176471));
        assert!(approx(m.margin, 11.764705882352942));
        assert!(approx(m.fee, 0.9411764705882353));
        assert!(approx(m.break_even_percent, 0.16));
        assert_eq!(m.stop_loss_price, 28420.0);
        assert_eq!(m.liquidation_drop_percent, 1.0);
        assert_eq!(m.liquidation_price, 28710.0);
        // Stop sits below the liquidation price, so the verdict is unsafe
        assert!(!m.stop_loss_safe);
    }

    #[test]
    fn test_worked_example_targets() {
        let m = compute_metrics(&sample_input()).unwrap();

        assert_eq!(m.targets.len(), 3);
        let t1 = &m.targets[0];
        assert_eq!(t1.r, 1.0);
        assert_eq!(t1.percent, 2.0);
        assert_eq!(t1.price, 29580.0);
        assert!(approx(t1.profit_usdt, 11.764705882352942));
        // A one-R win recovers exactly the risked amount
        assert!(approx(t1.profit_inr, 1000.0));

        assert_eq!(m.targets[1].price, 30160.0);
        assert_eq!(m.targets[2].price, 30740.0);
    }

    #[test]
    fn test_short_mirrors_long() {
        let mut input = sample_input();
        input.direction = Direction::Short;
        let m = compute_metrics(&input).unwrap();

        assert_eq!(m.stop_loss_price, 29580.0);
        assert_eq!(m.liquidation_price, 29290.0);
        assert!(!m.stop_loss_safe);

        // Targets sit below entry and still project positive profit
        for t in &m.targets {
            assert!(t.price < input.entry_price);
            assert!(t.profit_usdt > 0.0);
        }
        assert!(approx(m.targets[0].profit_inr, 1000.0));
    }

    #[test]
    fn test_core_figures_are_positive() {
        for direction in [Direction::Long, Direction::Short] {
            let mut input = sample_input();
            input.direction = direction;
            let m = compute_metrics(&input).unwrap();

            assert!(m.quantity > 0.0);
            assert!(m.notional > 0.0);
            assert!(m.margin > 0.0);
            assert!(m.fee > 0.0);
        }
    }

    #[test]
    fn test_break_even_identity() {
        let m = compute_metrics(&sample_input()).unwrap();
        assert_eq!(m.break_even_percent, (m.fee / m.notional) * 100.0);
    }

    #[test]
    fn test_target_ordering_per_direction() {
        let m = compute_metrics(&sample_input()).unwrap();
        assert!(m.stop_loss_price < sample_input().entry_price);
        assert!(sample_input().entry_price < m.targets[0].price);
        assert!(m.targets[0].price < m.targets[1].price);
        assert!(m.targets[1].price < m.targets[2].price);

        let mut input = sample_input();
        input.direction = Direction::Short;
        let m = compute_metrics(&input).unwrap();
        assert!(m.stop_loss_price > input.entry_price);
        assert!(input.entry_price > m.targets[0].price);
        assert!(m.targets[0].price > m.targets[1].price);
        assert!(m.targets[1].price > m.targets[2].price);
    }

    #[test]
    fn test_tight_stop_is_safe() {
        // 0.5% stop against a 1% liquidation drop keeps the stop on the
        // survivable side for both directions
        let mut input = sample_input();
        input.stop_loss_percent = 0.5;
        assert!(compute_metrics(&input).unwrap().stop_loss_safe);

        input.direction = Direction::Short;
        assert!(compute_metrics(&input).unwrap().stop_loss_safe);
    }

    #[test]
    fn test_stop_on_liquidation_is_unsafe() {
        // Strict comparison: a stop exactly at liquidation is not safe
        let mut input = sample_input();
        input.stop_loss_percent = 1.0;
        let m = compute_metrics(&input).unwrap();
        assert_eq!(m.stop_loss_price, m.liquidation_price);
        assert!(!m.stop_loss_safe);
    }

    #[test]
    fn test_liquidation_drop_scales_with_leverage() {
        let mut input = sample_input();
        input.leverage = 1000;
        let m = compute_metrics(&input).unwrap();
        assert_eq!(m.liquidation_drop_percent, 0.05);
        assert_eq!(m.liquidation_price, 29000.0 - 29000.0 * 0.05 / 100.0);
    }

    #[test]
    fn test_loss_estimates() {
        let m = compute_metrics(&sample_input()).unwrap();
        let sl_in_usdt = 1000.0 / USDT_INR_RATE;

        assert!(approx(m.loss_estimates.sl_with_fees, m.fee + sl_in_usdt));
        assert!(approx(m.loss_estimates.maker_maker, sl_in_usdt + m.notional * 0.0004));
        assert!(approx(m.loss_estimates.taker_maker, sl_in_usdt + m.notional * 0.0006));
        assert!(approx(m.loss_estimates.taker_taker, sl_in_usdt + m.notional * 0.0008));
        // Wider fee pairings can only lose more
        assert!(m.loss_estimates.maker_maker <= m.loss_estimates.taker_maker);
        assert!(m.loss_estimates.taker_maker <= m.loss_estimates.taker_taker);
    }

    #[test]
    fn test_invalid_inputs_compute_nothing() {
        let mut input = sample_input();
        input.leverage = 0;
        assert!(compute_metrics(&input).is_none());

        let mut input = sample_input();
        input.entry_price = 0.0;
        assert!(compute_metrics(&input).is_none());

        let mut input = sample_input();
        input.stop_loss_percent = -2.0;
        assert!(compute_metrics(&input).is_none());

        let mut input = sample_input();
        input.stop_loss_amount = 0.0;
        assert!(compute_metrics(&input).is_none());

        let mut input = sample_input();
        input.conversion_rate = 0.0;
        assert!(compute_metrics(&input).is_none());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let input = sample_input();
        let a = compute_metrics(&input).unwrap();
        let b = compute_metrics(&input).unwrap();

        assert_eq!(a.quantity, b.quantity);
        assert_eq!(a.notional, b.notional);
        assert_eq!(a.margin, b.margin);
        assert_eq!(a.fee, b.fee);
        assert_eq!(a.stop_loss_price, b.stop_loss_price);
        assert_eq!(a.liquidation_price, b.liquidation_price);
        assert_eq!(a.stop_loss_safe, b.stop_loss_safe);
        assert_eq!(a.targets.len(), b.targets.len());
    }

    #[test]
    fn test_target_for_custom_multiple() {
        let input = sample_input();
        let t = target_for(&input, 2.5).unwrap();

        assert_eq!(t.percent, 5.0);
        assert_eq!(t.price, 30450.0);
        assert!(approx(t.profit_inr, 2500.0));

        assert!(target_for(&input, 0.0).is_none());
        let mut invalid = sample_input();
        invalid.leverage = 0;
        assert!(target_for(&invalid, 1.0).is_none());
    }
}
