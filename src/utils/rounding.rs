use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::PERCENT_SCALE;

/// Rounds half-up to `scale` decimal places and pads the result to exactly
/// that scale, so a money value always serializes as e.g. "1001.00" and a
/// quantity as "10.000000".
pub fn quantize(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

/// Rounds a percentage figure to the fixed percent scale.
pub fn quantize_percent(value: Decimal) -> Decimal {
    quantize(value, PERCENT_SCALE)
}

/// Percentage of `part` over `whole`, zero when the denominator is not
/// strictly positive.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        quantize_percent(part / whole * Decimal::ONE_HUNDRED)
    } else {
        quantize_percent(Decimal::ZERO)
    }
}
