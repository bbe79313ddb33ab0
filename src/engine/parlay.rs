// Parlay odds math: American/decimal conversions, multi-leg combination,
// payout and profit.

use crate::error::EngineError;

/// Convert American odds to decimal odds.
pub fn american_to_decimal(odds: i32) -> f64 {
    if odds > 0 {
        odds as f64 / 100.0 + 1.0
    } else {
        100.0 / odds.unsigned_abs() as f64 + 1.0
    }
}

/// Convert decimal odds back to American, rounded to the nearest integer.
pub fn decimal_to_american(decimal: f64) -> i32 {
    if decimal >= 2.0 {
        ((decimal - 1.0) * 100.0).round() as i32
    } else {
        (-100.0 / (decimal - 1.0)).round() as i32
    }
}

/// Combined American odds for a parlay.
///
/// Legs convert to decimal, multiply, and convert back. A single leg
/// passes through unchanged; zero legs is a caller contract violation.
pub fn parlay_odds(legs: &[i32]) -> Result<i32, EngineError> {
    match legs {
        [] => Err(EngineError::EmptyParlay),
        [only] => Ok(*only),
        _ => {
            let combined: f64 = legs.iter().map(|&leg| american_to_decimal(leg)).product();
            Ok(decimal_to_american(combined))
        }
    }
}

/// Total payout (stake included) for a stake at American odds.
pub fn payout(odds: i32, stake: f64) -> f64 {
    if odds > 0 {
        stake + stake * odds as f64 / 100.0
    } else {
        stake + stake * 100.0 / odds.unsigned_abs() as f64
    }
}

/// Profit (payout minus stake) for a stake at American odds.
pub fn profit(odds: i32, stake: f64) -> f64 {
    payout(odds, stake) - stake
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn american_to_decimal_both_signs() {
        assert!(approx_eq(american_to_decimal(150), 2.5, 1e-10));
        assert!(approx_eq(american_to_decimal(-110), 100.0 / 110.0 + 1.0, 1e-10));
        assert!(approx_eq(american_to_decimal(100), 2.0, 1e-10));
    }

    #[test]
    fn round_trip_within_rounding_tolerance() {
        for odds in [-300, -150, -110, -105, 100, 120, 150, 250, 400] {
            let back = decimal_to_american(american_to_decimal(odds));
            assert!(
                (back - odds).abs() <= 1,
                "round trip of {odds} gave {back}"
            );
        }
    }

    #[test]
    fn two_leg_parlay_known_values() {
        // +150 -> 2.5, -110 -> 1.9090..; product ~4.7727 -> +377.
        let combined = parlay_odds(&[150, -110]).unwrap();
        assert_eq!(combined, 377);

        let total = payout(combined, 100.0);
        assert!(approx_eq(total, 477.0, 1e-10));
        assert!(approx_eq(profit(combined, 100.0), 377.0, 1e-10));
    }

    #[test]
    fn single_leg_passes_through() {
        assert_eq!(parlay_odds(&[-120]).unwrap(), -120);
    }

    #[test]
    fn empty_parlay_is_a_contract_violation() {
        assert_eq!(parlay_odds(&[]), Err(EngineError::EmptyParlay));
    }

    #[test]
    fn heavy_favorite_parlay_stays_negative() {
        // Two -400 legs: decimal 1.25 * 1.25 = 1.5625 -> -100/0.5625 = -178.
        let combined = parlay_odds(&[-400, -400]).unwrap();
        assert_eq!(combined, -178);
    }

    #[test]
    fn payout_negative_odds() {
        // $100 at -110 pays $190.91, profit $90.91.
        assert!(approx_eq(payout(-110, 100.0), 100.0 + 10000.0 / 110.0, 1e-10));
    }
}
