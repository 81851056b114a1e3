//! 產值計算

use prodsim_core::{ProdsimError, Result};
use rust_decimal::Decimal;

/// 產值計算器
pub struct Valuation;

impl Valuation {
    /// 可實現總值 = 單價 × 可生產數量（精確十進位，保留單價小數位）
    pub fn total_value(price: Decimal, quantity: i64) -> Result<Decimal> {
        price.checked_mul(Decimal::from(quantity)).ok_or_else(|| {
            ProdsimError::Calculation(format!("產值溢位：單價 {} × 數量 {}", price, quantity))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::new(2500, 2), 3, "75.00")]
    #[case(Decimal::new(2500, 2), 25, "625.00")]
    #[case(Decimal::new(1500, 2), 2, "30.00")]
    #[case(Decimal::new(4500, 2), 41, "1845.00")]
    #[case(Decimal::new(1, 1), 3, "0.3")]
    fn test_total_value_is_exact(
        #[case] price: Decimal,
        #[case] quantity: i64,
        #[case] expected: &str,
    ) {
        let value = Valuation::total_value(price, quantity).unwrap();

        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = Valuation::total_value(Decimal::MAX, 2);
        assert!(matches!(result, Err(ProdsimError::Calculation(_))));
    }
}
