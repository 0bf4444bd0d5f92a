use crate::domain::model::FinanceRecord;
use crate::utils::error::{RankError, Result};

/// Cost breakdown of a financed purchase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amortization {
    /// Price minus downpayment and trade-in, never below zero.
    pub loan_amount: f64,
    pub monthly_rate: f64,
    pub monthly_payment: f64,
    /// Downpayment + every monthly payment + additional costs.
    pub total_cost: f64,
}

/// Standard amortizing-loan payment; straight-line when the rate is zero.
pub fn amortize(finance: &FinanceRecord) -> Result<Amortization> {
    if finance.loan_term <= 0 {
        return Err(RankError::InvalidLoanTerm {
            loan_term: finance.loan_term,
        });
    }

    let loan_amount = (finance.car_price - finance.downpayment - finance.trade_in_value).max(0.0);
    let monthly_rate = finance.interest_rate / 100.0 / 12.0;
    let months = f64::from(finance.loan_term);

    // 1 - (1 + r)^-n，用 ln_1p / exp_m1 避免極小利率時分母變成 0
    let monthly_payment = if monthly_rate > 0.0 {
        let discount = -(-months * monthly_rate.ln_1p()).exp_m1();
        loan_amount * monthly_rate / discount
    } else {
        loan_amount / months
    };

    let total_cost = finance.downpayment + monthly_payment * months + finance.additional_costs;

    Ok(Amortization {
        loan_amount,
        monthly_rate,
        monthly_payment,
        total_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PurchaseType;
    use approx::assert_abs_diff_eq;

    fn finance(car_price: f64, downpayment: f64, interest_rate: f64, loan_term: i32) -> FinanceRecord {
        FinanceRecord {
            purchase_type: PurchaseType::Buy,
            downpayment,
            interest_rate,
            loan_term,
            trade_in_value: 0.0,
            additional_costs: 0.0,
            car_price,
        }
    }

    #[test]
    fn test_standard_amortization() {
        let mut record = finance(30_000.0, 6_000.0, 6.0, 48);
        record.additional_costs = 1_200.0;

        let result = amortize(&record).unwrap();

        assert_abs_diff_eq!(result.loan_amount, 24_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.monthly_rate, 0.005, epsilon = 1e-12);
        assert_abs_diff_eq!(result.monthly_payment, 563.64, epsilon = 0.01);
        assert_abs_diff_eq!(
            result.total_cost,
            6_000.0 + 48.0 * result.monthly_payment + 1_200.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let result = amortize(&finance(12_000.0, 0.0, 0.0, 12)).unwrap();
        assert_eq!(result.monthly_payment, 1000.0);
        assert_eq!(result.total_cost, 12_000.0);
    }

    #[test]
    fn test_tiny_rate_converges_to_straight_line() {
        let result = amortize(&finance(12_000.0, 0.0, 1e-14, 12)).unwrap();
        assert!(result.monthly_rate > 0.0);
        assert!(result.monthly_payment.is_finite());
        assert_abs_diff_eq!(result.monthly_payment, 1000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.total_cost, 12_000.0, epsilon = 1e-6);

        let nothing_owed = amortize(&finance(0.0, 0.0, 1e-14, 12)).unwrap();
        assert_eq!(nothing_owed.monthly_payment, 0.0);
        assert_eq!(nothing_owed.total_cost, 0.0);
    }

    #[test]
    fn test_trade_in_larger_than_price_clamps_principal() {
        let mut record = finance(20_000.0, 5_000.0, 5.0, 36);
        record.trade_in_value = 18_000.0;

        let result = amortize(&record).unwrap();

        assert_eq!(result.loan_amount, 0.0);
        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.total_cost, 5_000.0);
    }

    #[test]
    fn test_payments_cover_principal_and_interest() {
        let result = amortize(&finance(40_000.0, 0.0, 7.5, 60)).unwrap();
        assert!(result.monthly_payment * 60.0 > 40_000.0);
    }

    #[test]
    fn test_non_positive_loan_term_rejected() {
        assert!(matches!(
            amortize(&finance(10_000.0, 0.0, 3.0, 0)),
            Err(RankError::InvalidLoanTerm { loan_term: 0 })
        ));
        assert!(matches!(
            amortize(&finance(10_000.0, 0.0, 0.0, -12)),
            Err(RankError::InvalidLoanTerm { loan_term: -12 })
        ));
    }
}
