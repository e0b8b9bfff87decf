use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accrual::Projection;
use crate::error::RdError;
use crate::types::{round_to_units, to_money, Money, Rate};
use crate::RdResult;

/// Decimal places kept on principal/interest shares.
const SHARE_DP: u32 = 6;

/// The three headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_principal: Money,
    pub interest_earned: Money,
    pub maturity_amount: Money,
}

/// Principal vs interest proportion of the maturity amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub principal: Money,
    pub interest: Money,
    pub principal_share: Rate,
    pub interest_share: Rate,
}

pub fn summarize(projection: &Projection) -> RdResult<Summary> {
    Ok(Summary {
        total_principal: to_money("total_principal", projection.total_principal)?,
        interest_earned: round_to_units("interest_earned", projection.interest_earned)?,
        maturity_amount: round_to_units("maturity_amount", projection.maturity_amount)?,
    })
}

pub fn breakdown(projection: &Projection) -> RdResult<Breakdown> {
    let principal = to_money("total_principal", projection.total_principal)?;
    let interest = to_money("interest_earned", projection.interest_earned)?;
    let overflow = || RdError::InvalidInput {
        field: "interest_earned".into(),
        reason: "principal plus interest cannot be represented as a currency amount".into(),
    };
    let whole = principal.checked_add(interest).ok_or_else(overflow)?;

    let (principal_share, interest_share) = if whole.is_zero() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            principal.checked_div(whole).ok_or_else(overflow)?.round_dp(SHARE_DP),
            interest.checked_div(whole).ok_or_else(overflow)?.round_dp(SHARE_DP),
        )
    };

    Ok(Breakdown {
        principal,
        interest: round_to_units("interest_earned", projection.interest_earned)?,
        principal_share,
        interest_share,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accrual::project;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_rounds_interest_and_maturity_only() {
        let p = project(5000.0, 7.0, 36);
        let s = summarize(&p).unwrap();
        assert_eq!(s.total_principal, dec!(180000));
        assert_eq!(s.maturity_amount, s.maturity_amount.round_dp(0));
        assert_eq!(s.maturity_amount - s.total_principal, s.interest_earned);
    }

    #[test]
    fn test_breakdown_zero_tenure_has_zero_shares() {
        let b = breakdown(&project(5000.0, 7.0, 0)).unwrap();
        assert_eq!(b.principal_share, Decimal::ZERO);
        assert_eq!(b.interest_share, Decimal::ZERO);
    }

    #[test]
    fn test_breakdown_total_beyond_decimal_range_is_an_error() {
        // Principal and interest each fit in a Decimal, their sum does not
        let p = project(1e27, 30.0, 50);
        assert!(to_money("total_principal", p.total_principal).is_ok());
        assert!(to_money("interest_earned", p.interest_earned).is_ok());

        let err = breakdown(&p).unwrap_err();
        assert!(
            matches!(err, RdError::InvalidInput { ref field, .. } if field == "interest_earned")
        );
    }

    #[test]
    fn test_breakdown_zero_rate_is_all_principal() {
        let b = breakdown(&project(2500.0, 0.0, 12)).unwrap();
        assert_eq!(b.principal_share, Decimal::ONE);
        assert_eq!(b.interest, Decimal::ZERO);
    }
}
