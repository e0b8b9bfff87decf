use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::RdError;
use crate::types::{with_metadata, ComputationOutput};
use crate::RdResult;

/// Months per compounding period.
pub const MONTHS_PER_QUARTER: u32 = 3;

/// Annual percent -> per-quarter fraction: 4 quarters, 100 percent.
const QUARTERLY_RATE_DIVISOR: f64 = 400.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The three scalar inputs of a recurring deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositInput {
    /// Amount deposited every month, in currency units.
    pub monthly_deposit: f64,
    /// Nominal annual rate as a percentage (7.0 = 7%).
    pub annual_rate_percent: f64,
    /// Number of monthly contributions.
    pub tenure_months: u32,
}

/// One month of the projected trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub month: u32,
    /// Value at maturity of every contribution made up to and including
    /// `month`. This is not the mark-to-date balance.
    pub balance: f64,
}

/// Complete output of one accrual calculation. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub monthly_deposit: f64,
    pub annual_rate_percent: f64,
    pub tenure_months: u32,
    pub total_principal: f64,
    pub interest_earned: f64,
    pub maturity_amount: f64,
    pub timeline: Vec<TimelinePoint>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Per-quarter fractional rate for an annual percentage rate.
pub fn quarterly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / QUARTERLY_RATE_DIVISOR
}

/// Whole quarters between the deposit made in `month` (1-based) and maturity.
pub fn remaining_quarters(tenure_months: u32, month: u32) -> u32 {
    if month > tenure_months {
        return 0;
    }
    let months_left = u64::from(tenure_months) - u64::from(month) + 1;
    (months_left / u64::from(MONTHS_PER_QUARTER)) as u32
}

/// `(1 + quarterly_rate)^quarters`
pub fn growth_factor(quarterly_rate: f64, quarters: u32) -> f64 {
    (1.0 + quarterly_rate).powf(f64::from(quarters))
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project the maturity value and monthly trajectory of a recurring deposit
/// compounded quarterly.
///
/// Each monthly contribution grows for the whole quarters left until maturity.
/// The projection never fails: out-of-range inputs flow through the formula
/// and a zero tenure gives an empty timeline with zero totals.
pub fn project(monthly_deposit: f64, annual_rate_percent: f64, tenure_months: u32) -> Projection {
    let rate = quarterly_rate(annual_rate_percent);
    let total_principal = monthly_deposit * f64::from(tenure_months);

    let mut maturity = 0.0;
    let mut timeline = Vec::with_capacity(tenure_months as usize);

    for month in 1..=tenure_months {
        let quarters = remaining_quarters(tenure_months, month);
        maturity += monthly_deposit * growth_factor(rate, quarters);

        let deposited = f64::from(month) * monthly_deposit;
        timeline.push(TimelinePoint {
            month,
            balance: deposited + (maturity - deposited),
        });
    }

    Projection {
        monthly_deposit,
        annual_rate_percent,
        tenure_months,
        total_principal,
        interest_earned: maturity - total_principal,
        maturity_amount: maturity,
        timeline,
    }
}

/// Caller-side entry point: validates the deposit, collects warnings, and
/// wraps the projection in the standard computation envelope.
pub fn project_deposit(
    input: &RecurringDepositInput,
) -> RdResult<ComputationOutput<Projection>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validation ---
    if !input.monthly_deposit.is_finite() || input.monthly_deposit < 0.0 {
        return Err(RdError::InvalidInput {
            field: "monthly_deposit".into(),
            reason: "monthly_deposit must be a finite amount >= 0".into(),
        });
    }
    if !input.annual_rate_percent.is_finite() {
        return Err(RdError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "annual_rate_percent must be finite".into(),
        });
    }

    if input.annual_rate_percent <= 0.0 || input.annual_rate_percent > 100.0 {
        warnings.push(format!(
            "Annual rate {}% is outside the usual (0, 100] range",
            input.annual_rate_percent
        ));
    }
    if input.tenure_months == 0 {
        warnings.push("Tenure is zero months: nothing is deposited".into());
    } else {
        if input.tenure_months % MONTHS_PER_QUARTER != 0 {
            warnings.push(format!(
                "Tenure of {} months is not a whole number of quarters; \
                 the trailing months earn no interest",
                input.tenure_months
            ));
        }
        warnings.push(
            "Timeline balances are maturity values of deposits made so far, \
             not the account balance at that month"
                .into(),
        );
    }

    let projection = project(
        input.monthly_deposit,
        input.annual_rate_percent,
        input.tenure_months,
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Recurring deposit, quarterly compounding per monthly contribution",
        input,
        warnings,
        elapsed,
        projection,
    ))
}
