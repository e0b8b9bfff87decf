use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RdError;
use crate::RdResult;

/// Display-side monetary values. The projector works in `f64`; amounts are
/// converted to `Money` only when they leave the core for display or export.
pub type Money = Decimal;

/// Fractions of a whole (0.25 = 25%).
pub type Rate = Decimal;

/// Currency used when rendering amounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }

    /// INR amounts use lakh/crore grouping (1,80,000); the rest group by thousands.
    pub fn uses_indian_grouping(&self) -> bool {
        matches!(self, Currency::INR)
    }
}

impl std::str::FromStr for Currency {
    type Err = RdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::INR),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            other => Err(RdError::InvalidInput {
                field: "currency".into(),
                reason: format!("unsupported currency '{other}'"),
            }),
        }
    }
}

/// Convert a raw projection value to `Money` without rounding.
pub fn to_money(field: &str, value: f64) -> RdResult<Money> {
    Decimal::from_f64(value).ok_or_else(|| RdError::InvalidInput {
        field: field.into(),
        reason: format!("{value} cannot be represented as a currency amount"),
    })
}

/// Round a raw projection value to whole currency units. Halves round
/// towards positive infinity, so -2.5 becomes -2.
pub fn round_to_units(field: &str, value: f64) -> RdResult<Money> {
    let half = Decimal::new(5, 1);
    to_money(field, value)?
        .checked_add(half)
        .map(|shifted| shifted.floor())
        .ok_or_else(|| RdError::InvalidInput {
            field: field.into(),
            reason: format!("{value} is too large to round to whole units"),
        })
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "f64_accrual_decimal_display".to_string(),
        },
    }
}
