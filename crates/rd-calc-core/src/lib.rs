pub mod accrual;
pub mod error;
pub mod types;

#[cfg(feature = "charts")]
pub mod charts;

#[cfg(feature = "report")]
pub mod report;

pub use accrual::{project, project_deposit, Projection, RecurringDepositInput, TimelinePoint};
pub use error::RdError;
pub use types::*;

/// Standard result type for all rd-calc operations
pub type RdResult<T> = Result<T, RdError>;
