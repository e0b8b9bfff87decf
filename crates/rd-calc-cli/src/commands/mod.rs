pub mod deposit;
pub mod export;
