use clap::{Args, ValueEnum};
use serde_json::Value;
use std::time::Instant;

use rd_calc_core::accrual::{project_deposit, RecurringDepositInput};
use rd_calc_core::charts::{build_chart, ChartView};
use rd_calc_core::with_metadata;

use crate::input;

/// Calculator defaults: 5000 a month at 7% for three years.
pub const DEFAULT_MONTHLY_DEPOSIT: f64 = 5000.0;
pub const DEFAULT_ANNUAL_RATE: f64 = 7.0;
pub const DEFAULT_TENURE_MONTHS: u32 = 36;

/// Deposit parameters shared by every command
#[derive(Args)]
pub struct DepositArgs {
    /// Amount deposited every month
    #[arg(long, alias = "deposit", allow_negative_numbers = true)]
    pub monthly_deposit: Option<f64>,

    /// Annual interest rate in percent (e.g. 7 for 7%)
    #[arg(long, alias = "rate", allow_negative_numbers = true)]
    pub annual_rate: Option<f64>,

    /// Number of monthly deposits
    #[arg(long, alias = "tenure")]
    pub tenure_months: Option<u32>,

    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl DepositArgs {
    fn any_flag(&self) -> bool {
        self.monthly_deposit.is_some() || self.annual_rate.is_some() || self.tenure_months.is_some()
    }

    /// Input file, then flags, then piped JSON, then calculator defaults.
    pub fn resolve(&self) -> Result<RecurringDepositInput, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return input::file::read_input(path);
        }
        if !self.any_flag() {
            if let Some(piped) = input::stdin::read_piped()? {
                return Ok(piped);
            }
        }
        Ok(RecurringDepositInput {
            monthly_deposit: self.monthly_deposit.unwrap_or(DEFAULT_MONTHLY_DEPOSIT),
            annual_rate_percent: self.annual_rate.unwrap_or(DEFAULT_ANNUAL_RATE),
            tenure_months: self.tenure_months.unwrap_or(DEFAULT_TENURE_MONTHS),
        })
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewArg {
    Breakdown,
    Growth,
    Quarterly,
}

impl From<ViewArg> for ChartView {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Breakdown => ChartView::Breakdown,
            ViewArg::Growth => ChartView::Growth,
            ViewArg::Quarterly => ChartView::Quarterly,
        }
    }
}

/// Arguments for chart data
#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub deposit: DepositArgs,

    /// Which chart to produce
    #[arg(long, value_enum, default_value = "growth")]
    pub view: ViewArg,
}

pub fn run_project(args: DepositArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let deposit = args.resolve()?;
    let result = project_deposit(&deposit)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_chart(args: ChartArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let deposit = args.deposit.resolve()?;
    let projected = project_deposit(&deposit)?;
    let chart = build_chart(&projected.result, args.view.into())?;

    let output = with_metadata(
        "Chart series sampled from the recurring deposit timeline",
        &deposit,
        projected.warnings,
        start.elapsed().as_micros() as u64,
        chart,
    );
    Ok(serde_json::to_value(output)?)
}
