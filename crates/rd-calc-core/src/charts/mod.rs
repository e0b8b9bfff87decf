//! Chart-ready data derived from a [`Projection`].
//!
//! Three views mirror the calculator's tabs: a principal-vs-interest
//! breakdown, a sampled growth trajectory, and a per-quarter view. Amounts are
//! rounded to whole currency units here, never inside the projector.

pub mod series;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::accrual::Projection;
use crate::RdResult;

pub use series::{growth_trajectory, quarterly_view, QuarterPoint, TrajectoryPoint};
pub use summary::{breakdown, summarize, Breakdown, Summary};

/// Which chart a caller wants data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartView {
    Breakdown,
    Growth,
    Quarterly,
}

/// Data behind a single chart view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "series", rename_all = "snake_case")]
pub enum ChartSeries {
    Breakdown(Breakdown),
    Growth(Vec<TrajectoryPoint>),
    Quarterly(Vec<QuarterPoint>),
}

/// Summary cards plus the requested chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOutput {
    pub summary: Summary,
    pub chart: ChartSeries,
}

pub fn chart_series(projection: &Projection, view: ChartView) -> RdResult<ChartSeries> {
    Ok(match view {
        ChartView::Breakdown => ChartSeries::Breakdown(breakdown(projection)?),
        ChartView::Growth => ChartSeries::Growth(growth_trajectory(projection)?),
        ChartView::Quarterly => ChartSeries::Quarterly(quarterly_view(projection)?),
    })
}

pub fn build_chart(projection: &Projection, view: ChartView) -> RdResult<ChartOutput> {
    Ok(ChartOutput {
        summary: summarize(projection)?,
        chart: chart_series(projection, view)?,
    })
}
