use serde::{Deserialize, Serialize};

use crate::accrual::{Projection, MONTHS_PER_QUARTER};
use crate::types::{round_to_units, to_money, Money};
use crate::RdResult;

/// Target number of sampled points on the growth trajectory, before the
/// final month is appended.
pub const TRAJECTORY_POINTS: usize = 10;

/// One sampled point on the growth trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub month: u32,
    pub balance: Money,
}

/// Timeline value at the end of a quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterPoint {
    pub quarter: u32,
    pub label: String,
    /// Deposits made by the end of this quarter.
    pub principal: Money,
    pub balance: Money,
}

/// Sample the timeline every `max(1, len / 10)` months and always end on the
/// final month.
pub fn growth_trajectory(projection: &Projection) -> RdResult<Vec<TrajectoryPoint>> {
    let timeline = &projection.timeline;
    let Some(last) = timeline.last() else {
        return Ok(Vec::new());
    };

    let step = (timeline.len() / TRAJECTORY_POINTS).max(1);
    let mut points = timeline
        .iter()
        .step_by(step)
        .map(|p| -> RdResult<TrajectoryPoint> {
            Ok(TrajectoryPoint {
                month: p.month,
                balance: round_to_units("balance", p.balance)?,
            })
        })
        .collect::<RdResult<Vec<_>>>()?;

    if points.last().map(|p| p.month) != Some(last.month) {
        points.push(TrajectoryPoint {
            month: last.month,
            balance: round_to_units("balance", last.balance)?,
        });
    }

    Ok(points)
}

/// One point per started quarter, sampled at months 3, 6, 9, ... (clamped to
/// the last month when the tenure ends mid-quarter).
pub fn quarterly_view(projection: &Projection) -> RdResult<Vec<QuarterPoint>> {
    let timeline = &projection.timeline;
    if timeline.is_empty() {
        return Ok(Vec::new());
    }

    let tenure = projection.tenure_months;
    let quarters = tenure.div_ceil(MONTHS_PER_QUARTER);
    let last_index = timeline.len() - 1;

    (1..=quarters)
        .map(|q| -> RdResult<QuarterPoint> {
            let quarter_end = q * MONTHS_PER_QUARTER;
            let index = ((quarter_end - 1) as usize).min(last_index);
            let deposited = projection.monthly_deposit * f64::from(quarter_end.min(tenure));
            Ok(QuarterPoint {
                quarter: q,
                label: format!("Q{q}"),
                principal: to_money("principal", deposited)?,
                balance: round_to_units("balance", timeline[index].balance)?,
            })
        })
        .collect()
}
