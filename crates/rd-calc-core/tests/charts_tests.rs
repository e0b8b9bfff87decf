use pretty_assertions::assert_eq;
use rd_calc_core::accrual::project;
use rd_calc_core::charts::{
    breakdown, build_chart, growth_trajectory, quarterly_view, summarize, ChartSeries, ChartView,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Summary cards and rounding at the boundary
// ===========================================================================

#[test]
fn test_rounding_happens_only_at_display() {
    let p = project(5000.0, 7.0, 36);
    // The projection keeps fractional currency
    assert!(p.maturity_amount.fract() > 0.0);

    let s = summarize(&p).unwrap();
    assert_eq!(s.total_principal, dec!(180000));
    assert_eq!(s.interest_earned, dec!(19534));
    assert_eq!(s.maturity_amount, dec!(199534));
}

#[test]
fn test_breakdown_shares_sum_to_one() {
    let b = breakdown(&project(5000.0, 7.0, 36)).unwrap();
    assert_eq!(b.principal, dec!(180000));
    assert_eq!(b.interest, dec!(19534));
    let total = b.principal_share + b.interest_share;
    assert!((total - Decimal::ONE).abs() <= dec!(0.000001));
    assert!(b.principal_share > dec!(0.90) && b.principal_share < dec!(0.91));
}

// ===========================================================================
// Series sampling
// ===========================================================================

#[test]
fn test_trajectory_sample_count_is_bounded() {
    for tenure in [3, 12, 60, 119, 120] {
        let points = growth_trajectory(&project(1000.0, 7.0, tenure)).unwrap();
        // step = max(1, n/10) gives at most 10 (or n) samples plus the final month
        assert!(points.len() <= 12, "tenure {tenure} produced {}", points.len());
        assert_eq!(points.first().unwrap().month, 1);
        assert_eq!(points.last().unwrap().month, tenure);
    }
}

#[test]
fn test_trajectory_balances_are_whole_units() {
    for point in growth_trajectory(&project(1234.56, 6.9, 48)).unwrap() {
        assert_eq!(point.balance, point.balance.round_dp(0));
    }
}

#[test]
fn test_quarterly_view_samples_quarter_ends() {
    let p = project(5000.0, 7.0, 12);
    let q = quarterly_view(&p).unwrap();
    let labels: Vec<&str> = q.iter().map(|x| x.label.as_str()).collect();
    assert_eq!(labels, vec!["Q1", "Q2", "Q3", "Q4"]);
    assert_eq!(q[0].principal, dec!(15000));
    assert_eq!(q[3].principal, dec!(60000));
    for (i, point) in q.iter().enumerate() {
        let month_index = (i + 1) * 3 - 1;
        let expected = rd_calc_core::round_to_units("b", p.timeline[month_index].balance).unwrap();
        assert_eq!(point.balance, expected);
    }
}

#[test]
fn test_build_chart_bundles_summary() {
    let out = build_chart(&project(5000.0, 7.0, 36), ChartView::Quarterly).unwrap();
    assert_eq!(out.summary.maturity_amount, dec!(199534));
    match out.chart {
        ChartSeries::Quarterly(points) => assert_eq!(points.len(), 12),
        other => panic!("expected quarterly series, got {other:?}"),
    }
}
