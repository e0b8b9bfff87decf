use chrono::NaiveDate;
use rust_decimal::RoundingStrategy;

use crate::accrual::Projection;
use crate::charts::summarize;
use crate::error::RdError;
use crate::types::{to_money, Currency, Money};
use crate::RdResult;

pub const REPORT_TITLE: &str = "Rupee Insights: Recurring Deposit Calculator";

/// `RD_Calculator_Report_2026-10-19.txt`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("RD_Calculator_Report_{}.txt", date.format("%Y-%m-%d"))
}

/// Render an amount with the currency symbol and digit grouping, keeping at
/// most two decimal places.
pub fn format_amount(amount: Money, currency: &Currency) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w.to_string(), Some(f.to_string())),
        None => (text, None),
    };

    let grouped = group_digits(&whole, currency.uses_indian_grouping());
    match fraction {
        Some(f) => format!("{sign}{}{grouped}.{f}", currency.symbol()),
        None => format!("{sign}{}{grouped}", currency.symbol()),
    }
}

fn group_digits(digits: &str, indian: bool) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let width = if indian { 2 } else { 3 };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Plain-text calculation summary. Interest and maturity are rounded to whole
/// units; the deposit and principal are printed as entered.
pub fn render_report(
    projection: &Projection,
    generated_on: NaiveDate,
    currency: &Currency,
) -> RdResult<String> {
    let summary = summarize(projection).map_err(|e| RdError::ExportFailure(e.to_string()))?;
    let deposit = to_money("monthly_deposit", projection.monthly_deposit)
        .map_err(|e| RdError::ExportFailure(e.to_string()))?;

    Ok(format!(
        "{REPORT_TITLE}

CALCULATION SUMMARY

Investment Details:
Monthly Deposit: {deposit}
Interest Rate: {rate}%
Time Period: {tenure} months

Results:
Total Principal: {principal}
Total Interest Earned: {interest}
Maturity Amount: {maturity}

Generated on {date}
",
        deposit = format_amount(deposit, currency),
        rate = projection.annual_rate_percent,
        tenure = projection.tenure_months,
        principal = format_amount(summary.total_principal, currency),
        interest = format_amount(summary.interest_earned, currency),
        maturity = format_amount(summary.maturity_amount, currency),
        date = generated_on.format("%Y-%m-%d"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_amount(dec!(180000), &Currency::INR), "₹1,80,000");
        assert_eq!(format_amount(dec!(12345678), &Currency::INR), "₹1,23,45,678");
        assert_eq!(format_amount(dec!(999), &Currency::INR), "₹999");
    }

    #[test]
    fn test_thousands_grouping_and_fraction() {
        assert_eq!(format_amount(dec!(1234567.5), &Currency::USD), "$1,234,567.5");
        assert_eq!(format_amount(dec!(-2500), &Currency::GBP), "-£2,500");
    }

    #[test]
    fn test_report_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(report_file_name(date), "RD_Calculator_Report_2026-10-19.txt");
    }
}
