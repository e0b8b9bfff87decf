use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rd_calc_core::accrual::project;
use rd_calc_core::report::{
    compose_message, render_report, send_report, DeliveryRequest, ReportMessage, ReportTransport,
};
use rd_calc_core::{Currency, RdError, RdResult};

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

struct FailingTransport;

impl ReportTransport for FailingTransport {
    fn deliver(&self, _message: &ReportMessage) -> RdResult<()> {
        Err(RdError::DeliveryFailure("relay unavailable".into()))
    }
}

#[test]
fn test_report_text_reference_scenario() {
    let text = render_report(&project(5000.0, 7.0, 36), report_date(), &Currency::INR).unwrap();
    let expected = "\
Rupee Insights: Recurring Deposit Calculator

CALCULATION SUMMARY

Investment Details:
Monthly Deposit: ₹5,000
Interest Rate: 7%
Time Period: 36 months

Results:
Total Principal: ₹1,80,000
Total Interest Earned: ₹19,534
Maturity Amount: ₹1,99,534

Generated on 2026-10-19
";
    assert_eq!(text, expected);
}

#[test]
fn test_report_fractional_rate_and_other_currency() {
    let text = render_report(&project(250.0, 6.75, 12), report_date(), &Currency::USD).unwrap();
    assert!(text.contains("Interest Rate: 6.75%"));
    assert!(text.contains("Total Principal: $3,000"));
}

#[test]
fn test_report_rejects_unrepresentable_amounts() {
    let err = render_report(&project(f64::NAN, 7.0, 3), report_date(), &Currency::INR).unwrap_err();
    assert!(matches!(err, RdError::ExportFailure(_)));
}

#[test]
fn test_transport_failure_is_surfaced() {
    let request = DeliveryRequest {
        email: "saver@example.com".into(),
        name: String::new(),
        generated_on: report_date(),
        currency: Currency::INR,
    };
    let err = send_report(&FailingTransport, &project(5000.0, 7.0, 36), &request).unwrap_err();
    assert!(matches!(err, RdError::DeliveryFailure(_)));
}

#[test]
fn test_compose_message_without_name() {
    let request = DeliveryRequest {
        email: "  saver@example.com ".into(),
        name: "   ".into(),
        generated_on: report_date(),
        currency: Currency::INR,
    };
    let message = compose_message(&project(1000.0, 7.0, 3), &request).unwrap();
    assert_eq!(message.to, "saver@example.com");
    assert!(message.body.starts_with("Hi there,"));
}
