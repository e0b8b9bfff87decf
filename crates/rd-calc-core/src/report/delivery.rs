use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::accrual::Projection;
use crate::error::RdError;
use crate::report::document::render_report;
use crate::types::Currency;
use crate::RdResult;

const SUBJECT: &str = "Your recurring deposit projection";

/// Who receives the report, and how it is dated and denominated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRequest {
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub generated_on: NaiveDate,
    #[serde(default)]
    pub currency: Currency,
}

/// A composed report ready for a transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMessage {
    pub to: String,
    pub to_name: String,
    pub subject: String,
    pub body: String,
}

/// Hands a composed message to whatever carries it (mail relay, outbox
/// directory, test double). Failures should be reported as
/// [`RdError::DeliveryFailure`].
pub trait ReportTransport {
    fn deliver(&self, message: &ReportMessage) -> RdResult<()>;
}

/// Minimal address check: an `@` and a `.` somewhere in the string.
pub fn validate_recipient(email: &str) -> RdResult<()> {
    if !email.contains('@') || !email.contains('.') {
        return Err(RdError::InvalidInput {
            field: "email".into(),
            reason: format!("'{email}' is not a valid email address"),
        });
    }
    Ok(())
}

pub fn compose_message(
    projection: &Projection,
    request: &DeliveryRequest,
) -> RdResult<ReportMessage> {
    let report = render_report(projection, request.generated_on, &request.currency)?;
    let greeting = if request.name.trim().is_empty() {
        "Hi there,".to_string()
    } else {
        format!("Hi {},", request.name.trim())
    };

    Ok(ReportMessage {
        to: request.email.trim().to_string(),
        to_name: request.name.trim().to_string(),
        subject: SUBJECT.to_string(),
        body: format!("{greeting}\n\nHere is your recurring deposit projection.\n\n{report}"),
    })
}

/// Validate the recipient, compose the report, and deliver it. Nothing is
/// retried here; the caller decides whether to try again.
pub fn send_report<T: ReportTransport + ?Sized>(
    transport: &T,
    projection: &Projection,
    request: &DeliveryRequest,
) -> RdResult<ReportMessage> {
    validate_recipient(&request.email)?;
    let message = compose_message(projection, request)?;

    match transport.deliver(&message) {
        Ok(()) => {
            info!("report delivered to {}", message.to);
            Ok(message)
        }
        Err(e) => {
            warn!("report delivery to {} failed: {e}", message.to);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accrual::project;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        sent: RefCell<Vec<ReportMessage>>,
    }

    impl ReportTransport for Recorder {
        fn deliver(&self, message: &ReportMessage) -> RdResult<()> {
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    fn request(email: &str) -> DeliveryRequest {
        DeliveryRequest {
            email: email.into(),
            name: "Asha".into(),
            generated_on: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            currency: Currency::INR,
        }
    }

    #[test]
    fn test_validate_recipient_minimal_rule() {
        assert!(validate_recipient("a@b.c").is_ok());
        // Deliberately loose: both characters anywhere is enough
        assert!(validate_recipient(".@").is_ok());
        assert!(validate_recipient("user.example.com").is_err());
        assert!(validate_recipient("user@localhost").is_err());
    }

    #[test]
    fn test_invalid_recipient_never_reaches_transport() {
        let transport = Recorder::default();
        let p = project(5000.0, 7.0, 36);
        let err = send_report(&transport, &p, &request("nobody")).unwrap_err();
        assert!(matches!(err, RdError::InvalidInput { .. }));
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_send_report_delivers_composed_message() {
        let transport = Recorder::default();
        let p = project(5000.0, 7.0, 36);
        let message = send_report(&transport, &p, &request("asha@example.in")).unwrap();
        assert_eq!(transport.sent.borrow().len(), 1);
        assert!(message.body.starts_with("Hi Asha,"));
        assert!(message.body.contains("Maturity Amount: ₹1,99,534"));
    }
}
