//! Report export: a dated text summary of a projection, and delivery of that
//! summary to a recipient through a pluggable transport.

pub mod delivery;
pub mod document;

pub use delivery::{
    compose_message, send_report, validate_recipient, DeliveryRequest, ReportMessage,
    ReportTransport,
};
pub use document::{format_amount, render_report, report_file_name, REPORT_TITLE};
