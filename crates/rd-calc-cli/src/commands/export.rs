use chrono::{Local, NaiveDate};
use clap::Args;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{Address, FileTransport, Message, Transport};
use log::info;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

use rd_calc_core::accrual::project;
use rd_calc_core::report::{
    render_report, report_file_name, send_report, DeliveryRequest, ReportMessage,
    ReportTransport,
};
use rd_calc_core::{Currency, RdError, RdResult};

use super::deposit::DepositArgs;

const DEFAULT_SENDER: &str = "RD Calculator <reports@rdcalc.local>";

/// Arguments for writing a report file
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub deposit: DepositArgs,

    /// Directory the report is written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Report date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Currency used to print amounts (INR, USD, EUR, GBP)
    #[arg(long, default_value = "INR")]
    pub currency: Currency,
}

/// Arguments for sending a report to a recipient
#[derive(Args)]
pub struct EmailArgs {
    #[command(flatten)]
    pub deposit: DepositArgs,

    /// Recipient email address
    #[arg(long)]
    pub to: String,

    /// Recipient name used in the greeting
    #[arg(long, default_value = "")]
    pub name: String,

    /// Sender mailbox
    #[arg(long, default_value = DEFAULT_SENDER)]
    pub from: String,

    /// Directory messages are written to as .eml files
    #[arg(long, default_value = "outbox")]
    pub outbox: PathBuf,

    /// Report date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Currency used to print amounts (INR, USD, EUR, GBP)
    #[arg(long, default_value = "INR")]
    pub currency: Currency,
}

/// Delivers report messages into a directory, one `.eml` file each.
pub struct OutboxTransport {
    sender: Mailbox,
    dir: PathBuf,
}

impl OutboxTransport {
    pub fn new(sender: &str, dir: PathBuf) -> RdResult<Self> {
        let sender = sender.parse::<Mailbox>().map_err(|e| RdError::InvalidInput {
            field: "from".into(),
            reason: e.to_string(),
        })?;
        Ok(Self { sender, dir })
    }

    fn build(&self, message: &ReportMessage) -> RdResult<Message> {
        let address = message
            .to
            .parse::<Address>()
            .map_err(|e| RdError::DeliveryFailure(format!("recipient '{}': {e}", message.to)))?;
        let name = (!message.to_name.is_empty()).then(|| message.to_name.clone());

        Message::builder()
            .from(self.sender.clone())
            .to(Mailbox::new(name, address))
            .subject(message.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| RdError::DeliveryFailure(e.to_string()))
    }
}

impl ReportTransport for OutboxTransport {
    fn deliver(&self, message: &ReportMessage) -> RdResult<()> {
        let email = self.build(message)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            RdError::DeliveryFailure(format!("cannot create outbox '{}': {e}", self.dir.display()))
        })?;
        let id = FileTransport::new(&self.dir)
            .send(&email)
            .map_err(|e| RdError::DeliveryFailure(e.to_string()))?;
        info!("wrote message {id} to {}", self.dir.display());
        Ok(())
    }
}

fn report_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let deposit = args.deposit.resolve()?;
    let projection = project(
        deposit.monthly_deposit,
        deposit.annual_rate_percent,
        deposit.tenure_months,
    );
    let date = report_date(args.date);
    let text = render_report(&projection, date, &args.currency)?;

    let path = args.out_dir.join(report_file_name(date));
    fs::create_dir_all(&args.out_dir)
        .and_then(|_| fs::write(&path, &text))
        .map_err(|e| RdError::ExportFailure(format!("cannot write '{}': {e}", path.display())))?;
    info!("report written to {}", path.display());

    Ok(json!({
        "result": {
            "path": path.display().to_string(),
            "bytes": text.len(),
            "generated_on": date,
        }
    }))
}

pub fn run_email(args: EmailArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let deposit = args.deposit.resolve()?;
    let projection = project(
        deposit.monthly_deposit,
        deposit.annual_rate_percent,
        deposit.tenure_months,
    );
    let transport = OutboxTransport::new(&args.from, args.outbox.clone())?;
    let request = DeliveryRequest {
        email: args.to,
        name: args.name,
        generated_on: report_date(args.date),
        currency: args.currency,
    };
    let message = send_report(&transport, &projection, &request)?;

    Ok(json!({
        "result": {
            "recipient": message.to,
            "subject": message.subject,
            "outbox": args.outbox.display().to_string(),
        }
    }))
}
