use crate::application::session::TransactionLedger;
use crate::domain::language::Language;
use crate::domain::ports::{CodeRenderer, Console, Localizer, Text};
use crate::domain::transaction::{PaymentStatus, TransactionId};
use crate::error::Result;
use std::str::FromStr;

/// Merchant UPI id embedded in every UPI payment link.
pub const UPI_ID: &str = "6363759716-2@ibl";

const CONFIRM_URL: &str = "https://paymentgateway.com/confirm_payment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Qr,
    Upi,
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qr" => Ok(PaymentMethod::Qr),
            "upi" => Ok(PaymentMethod::Upi),
            other => Err(format!("unknown payment method '{other}'")),
        }
    }
}

/// Result of one payment attempt: whether the user confirmed, and the
/// transaction id the ledger tracked it under.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOutcome {
    pub confirmed: bool,
    pub transaction: TransactionId,
}

/// Link the user follows to confirm a payment.
pub fn confirmation_link(transaction: &TransactionId) -> String {
    format!("{CONFIRM_URL}?tid={transaction}")
}

/// Structured UPI payment URI: merchant id, payee name, amount in INR,
/// transaction id as the note.
pub fn upi_link(payee: &str, price: u32, transaction: &TransactionId) -> String {
    format!("upi://pay?pa={UPI_ID}&pn={payee}&am={price}&cu=INR&tn={transaction}")
}

/// Runs one payment attempt: renders the scannable code, blocks on a
/// single explicit yes/no confirmation and records Confirmed or Pending
/// (never Cancelled here). A render failure propagates as
/// `BookingError::Payment` and aborts the attempt.
#[allow(clippy::too_many_arguments)]
pub async fn collect_payment(
    ledger: &mut TransactionLedger,
    renderer: &dyn CodeRenderer,
    console: &mut dyn Console,
    localizer: &dyn Localizer,
    language: Language,
    transaction: TransactionId,
    price: u32,
    payee: &str,
    method: PaymentMethod,
) -> Result<PaymentOutcome> {
    let link = confirmation_link(&transaction);

    match method {
        PaymentMethod::Qr => {
            renderer.render(&link).await?;
            console.print(&localizer.line(
                language,
                Text::TransactionIdLine,
                &[transaction.as_str()],
            ));
        }
        PaymentMethod::Upi => {
            let upi = upi_link(payee, price, &transaction);
            renderer.render(&upi).await?;
            let price = price.to_string();
            console.print(&localizer.line(language, Text::UpiPayLine, &[&price, UPI_ID]));
            console.print(&localizer.line(language, Text::UpiLinkLine, &[&upi]));
            console.print(&localizer.line(language, Text::UpiConfirmLine, &[&link]));
        }
    }

    // Honest-system assumption: one blocking yes/no, no verification,
    // no timeout, no retry.
    let answer = console
        .read_line(localizer.text(language, Text::PaymentCompletedPrompt))
        .await?;
    let confirmed = answer.trim() == "1";

    if confirmed {
        console.print(localizer.text(language, Text::PaymentConfirmed));
        ledger.set_status(&transaction, PaymentStatus::Confirmed);
    } else {
        console.print(localizer.text(language, Text::PaymentNotConfirmed));
        ledger.set_status(&transaction, PaymentStatus::Pending);
    }

    Ok(PaymentOutcome {
        confirmed,
        transaction,
    })
}
