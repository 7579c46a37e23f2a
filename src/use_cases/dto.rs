use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;

use crate::domain::errors::PaymentError;

/// Caller details the bank wants in `client_identify`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientContext {
	pub ip_address:    String,
	pub browser_agent: String,
}

/// Unvalidated payment data as received from the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCommand {
	pub payment_method:  Option<String>,
	pub amount:          Option<Value>,
	pub customer_cedula: Option<String>,
	pub customer_phone:  Option<String>,
	pub otp_code:        Option<String>,
	pub card_number:     Option<String>,
	pub expiry_date:     Option<String>,
	pub cvv:             Option<String>,
	pub invoice_number:  Option<String>,
	pub client:          ClientContext,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardAuthCommand {
	pub card_number:     Option<String>,
	pub customer_cedula: Option<String>,
	pub client:          ClientContext,
}

/// Uniform result of a payment attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
	pub success:        bool,
	pub message:        String,
	pub data:           Option<Value>,
	pub transaction_id: Option<String>,
	pub invoice_number: Option<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp:      OffsetDateTime,
	#[serde(skip)]
	pub failure:        Option<PaymentError>,
}

impl PaymentResult {
	pub fn approved(
		message: &str,
		data: Value,
		transaction_id: Option<String>,
		invoice_number: Option<String>,
	) -> Self {
		Self {
			success:   true,
			message:   message.to_string(),
			data:      Some(data),
			transaction_id,
			invoice_number,
			timestamp: OffsetDateTime::now_utc(),
			failure:   None,
		}
	}

	pub fn failed(
		error: PaymentError,
		data: Option<Value>,
		invoice_number: Option<String>,
	) -> Self {
		Self {
			success:        false,
			message:        public_message(&error),
			data,
			transaction_id: None,
			invoice_number,
			timestamp:      OffsetDateTime::now_utc(),
			failure:        Some(error),
		}
	}
}

/// Message safe to show the shopper. Crypto and transport details stay
/// in the logs.
fn public_message(error: &PaymentError) -> String {
	match error {
		PaymentError::Configuration(_) |
		PaymentError::Validation(_) |
		PaymentError::Declined(_) => error.to_string(),
		PaymentError::Crypto | PaymentError::Upstream(_) => {
			error.category().to_string()
		}
	}
}
