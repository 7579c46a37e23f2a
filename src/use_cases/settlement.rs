use log::error;
use serde_json::Value;

use crate::domain::errors::PaymentError;
use crate::domain::gateway::BankReply;
use crate::domain::provider_response::ProviderResponse;
use crate::use_cases::dto::PaymentResult;

/// A bank answer with its body parsed, when it was JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct BankExchange {
	pub status: u16,
	pub body:   Option<Value>,
}

impl BankExchange {
	pub fn is_http_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

impl From<BankReply> for BankExchange {
	fn from(reply: BankReply) -> Self {
		Self {
			status: reply.status,
			body:   reply.json(),
		}
	}
}

/// Turns a bank exchange into a payment result.
///
/// Non-2xx answers and unparseable bodies are failures whatever they
/// contain. Otherwise the body is classified.
pub fn settle(
	exchange: BankExchange,
	approved_message: &str,
	invoice_number: Option<String>,
) -> PaymentResult {
	let http_success = exchange.is_http_success();
	let status = exchange.status;

	let Some(body) = exchange.body else {
		error!("Mercantil answered {status} with a non JSON body");
		return PaymentResult::failed(
			PaymentError::Upstream(format!(
				"Invalid response from bank (status {status})"
			)),
			None,
			invoice_number,
		);
	};

	let outcome = ProviderResponse::from_value(&body).outcome();

	if !http_success {
		let reason = outcome
			.failure_reason()
			.unwrap_or_else(|| format!("Bank returned status {status}"));
		error!("Mercantil rejected the request: {reason}");
		return PaymentResult::failed(
			PaymentError::Upstream(reason),
			Some(body),
			invoice_number,
		);
	}

	if outcome.is_success() {
		return PaymentResult::approved(
			approved_message,
			body,
			outcome.transaction_id,
			invoice_number,
		);
	}

	let reason = outcome
		.failure_reason()
		.unwrap_or_else(|| "Payment was not approved by the bank".to_string());

	PaymentResult::failed(PaymentError::Declined(reason), Some(body), invoice_number)
}
