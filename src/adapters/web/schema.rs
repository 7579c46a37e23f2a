use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::use_cases::dto::{
	CardAuthCommand, ClientContext, PaymentCommand, PaymentResult,
};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
	#[serde(default, deserialize_with = "string_or_number")]
	pub payment_method:  Option<String>,
	#[serde(default)]
	pub amount:          Option<Value>,
	#[serde(default, deserialize_with = "string_or_number")]
	pub customer_cedula: Option<String>,
	#[serde(default, deserialize_with = "string_or_number")]
	pub customer_phone:  Option<String>,
	#[serde(default, deserialize_with = "string_or_number")]
	pub otp_code:        Option<String>,
	#[serde(default, deserialize_with = "string_or_number")]
	pub card_number:     Option<String>,
	#[serde(default, deserialize_with = "string_or_number")]
	pub expiry_date:     Option<String>,
	#[serde(default, deserialize_with = "string_or_number")]
	pub cvv:             Option<String>,
	#[serde(default, deserialize_with = "string_or_number")]
	pub invoice_number:  Option<String>,
}

impl PaymentRequest {
	pub fn into_command(self, client: ClientContext) -> PaymentCommand {
		PaymentCommand {
			payment_method:  self.payment_method,
			amount:          self.amount,
			customer_cedula: self.customer_cedula,
			customer_phone:  self.customer_phone,
			otp_code:        self.otp_code,
			card_number:     self.card_number,
			expiry_date:     self.expiry_date,
			cvv:             self.cvv,
			invoice_number:  self.invoice_number,
			client,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardAuthRequest {
	#[serde(default, deserialize_with = "string_or_number")]
	pub card_number:     Option<String>,
	#[serde(default, deserialize_with = "string_or_number")]
	pub customer_cedula: Option<String>,
}

impl CardAuthRequest {
	pub fn into_command(self, client: ClientContext) -> CardAuthCommand {
		CardAuthCommand {
			card_number:     self.card_number,
			customer_cedula: self.customer_cedula,
			client,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
	pub success:        bool,
	pub message:        String,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub error:          Option<String>,
	pub data:           Option<Value>,
	pub transaction_id: Option<String>,
	pub invoice_number: Option<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp:      OffsetDateTime,
}

impl PaymentResponse {
	/// Failure details are only exposed when `expose_error_details` is set.
	pub fn from_result(result: PaymentResult, expose_error_details: bool) -> Self {
		let error = result.failure.as_ref().map(|failure| {
			if expose_error_details {
				failure.to_string()
			} else {
				failure.category().to_string()
			}
		});

		Self {
			success:        result.success,
			message:        result.message,
			error,
			data:           result.data,
			transaction_id: result.transaction_id,
			invoice_number: result.invoice_number,
			timestamp:      result.timestamp,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
	pub status:        String,
	pub c2p_enabled:   bool,
	pub cards_enabled: bool,
}

/// Storefront clients send ids and codes either as strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Option::<Value>::deserialize(deserializer)? {
		Some(Value::String(s)) => Some(s),
		Some(Value::Number(n)) => Some(n.to_string()),
		_ => None,
	})
}
