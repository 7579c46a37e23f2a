use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::PaymentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentFamily {
	C2p,
	Cards,
}

impl fmt::Display for PaymentFamily {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PaymentFamily::C2p => write!(f, "C2P"),
			PaymentFamily::Cards => write!(f, "cards"),
		}
	}
}

/// Payment methods accepted by the Mercantil adapter.
///
/// Parsed from the storefront aliases: `pago-movil`/`c2p`,
/// `debito`/`tdd` and `credito`/`tdc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
	PagoMovil,
	Debit,
	Credit,
}

impl PaymentMethod {
	pub fn family(&self) -> PaymentFamily {
		match self {
			PaymentMethod::PagoMovil => PaymentFamily::C2p,
			PaymentMethod::Debit | PaymentMethod::Credit => PaymentFamily::Cards,
		}
	}

	/// Code the bank expects in `payment_method`.
	pub fn bank_code(&self) -> &'static str {
		match self {
			PaymentMethod::PagoMovil => "c2p",
			PaymentMethod::Debit => "tdd",
			PaymentMethod::Credit => "tdc",
		}
	}
}

impl fmt::Display for PaymentMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.bank_code())
	}
}

impl FromStr for PaymentMethod {
	type Err = PaymentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"pago-movil" | "c2p" => Ok(PaymentMethod::PagoMovil),
			"debito" | "tdd" => Ok(PaymentMethod::Debit),
			"credito" | "tdc" => Ok(PaymentMethod::Credit),
			other => Err(PaymentError::Validation(format!(
				"Unsupported payment method: {other}"
			))),
		}
	}
}

/// Positive amount in bolivars, serialized as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
	pub fn new(value: f64) -> Result<Self, PaymentError> {
		if value.is_finite() && value > 0.0 {
			Ok(Amount(value))
		} else {
			Err(PaymentError::Validation(
				"Amount must be a positive number".to_string(),
			))
		}
	}

	/// Accepts either a JSON number or a numeric string.
	pub fn from_json(value: &Value) -> Result<Self, PaymentError> {
		let parsed = match value {
			Value::Number(n) => n.as_f64(),
			Value::String(s) => s.trim().parse::<f64>().ok(),
			_ => None,
		};

		match parsed {
			Some(v) => Amount::new(v),
			None => Err(PaymentError::Validation(
				"Amount must be a valid number".to_string(),
			)),
		}
	}

	pub fn value(&self) -> f64 {
		self.0
	}
}

/// Card data after validation. The expiry is already normalized when it
/// had a recognised shape.
#[derive(Debug, Clone, PartialEq)]
pub struct CardData {
	pub number: String,
	pub expiry: String,
	pub cvv:    String,
}

/// Validated, method-specific part of a payment.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentInstrument {
	PagoMovil { phone: String, otp: String },
	Debit { card: CardData, otp: String },
	Credit { card: CardData },
}

impl PaymentInstrument {
	pub fn method(&self) -> PaymentMethod {
		match self {
			PaymentInstrument::PagoMovil { .. } => PaymentMethod::PagoMovil,
			PaymentInstrument::Debit { .. } => PaymentMethod::Debit,
			PaymentInstrument::Credit { .. } => PaymentMethod::Credit,
		}
	}
}
