use derive_more::derive::{Display, Error};

/// Failure categories of a payment attempt.
///
/// None of them escape the use cases: they are folded into a
/// [`PaymentResult`](crate::use_cases::dto::PaymentResult).
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum PaymentError {
	#[display("{_0}")]
	Configuration(#[error(not(source))] String),
	#[display("{_0}")]
	Validation(#[error(not(source))] String),
	#[display("Error encrypting data")]
	Crypto,
	#[display("{_0}")]
	Upstream(#[error(not(source))] String),
	#[display("{_0}")]
	Declined(#[error(not(source))] String),
}

impl PaymentError {
	/// Generic text that is safe to return to clients in production.
	pub fn category(&self) -> &'static str {
		match self {
			PaymentError::Configuration(_) => "Payment method not available",
			PaymentError::Validation(_) => "Invalid payment data",
			PaymentError::Crypto => "Error encrypting data",
			PaymentError::Upstream(_) => "Bank communication error",
			PaymentError::Declined(_) => "Payment declined",
		}
	}
}
