use crate::domain::errors::PaymentError;
use crate::domain::payment::PaymentFamily;

/// Identifiers shared by every Mercantil family.
#[derive(Debug, Clone, PartialEq)]
pub struct MerchantIdentity {
	pub integrator_id: i64,
	pub merchant_id:   i64,
	pub terminal_id:   String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct C2pCredentials {
	pub identity:       MerchantIdentity,
	pub encryption_key: String,
	pub client_id:      String,
	pub origin_phone:   String,
	pub api_url:        Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardCredentials {
	pub identity:       MerchantIdentity,
	pub encryption_key: String,
	pub client_id:      String,
	pub pay_url:        Option<String>,
	pub auth_url:       Option<String>,
}

/// Immutable Mercantil configuration, built once at startup and shared
/// read-only between requests. A `None` family stays disabled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MercantilConfig {
	pub c2p:   Option<C2pCredentials>,
	pub cards: Option<CardCredentials>,
}

impl MercantilConfig {
	pub fn is_enabled(&self, family: PaymentFamily) -> bool {
		match family {
			PaymentFamily::C2p => self.c2p.is_some(),
			PaymentFamily::Cards => self.cards.is_some(),
		}
	}

	pub fn c2p(&self) -> Result<&C2pCredentials, PaymentError> {
		self.c2p.as_ref().ok_or_else(|| disabled(PaymentFamily::C2p))
	}

	pub fn cards(&self) -> Result<&CardCredentials, PaymentError> {
		self.cards.as_ref().ok_or_else(|| disabled(PaymentFamily::Cards))
	}
}

impl C2pCredentials {
	pub fn endpoint(&self) -> Result<&str, PaymentError> {
		required_url(self.api_url.as_deref(), "C2P API URL")
	}
}

impl CardCredentials {
	pub fn pay_endpoint(&self) -> Result<&str, PaymentError> {
		required_url(self.pay_url.as_deref(), "cards API URL")
	}

	pub fn auth_endpoint(&self) -> Result<&str, PaymentError> {
		required_url(self.auth_url.as_deref(), "cards auth URL")
	}
}

fn disabled(family: PaymentFamily) -> PaymentError {
	PaymentError::Configuration(format!(
		"Mercantil {family} payments are not configured"
	))
}

fn required_url<'a>(
	url: Option<&'a str>,
	name: &str,
) -> Result<&'a str, PaymentError> {
	match url.map(str::trim) {
		Some(url) if !url.is_empty() => Ok(url),
		_ => Err(PaymentError::Configuration(format!(
			"Mercantil {name} is not configured"
		))),
	}
}
