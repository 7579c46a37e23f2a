use std::sync::Arc;

use async_trait::async_trait;
use derive_more::derive::{Display, Error};
use serde_json::Value;

/// Outbound call to one of the Mercantil endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct BankRequest {
	pub url:       String,
	pub client_id: String,
	pub body:      Value,
}

/// Raw bank answer. The body is kept as text so an unparseable reply can
/// still be reported.
#[derive(Debug, Clone, PartialEq)]
pub struct BankReply {
	pub status: u16,
	pub body:   String,
}

impl BankReply {
	pub fn json(&self) -> Option<Value> {
		serde_json::from_str(&self.body).ok()
	}
}

#[derive(Debug, Display, Error)]
pub enum GatewayError {
	#[display("Bank request timed out")]
	Timeout,
	#[display("Could not reach the bank: {_0}")]
	Connection(#[error(not(source))] String),
	#[display("Bank request failed: {_0}")]
	Request(#[error(not(source))] String),
}

#[async_trait]
pub trait BankGateway: Send + Sync + 'static {
	async fn send(&self, request: BankRequest) -> Result<BankReply, GatewayError>;
}

/// Gateway handle shared between the web workers.
pub type SharedGateway = Arc<dyn BankGateway>;

#[async_trait]
impl<T: BankGateway + ?Sized> BankGateway for Arc<T> {
	async fn send(&self, request: BankRequest) -> Result<BankReply, GatewayError> {
		(**self).send(request).await
	}
}
