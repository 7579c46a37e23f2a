use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use indigo_payments::domain::gateway::{
	BankGateway, BankReply, BankRequest, GatewayError,
};
use serde_json::Value;

#[derive(Clone)]
enum Behaviour {
	Reply { status: u16, body: String },
	Timeout,
}

/// In-memory bank that records every request it receives.
#[derive(Clone)]
pub struct StubGateway {
	behaviour: Behaviour,
	requests:  Arc<Mutex<Vec<BankRequest>>>,
}

impl StubGateway {
	pub fn replying(status: u16, body: Value) -> Self {
		Self::replying_raw(status, &body.to_string())
	}

	pub fn replying_raw(status: u16, body: &str) -> Self {
		Self {
			behaviour: Behaviour::Reply {
				status,
				body: body.to_string(),
			},
			requests:  Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn timing_out() -> Self {
		Self {
			behaviour: Behaviour::Timeout,
			requests:  Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn requests(&self) -> Vec<BankRequest> {
		self.requests.lock().unwrap().clone()
	}
}

#[async_trait]
impl BankGateway for StubGateway {
	async fn send(&self, request: BankRequest) -> Result<BankReply, GatewayError> {
		self.requests.lock().unwrap().push(request);

		match &self.behaviour {
			Behaviour::Reply { status, body } => Ok(BankReply {
				status: *status,
				body:   body.clone(),
			}),
			Behaviour::Timeout => Err(GatewayError::Timeout),
		}
	}
}
