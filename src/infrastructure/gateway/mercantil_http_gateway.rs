use std::time::Duration;

use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;

use crate::domain::gateway::{BankGateway, BankReply, BankRequest, GatewayError};

pub const CLIENT_ID_HEADER: &str = "X-IBM-Client-ID";

#[derive(Clone)]
pub struct MercantilHttpGateway {
	http_client: Client,
}

impl MercantilHttpGateway {
	pub fn new(http_client: Client) -> Self {
		Self { http_client }
	}

	pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
		let http_client = Client::builder().timeout(timeout).build()?;
		Ok(Self::new(http_client))
	}
}

#[async_trait]
impl BankGateway for MercantilHttpGateway {
	async fn send(&self, request: BankRequest) -> Result<BankReply, GatewayError> {
		let response = self
			.http_client
			.post(&request.url)
			.header(CLIENT_ID_HEADER, &request.client_id)
			.header(reqwest::header::ACCEPT, "application/json")
			.json(&request.body)
			.send()
			.await
			.map_err(|e| {
				error!("Mercantil request to {} failed: {e}", request.url);
				to_gateway_error(e)
			})?;

		let status = response.status();
		let body = response.text().await.map_err(|e| {
			error!("Failed to read Mercantil response body: {e}");
			to_gateway_error(e)
		})?;

		info!("Mercantil answered {} with status {}", request.url, status);

		Ok(BankReply {
			status: status.as_u16(),
			body,
		})
	}
}

fn to_gateway_error(e: reqwest::Error) -> GatewayError {
	if e.is_timeout() {
		GatewayError::Timeout
	} else if e.is_connect() {
		GatewayError::Connection(e.to_string())
	} else {
		GatewayError::Request(e.to_string())
	}
}
