use std::sync::Arc;

use log::{error, info, warn};

use crate::domain::errors::PaymentError;
use crate::domain::gateway::{BankGateway, BankRequest};
use crate::domain::merchant::MercantilConfig;
use crate::use_cases::dto::{CardAuthCommand, PaymentResult};
use crate::use_cases::mercantil_payload::CardAuthPayload;
use crate::use_cases::process_payment::required;
use crate::use_cases::settlement::{BankExchange, settle};

const AUTH_REQUESTED_MESSAGE: &str = "Authorization code requested";

/// Asks Mercantil to send the debit card OTP to the card holder.
#[derive(Clone)]
pub struct RequestCardAuthUseCase<G: BankGateway> {
	config:  Arc<MercantilConfig>,
	gateway: G,
}

impl<G: BankGateway> RequestCardAuthUseCase<G> {
	pub fn new(config: Arc<MercantilConfig>, gateway: G) -> Self {
		Self { config, gateway }
	}

	pub async fn execute(&self, command: CardAuthCommand) -> PaymentResult {
		match self.submit(&command).await {
			Ok(exchange) => {
				let result = settle(exchange, AUTH_REQUESTED_MESSAGE, None);
				if result.success {
					info!("Debit card authorization requested");
				} else {
					warn!("Debit card authorization refused: {}", result.message);
				}
				result
			}
			Err(e) => {
				error!("Debit card authorization failed: {e}");
				PaymentResult::failed(e, None, None)
			}
		}
	}

	async fn submit(
		&self,
		command: &CardAuthCommand,
	) -> Result<BankExchange, PaymentError> {
		let card_number = required(&command.card_number, "cardNumber")?;
		let customer_cedula =
			required(&command.customer_cedula, "customerCedula")?;

		let credentials = self.config.cards()?;
		let url = credentials.auth_endpoint()?;

		let payload = CardAuthPayload::build(
			credentials,
			&command.client,
			card_number,
			customer_cedula,
		)?;
		let body = serde_json::to_value(&payload).map_err(|e| {
			error!("Failed to serialize Mercantil auth payload: {e}");
			PaymentError::Upstream("Could not build bank request".to_string())
		})?;

		let reply = self
			.gateway
			.send(BankRequest {
				url:       url.to_string(),
				client_id: credentials.client_id.clone(),
				body,
			})
			.await
			.map_err(|e| PaymentError::Upstream(e.to_string()))?;

		Ok(BankExchange::from(reply))
	}
}
