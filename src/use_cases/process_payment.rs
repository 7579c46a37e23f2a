use std::sync::Arc;

use log::{error, info, warn};
use serde::Serialize;

use crate::domain::card::convert_date;
use crate::domain::errors::PaymentError;
use crate::domain::gateway::{BankGateway, BankRequest};
use crate::domain::invoice::resolve_invoice_number;
use crate::domain::merchant::MercantilConfig;
use crate::domain::payment::{Amount, CardData, PaymentInstrument, PaymentMethod};
use crate::use_cases::dto::{PaymentCommand, PaymentResult};
use crate::use_cases::mercantil_payload::{
	C2pPaymentInput, C2pPaymentPayload, CardPaymentInput, CardPaymentPayload,
};
use crate::use_cases::settlement::{BankExchange, settle};

const APPROVED_MESSAGE: &str = "Payment processed successfully";

/// Validated payment, ready to be turned into a bank payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPayment {
	pub amount:          Amount,
	pub customer_cedula: String,
	pub instrument:      PaymentInstrument,
}

#[derive(Clone)]
pub struct ProcessPaymentUseCase<G: BankGateway> {
	config:  Arc<MercantilConfig>,
	gateway: G,
}

impl<G: BankGateway> ProcessPaymentUseCase<G> {
	pub fn new(config: Arc<MercantilConfig>, gateway: G) -> Self {
		Self { config, gateway }
	}

	/// Runs a payment end to end. Every failure, including network and
	/// parsing errors, comes back as an unsuccessful [`PaymentResult`].
	pub async fn execute(&self, command: PaymentCommand) -> PaymentResult {
		let invoice_number =
			resolve_invoice_number(command.invoice_number.as_deref());

		let payment = match validate(&command) {
			Ok(payment) => payment,
			Err(e) => {
				warn!("Rejected payment {invoice_number}: {e}");
				return PaymentResult::failed(e, None, Some(invoice_number));
			}
		};

		let method = payment.instrument.method();
		info!("Processing {method} payment with invoice {invoice_number}");

		let exchange = match self.submit(&command, &payment, &invoice_number).await
		{
			Ok(exchange) => exchange,
			Err(e) => {
				error!("{method} payment {invoice_number} failed: {e}");
				return PaymentResult::failed(e, None, Some(invoice_number));
			}
		};

		let result = settle(exchange, APPROVED_MESSAGE, Some(invoice_number));
		if result.success {
			info!(
				"{method} payment approved, transaction {}",
				result.transaction_id.as_deref().unwrap_or("-")
			);
		} else {
			warn!("{method} payment not approved: {}", result.message);
		}
		result
	}

	async fn submit(
		&self,
		command: &PaymentCommand,
		payment: &ValidatedPayment,
		invoice_number: &str,
	) -> Result<BankExchange, PaymentError> {
		match &payment.instrument {
			PaymentInstrument::PagoMovil { phone, otp } => {
				let credentials = self.config.c2p()?;
				let url = credentials.endpoint()?;
				let payload = C2pPaymentPayload::build(
					credentials,
					&command.client,
					&C2pPaymentInput {
						amount:          payment.amount,
						customer_cedula: &payment.customer_cedula,
						customer_phone:  phone,
						otp,
						invoice_number,
					},
				)?;
				self.send(url, &credentials.client_id, &payload).await
			}
			PaymentInstrument::Debit { card, otp } => {
				let otp = Some(otp.as_str());
				self.send_card(command, payment, card, otp, invoice_number)
					.await
			}
			PaymentInstrument::Credit { card } => {
				self.send_card(command, payment, card, None, invoice_number)
					.await
			}
		}
	}

	async fn send_card(
		&self,
		command: &PaymentCommand,
		payment: &ValidatedPayment,
		card: &CardData,
		otp: Option<&str>,
		invoice_number: &str,
	) -> Result<BankExchange, PaymentError> {
		let credentials = self.config.cards()?;
		let url = credentials.pay_endpoint()?;
		let payload = CardPaymentPayload::build(
			credentials,
			&command.client,
			&CardPaymentInput {
				method:          payment.instrument.method(),
				amount:          payment.amount,
				customer_cedula: &payment.customer_cedula,
				card,
				otp,
				invoice_number,
			},
		)?;
		self.send(url, &credentials.client_id, &payload).await
	}

	async fn send<P: Serialize>(
		&self,
		url: &str,
		client_id: &str,
		payload: &P,
	) -> Result<BankExchange, PaymentError> {
		let body = serde_json::to_value(payload).map_err(|e| {
			error!("Failed to serialize Mercantil payload: {e}");
			PaymentError::Upstream("Could not build bank request".to_string())
		})?;

		let reply = self
			.gateway
			.send(BankRequest {
				url:       url.to_string(),
				client_id: client_id.to_string(),
				body,
			})
			.await
			.map_err(|e| PaymentError::Upstream(e.to_string()))?;

		Ok(BankExchange::from(reply))
	}
}

/// Checks the generic fields first, then the ones the method requires.
pub fn validate(command: &PaymentCommand) -> Result<ValidatedPayment, PaymentError> {
	let method: PaymentMethod = required(&command.payment_method, "paymentMethod")?
		.parse()?;

	let amount = match &command.amount {
		Some(value) if !value.is_null() => Amount::from_json(value)?,
		_ => return Err(missing("amount")),
	};

	let customer_cedula =
		required(&command.customer_cedula, "customerCedula")?.to_string();

	let instrument = match method {
		PaymentMethod::PagoMovil => PaymentInstrument::PagoMovil {
			phone: required(&command.customer_phone, "customerPhone")?.to_string(),
			otp:   required(&command.otp_code, "otpCode")?.to_string(),
		},
		PaymentMethod::Debit => PaymentInstrument::Debit {
			card: card_data(command)?,
			otp:  required(&command.otp_code, "otpCode")?.to_string(),
		},
		PaymentMethod::Credit => PaymentInstrument::Credit {
			card: card_data(command)?,
		},
	};

	Ok(ValidatedPayment {
		amount,
		customer_cedula,
		instrument,
	})
}

fn card_data(command: &PaymentCommand) -> Result<CardData, PaymentError> {
	let number = required(&command.card_number, "cardNumber")?;
	let expiry = required(&command.expiry_date, "expiryDate")?;
	let cvv = required(&command.cvv, "cvv")?;

	let expiry = convert_date(expiry).unwrap_or_else(|e| {
		warn!("{e}. Sending expiry date unchanged.");
		expiry.to_string()
	});

	Ok(CardData {
		number: number.to_string(),
		expiry,
		cvv:    cvv.to_string(),
	})
}

pub(crate) fn required<'a>(
	value: &'a Option<String>,
	field: &str,
) -> Result<&'a str, PaymentError> {
	value
		.as_deref()
		.map(str::trim)
		.filter(|v| !v.is_empty())
		.ok_or_else(|| missing(field))
}

fn missing(field: &str) -> PaymentError {
	PaymentError::Validation(format!("Missing required field: {field}"))
}
