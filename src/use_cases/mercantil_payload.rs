//! Request bodies for the Mercantil endpoints.

use serde::Serialize;

use crate::domain::errors::PaymentError;
use crate::domain::merchant::{C2pCredentials, CardCredentials, MerchantIdentity};
use crate::domain::payment::{Amount, CardData, PaymentMethod};
use crate::infrastructure::crypto::field_cipher::encrypt;
use crate::use_cases::dto::ClientContext;

const CURRENCY: &str = "ves";
const DESTINATION_BANK_ID: u32 = 105;
const PURCHASE_TRX_TYPE: &str = "compra";
const AUTH_TRX_TYPE: &str = "solaut";
const DEVICE_MANUFACTURER: &str = "Samsung";
const DEBIT_ACCOUNT_TYPE: &str = "CC";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantIdentify {
	#[serde(rename = "integratorId")]
	pub integrator_id: i64,
	#[serde(rename = "merchantId")]
	pub merchant_id:   i64,
	#[serde(rename = "terminalId")]
	pub terminal_id:   String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mobile {
	pub manufacturer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientIdentify {
	pub ipaddress:     String,
	pub browser_agent: String,
	pub mobile:        Mobile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct C2pTransaction {
	pub amount:                    Amount,
	pub currency:                  String,
	pub destination_bank_id:       u32,
	pub destination_id:            String,
	pub destination_mobile_number: String,
	pub origin_mobile_number:      String,
	pub payment_reference:         String,
	pub trx_type:                  String,
	pub payment_method:            String,
	pub invoice_number:            String,
	pub twofactor_auth:            String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct C2pPaymentPayload {
	pub merchant_identify: MerchantIdentify,
	pub client_identify:   ClientIdentify,
	pub transaction_c2p:   C2pTransaction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardTransaction {
	pub trx_type:        String,
	pub payment_method:  String,
	pub card_number:     String,
	pub customer_id:     String,
	pub invoice_number:  String,
	pub expiration_date: String,
	pub cvv:             String,
	pub currency:        String,
	pub amount:          Amount,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub twofactor_auth:  Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account_type:    Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPaymentPayload {
	pub merchant_identify: MerchantIdentify,
	pub client_identify:   ClientIdentify,
	pub transaction:       CardTransaction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardAuthTransaction {
	pub trx_type:       String,
	pub payment_method: String,
	pub card_number:    String,
	pub customer_id:    String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardAuthPayload {
	pub merchant_identify:    MerchantIdentify,
	pub client_identify:      ClientIdentify,
	#[serde(rename = "transaction_authInfo")]
	pub transaction_auth_info: CardAuthTransaction,
}

pub struct C2pPaymentInput<'a> {
	pub amount:          Amount,
	pub customer_cedula: &'a str,
	pub customer_phone:  &'a str,
	pub otp:             &'a str,
	pub invoice_number:  &'a str,
}

pub struct CardPaymentInput<'a> {
	pub method:          PaymentMethod,
	pub amount:          Amount,
	pub customer_cedula: &'a str,
	pub card:            &'a CardData,
	pub otp:             Option<&'a str>,
	pub invoice_number:  &'a str,
}

impl From<&MerchantIdentity> for MerchantIdentify {
	fn from(identity: &MerchantIdentity) -> Self {
		Self {
			integrator_id: identity.integrator_id,
			merchant_id:   identity.merchant_id,
			terminal_id:   identity.terminal_id.clone(),
		}
	}
}

impl From<&ClientContext> for ClientIdentify {
	fn from(client: &ClientContext) -> Self {
		Self {
			ipaddress:     client.ip_address.clone(),
			browser_agent: client.browser_agent.clone(),
			mobile:        Mobile {
				manufacturer: DEVICE_MANUFACTURER.to_string(),
			},
		}
	}
}

impl C2pPaymentPayload {
	pub fn build(
		credentials: &C2pCredentials,
		client: &ClientContext,
		input: &C2pPaymentInput<'_>,
	) -> Result<Self, PaymentError> {
		let key = credentials.encryption_key.as_str();

		Ok(Self {
			merchant_identify: MerchantIdentify::from(&credentials.identity),
			client_identify:   ClientIdentify::from(client),
			transaction_c2p:   C2pTransaction {
				amount:                    input.amount,
				currency:                  CURRENCY.to_string(),
				destination_bank_id:       DESTINATION_BANK_ID,
				destination_id:            encrypt(input.customer_cedula, key)?,
				destination_mobile_number: encrypt(input.customer_phone, key)?,
				origin_mobile_number:      encrypt(&credentials.origin_phone, key)?,
				payment_reference:         String::new(),
				trx_type:                  PURCHASE_TRX_TYPE.to_string(),
				payment_method:            PaymentMethod::PagoMovil
					.bank_code()
					.to_string(),
				invoice_number:            input.invoice_number.to_string(),
				twofactor_auth:            encrypt(input.otp, key)?,
			},
		})
	}
}

impl CardPaymentPayload {
	pub fn build(
		credentials: &CardCredentials,
		client: &ClientContext,
		input: &CardPaymentInput<'_>,
	) -> Result<Self, PaymentError> {
		let key = credentials.encryption_key.as_str();

		let (twofactor_auth, account_type) = match input.method {
			PaymentMethod::Debit => {
				let otp = input.otp.ok_or_else(|| {
					PaymentError::Validation(
						"OTP code is required for debit card payments".to_string(),
					)
				})?;
				(Some(encrypt(otp, key)?), Some(DEBIT_ACCOUNT_TYPE.to_string()))
			}
			PaymentMethod::Credit | PaymentMethod::PagoMovil => (None, None),
		};

		Ok(Self {
			merchant_identify: MerchantIdentify::from(&credentials.identity),
			client_identify:   ClientIdentify::from(client),
			transaction:       CardTransaction {
				trx_type:        PURCHASE_TRX_TYPE.to_string(),
				payment_method:  input.method.bank_code().to_string(),
				card_number:     input.card.number.clone(),
				customer_id:     input.customer_cedula.to_string(),
				invoice_number:  input.invoice_number.to_string(),
				expiration_date: input.card.expiry.clone(),
				cvv:             encrypt(&input.card.cvv, key)?,
				currency:        CURRENCY.to_string(),
				amount:          input.amount,
				twofactor_auth,
				account_type,
			},
		})
	}
}

impl CardAuthPayload {
	pub fn build(
		credentials: &CardCredentials,
		client: &ClientContext,
		card_number: &str,
		customer_cedula: &str,
	) -> Result<Self, PaymentError> {
		Ok(Self {
			merchant_identify:     MerchantIdentify::from(&credentials.identity),
			client_identify:       ClientIdentify::from(client),
			transaction_auth_info: CardAuthTransaction {
				trx_type:       AUTH_TRX_TYPE.to_string(),
				payment_method: PaymentMethod::Debit.bank_code().to_string(),
				card_number:    card_number.to_string(),
				customer_id:    encrypt(
					customer_cedula,
					&credentials.encryption_key,
				)?,
			},
		})
	}
}
