use std::sync::Arc;

use indigo_payments::domain::errors::PaymentError;
use indigo_payments::domain::merchant::MercantilConfig;
use indigo_payments::infrastructure::crypto::field_cipher::encrypt;
use indigo_payments::use_cases::dto::PaymentCommand;
use indigo_payments::use_cases::process_payment::ProcessPaymentUseCase;
use serde_json::json;

mod support;

use crate::support::mercantil::{
	C2P_KEY, C2P_URL, CARDS_KEY, CARDS_PAY_URL, client, full_config,
};
use crate::support::stub_gateway::StubGateway;

fn pago_movil_command() -> PaymentCommand {
	PaymentCommand {
		payment_method:  Some("pago-movil".to_string()),
		amount:          Some(json!("150.00")),
		customer_cedula: Some("V18366876".to_string()),
		customer_phone:  Some("584241513063".to_string()),
		otp_code:        Some("00001111".to_string()),
		card_number:     None,
		expiry_date:     None,
		cvv:             None,
		invoice_number:  None,
		client:          client(),
	}
}

fn card_command(method: &str) -> PaymentCommand {
	PaymentCommand {
		payment_method:  Some(method.to_string()),
		amount:          Some(json!(75.25)),
		customer_cedula: Some("V18366876".to_string()),
		customer_phone:  None,
		otp_code:        Some("12345678".to_string()),
		card_number:     Some("501878200066287386".to_string()),
		expiry_date:     Some("1227".to_string()),
		cvv:             Some("123".to_string()),
		invoice_number:  Some("INV-2001".to_string()),
		client:          client(),
	}
}

#[tokio::test]
async fn test_pago_movil_payment_success() {
	let gateway = StubGateway::replying(
		200,
		json!({ "infoMsg": { "guId": "abc123" } }),
	);
	let use_case =
		ProcessPaymentUseCase::new(Arc::new(full_config()), gateway.clone());

	let result = use_case.execute(pago_movil_command()).await;

	assert!(result.success);
	assert_eq!(result.transaction_id.as_deref(), Some("abc123"));
	let invoice = result.invoice_number.unwrap();
	assert_eq!(invoice.len(), 6);
	assert!(invoice.chars().all(|c| c.is_ascii_digit()));

	let requests = gateway.requests();
	assert_eq!(requests.len(), 1);
	assert_eq!(requests[0].url, C2P_URL);
	assert_eq!(requests[0].client_id, "c2p-client-id");

	let trx = &requests[0].body["transaction_c2p"];
	assert_eq!(trx["amount"], json!(150.0));
	assert_eq!(trx["invoice_number"], json!(invoice));
	assert_eq!(
		trx["destination_mobile_number"],
		json!(encrypt("584241513063", C2P_KEY).unwrap())
	);
	assert_eq!(requests[0].body["client_identify"]["ipaddress"], json!("190.202.1.10"));
}

#[tokio::test]
async fn test_pago_movil_missing_otp_fails_before_network_call() {
	let gateway = StubGateway::replying(200, json!({ "infoMsg": { "guId": "x" } }));
	let use_case =
		ProcessPaymentUseCase::new(Arc::new(full_config()), gateway.clone());

	let mut command = pago_movil_command();
	command.otp_code = None;

	let result = use_case.execute(command).await;

	assert!(!result.success);
	assert!(matches!(result.failure, Some(PaymentError::Validation(_))));
	assert!(gateway.requests().is_empty());
}

#[tokio::test]
async fn test_debit_payment_sends_card_payload() {
	let gateway = StubGateway::replying(
		200,
		json!({
			"transaction_response": {
				"trx_status": "approved",
				"payment_reference": "30012345"
			}
		}),
	);
	let use_case =
		ProcessPaymentUseCase::new(Arc::new(full_config()), gateway.clone());

	let result = use_case.execute(card_command("debito")).await;

	assert!(result.success);
	assert_eq!(result.transaction_id.as_deref(), Some("30012345"));
	assert_eq!(result.invoice_number.as_deref(), Some("INV-2001"));

	let requests = gateway.requests();
	assert_eq!(requests[0].url, CARDS_PAY_URL);
	assert_eq!(requests[0].client_id, "cards-client-id");

	let trx = &requests[0].body["transaction"];
	assert_eq!(trx["payment_method"], json!("tdd"));
	assert_eq!(trx["expiration_date"], json!("2027/12"));
	assert_eq!(trx["cvv"], json!(encrypt("123", CARDS_KEY).unwrap()));
	assert_eq!(trx["twofactor_auth"], json!(encrypt("12345678", CARDS_KEY).unwrap()));
	assert_eq!(trx["account_type"], json!("CC"));
}

#[tokio::test]
async fn test_credit_payment_declined() {
	let gateway = StubGateway::replying(
		200,
		json!({ "transaction_response": { "trx_status": "declined" } }),
	);
	let use_case =
		ProcessPaymentUseCase::new(Arc::new(full_config()), gateway.clone());

	let result = use_case.execute(card_command("credito")).await;

	assert!(!result.success);
	assert!(matches!(result.failure, Some(PaymentError::Declined(_))));
	assert!(result.data.is_some());

	let trx = &gateway.requests()[0].body["transaction"];
	assert_eq!(trx["payment_method"], json!("tdc"));
	assert!(trx.get("twofactor_auth").is_none());
}

#[tokio::test]
async fn test_disabled_family_is_configuration_failure() {
	let gateway = StubGateway::replying(200, json!({}));
	let config = MercantilConfig {
		c2p:   None,
		cards: full_config().cards,
	};
	let use_case = ProcessPaymentUseCase::new(Arc::new(config), gateway.clone());

	let result = use_case.execute(pago_movil_command()).await;

	assert!(!result.success);
	assert!(matches!(result.failure, Some(PaymentError::Configuration(_))));
	assert!(gateway.requests().is_empty());
}

#[tokio::test]
async fn test_missing_endpoint_is_configuration_failure() {
	let gateway = StubGateway::replying(200, json!({}));
	let mut config = full_config();
	if let Some(cards) = config.cards.as_mut() {
		cards.pay_url = None;
	}
	let use_case = ProcessPaymentUseCase::new(Arc::new(config), gateway.clone());

	let result = use_case.execute(card_command("tdc")).await;

	assert!(matches!(result.failure, Some(PaymentError::Configuration(_))));
	assert!(gateway.requests().is_empty());
}

#[tokio::test]
async fn test_network_failure_becomes_failure_result() {
	let gateway = StubGateway::timing_out();
	let use_case =
		ProcessPaymentUseCase::new(Arc::new(full_config()), gateway.clone());

	let result = use_case.execute(pago_movil_command()).await;

	assert!(!result.success);
	assert_eq!(result.message, "Bank communication error");
	assert!(matches!(result.failure, Some(PaymentError::Upstream(_))));
	assert_eq!(gateway.requests().len(), 1);
}

#[tokio::test]
async fn test_error_status_overrides_guid() {
	let gateway = StubGateway::replying(
		200,
		json!({
			"status": { "errorCode": "99", "description": "OTP invalido" },
			"infoMsg": { "guId": "abc123" }
		}),
	);
	let use_case = ProcessPaymentUseCase::new(Arc::new(full_config()), gateway);

	let result = use_case.execute(pago_movil_command()).await;

	assert!(!result.success);
	assert_eq!(result.message, "OTP invalido");
	assert_eq!(result.transaction_id, None);
}

#[tokio::test]
async fn test_unparseable_bank_body_is_failure() {
	let gateway = StubGateway::replying_raw(200, "<html>gateway error</html>");
	let use_case = ProcessPaymentUseCase::new(Arc::new(full_config()), gateway);

	let result = use_case.execute(pago_movil_command()).await;

	assert!(!result.success);
	assert!(matches!(result.failure, Some(PaymentError::Upstream(_))));
}

#[tokio::test]
async fn test_error_list_text_overrides_guid() {
	let gateway = StubGateway::replying(
		200,
		json!({
			"error_list": "OTP invalido",
			"infoMsg": { "guId": "abc123" }
		}),
	);
	let use_case = ProcessPaymentUseCase::new(Arc::new(full_config()), gateway);

	let result = use_case.execute(pago_movil_command()).await;

	assert!(!result.success);
	assert_eq!(result.message, "OTP invalido");
	assert!(matches!(result.failure, Some(PaymentError::Declined(_))));
}

#[tokio::test]
async fn test_duplicated_status_code_spellings_are_declined() {
	let gateway = StubGateway::replying(
		200,
		json!({
			"status": { "errorCode": "99", "error_code": "99" },
			"transaction_response": { "trx_status": "approved" }
		}),
	);
	let use_case = ProcessPaymentUseCase::new(Arc::new(full_config()), gateway);

	let result = use_case.execute(card_command("tdc")).await;

	assert!(!result.success);
	assert_eq!(result.message, "99");
}
