use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, post, web};
use log::info;

use crate::adapters::web::client_info::client_context;
use crate::adapters::web::errors::{ResponseOptions, failure_status};
use crate::adapters::web::schema::{PaymentRequest, PaymentResponse};
use crate::domain::gateway::SharedGateway;
use crate::use_cases::dto::PaymentResult;
use crate::use_cases::process_payment::ProcessPaymentUseCase;

#[post("/payment")]
pub async fn payment(
	req: HttpRequest,
	payload: web::Json<PaymentRequest>,
	process_payment_use_case: web::Data<ProcessPaymentUseCase<SharedGateway>>,
	options: web::Data<ResponseOptions>,
) -> impl Responder {
	let client = client_context(&req);
	info!("Payment request received from {}", client.ip_address);

	let command = payload.into_inner().into_command(client);
	let result = process_payment_use_case.execute(command).await;

	payment_response(result, &options)
}

/// Maps a payment result to `200`, or to the status of its failure kind.
pub(crate) fn payment_response(
	result: PaymentResult,
	options: &ResponseOptions,
) -> HttpResponse {
	let status = if result.success {
		StatusCode::OK
	} else {
		failure_status(result.failure.as_ref())
	};

	HttpResponse::build(status).json(PaymentResponse::from_result(
		result,
		options.expose_error_details,
	))
}
