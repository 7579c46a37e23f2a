use actix_web::{HttpRequest, Responder, post, web};
use log::info;

use crate::adapters::web::client_info::client_context;
use crate::adapters::web::errors::ResponseOptions;
use crate::adapters::web::payments_handler::payment_response;
use crate::adapters::web::schema::CardAuthRequest;
use crate::domain::gateway::SharedGateway;
use crate::use_cases::request_card_auth::RequestCardAuthUseCase;

#[post("/payment/auth")]
pub async fn card_auth(
	req: HttpRequest,
	payload: web::Json<CardAuthRequest>,
	card_auth_use_case: web::Data<RequestCardAuthUseCase<SharedGateway>>,
	options: web::Data<ResponseOptions>,
) -> impl Responder {
	let client = client_context(&req);
	info!("Debit card authorization requested from {}", client.ip_address);

	let result = card_auth_use_case
		.execute(payload.into_inner().into_command(client))
		.await;

	payment_response(result, &options)
}
