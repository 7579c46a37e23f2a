use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, error};
use derive_more::derive::{Display, Error};
use log::warn;
use serde::Serialize;

use crate::domain::errors::PaymentError;

#[derive(Serialize)]
struct ErrorResponse {
	success:     bool,
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Request data is invalid.")]
	BadClientDataError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::BadClientDataError => "Bad request".to_string(),
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				success:     false,
				status_code: self.status_code().as_u16(),
				error:       self.name(),
				message:     self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadClientDataError => StatusCode::BAD_REQUEST,
		}
	}
}

/// Status of a failed payment. Encryption faults and failures without a
/// recorded kind are server errors.
pub fn failure_status(failure: Option<&PaymentError>) -> StatusCode {
	match failure {
		Some(
			PaymentError::Configuration(_) |
			PaymentError::Validation(_) |
			PaymentError::Upstream(_) |
			PaymentError::Declined(_),
		) => StatusCode::BAD_REQUEST,
		Some(PaymentError::Crypto) | None => StatusCode::INTERNAL_SERVER_ERROR,
	}
}

/// Turns malformed JSON bodies into the API error shape.
pub fn json_error_handler(
	err: JsonPayloadError,
	_req: &HttpRequest,
) -> actix_web::Error {
	warn!("Rejected malformed request body: {err}");
	ApiError::BadClientDataError.into()
}

/// How much failure detail responses may carry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResponseOptions {
	pub expose_error_details: bool,
}
