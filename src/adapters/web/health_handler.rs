use actix_web::{HttpResponse, Responder, get, web};

use crate::adapters::web::schema::HealthResponse;
use crate::domain::merchant::MercantilConfig;
use crate::domain::payment::PaymentFamily;

#[get("/health")]
pub async fn health(config: web::Data<MercantilConfig>) -> impl Responder {
	HttpResponse::Ok().json(HealthResponse {
		status:        "ok".to_string(),
		c2p_enabled:   config.is_enabled(PaymentFamily::C2p),
		cards_enabled: config.is_enabled(PaymentFamily::Cards),
	})
}
