pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;

use crate::adapters::web::card_auth_handler::card_auth;
use crate::adapters::web::errors::{ResponseOptions, json_error_handler};
use crate::adapters::web::health_handler::health;
use crate::adapters::web::payments_handler::payment;
use crate::domain::gateway::SharedGateway;
use crate::domain::merchant::MercantilConfig;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::gateway::mercantil_http_gateway::MercantilHttpGateway;
use crate::use_cases::process_payment::ProcessPaymentUseCase;
use crate::use_cases::request_card_auth::RequestCardAuthUseCase;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let mercantil = Arc::new(MercantilConfig::from_settings(&config));

	let http_gateway = MercantilHttpGateway::with_timeout(Duration::from_millis(
		config.http_timeout_ms,
	))
	.map_err(std::io::Error::other)?;
	let gateway: SharedGateway = Arc::new(http_gateway);

	let process_payment_use_case =
		ProcessPaymentUseCase::new(mercantil.clone(), gateway.clone());
	let card_auth_use_case =
		RequestCardAuthUseCase::new(mercantil.clone(), gateway.clone());
	let options = ResponseOptions {
		expose_error_details: config.is_development(),
	};

	info!(
		"Starting Actix-Web server on {}:{}...",
		config.server_host, config.server_port
	);
	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::from(mercantil.clone()))
			.app_data(web::Data::new(process_payment_use_case.clone()))
			.app_data(web::Data::new(card_auth_use_case.clone()))
			.app_data(web::Data::new(options))
			.app_data(web::JsonConfig::default().error_handler(json_error_handler))
			.service(payment)
			.service(card_auth)
			.service(health)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.server_host.as_str(), config.server_port))?
	.run()
	.await
}
