use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
	pub server_host:      String,
	pub server_port:      u16,
	pub server_keepalive: u64,
	pub http_timeout_ms:  u64,
	pub environment:      String,

	pub mercantil_integrator_id: Option<String>,
	pub mercantil_terminal_id:   Option<String>,

	pub mercantil_c2p_encryption_key: Option<String>,
	pub mercantil_c2p_merchant_id:    Option<String>,
	pub mercantil_c2p_client_id:      Option<String>,
	pub mercantil_c2p_origin_phone:   Option<String>,
	pub mercantil_c2p_api_url:        Option<String>,

	pub mercantil_cards_encryption_key: Option<String>,
	pub mercantil_cards_merchant_id:    Option<String>,
	pub mercantil_cards_client_id:      Option<String>,
	pub mercantil_cards_api_url:        Option<String>,
	pub mercantil_cards_auth_url:       Option<String>,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 9999)?
			.set_default("server_keepalive", 75)?
			.set_default("http_timeout_ms", 30_000)?
			.set_default("environment", "production")?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}

	/// Development mode exposes error details in API responses.
	pub fn is_development(&self) -> bool {
		self.environment.eq_ignore_ascii_case("development")
	}
}
