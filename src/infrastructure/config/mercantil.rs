use log::{error, info, warn};

use crate::domain::merchant::{
	C2pCredentials, CardCredentials, MercantilConfig, MerchantIdentity,
};
use crate::infrastructure::config::settings::Config;

impl MercantilConfig {
	/// Builds the Mercantil families from the loaded settings.
	///
	/// A family is enabled only when every one of its required values is
	/// present. Missing values disable the family instead of failing the
	/// process.
	pub fn from_settings(settings: &Config) -> Self {
		let c2p = c2p_credentials(settings);
		let cards = card_credentials(settings);

		match (&c2p, &cards) {
			(None, None) => {
				error!(
					"No Mercantil payment family is configured. C2P and card \
					 payments are disabled."
				);
			}
			_ => {
				info!(
					"Mercantil configured (C2P: {}, cards: {})",
					enabled_label(c2p.is_some()),
					enabled_label(cards.is_some())
				);
			}
		}

		MercantilConfig { c2p, cards }
	}
}

fn c2p_credentials(settings: &Config) -> Option<C2pCredentials> {
	let (
		Some(encryption_key),
		Some(merchant_id),
		Some(client_id),
		Some(origin_phone),
	) = (
		present(&settings.mercantil_c2p_encryption_key),
		present(&settings.mercantil_c2p_merchant_id),
		present(&settings.mercantil_c2p_client_id),
		present(&settings.mercantil_c2p_origin_phone),
	)
	else {
		warn!("Mercantil C2P variables incomplete, Pago Móvil disabled");
		return None;
	};

	let identity = merchant_identity(settings, merchant_id, "C2P")?;

	Some(C2pCredentials {
		identity,
		encryption_key: encryption_key.to_string(),
		client_id:      client_id.to_string(),
		origin_phone:   origin_phone.to_string(),
		api_url:        present(&settings.mercantil_c2p_api_url).map(str::to_string),
	})
}

fn card_credentials(settings: &Config) -> Option<CardCredentials> {
	let (Some(encryption_key), Some(merchant_id), Some(client_id)) = (
		present(&settings.mercantil_cards_encryption_key),
		present(&settings.mercantil_cards_merchant_id),
		present(&settings.mercantil_cards_client_id),
	) else {
		warn!("Mercantil card variables incomplete, card payments disabled");
		return None;
	};

	let identity = merchant_identity(settings, merchant_id, "cards")?;

	Some(CardCredentials {
		identity,
		encryption_key: encryption_key.to_string(),
		client_id:      client_id.to_string(),
		pay_url:        present(&settings.mercantil_cards_api_url).map(str::to_string),
		auth_url:       present(&settings.mercantil_cards_auth_url)
			.map(str::to_string),
	})
}

fn merchant_identity(
	settings: &Config,
	merchant_id: &str,
	family: &str,
) -> Option<MerchantIdentity> {
	let (Some(integrator_id), Some(terminal_id)) = (
		present(&settings.mercantil_integrator_id),
		present(&settings.mercantil_terminal_id),
	) else {
		warn!("Mercantil shared variables missing, {family} disabled");
		return None;
	};

	let (Ok(integrator_id), Ok(merchant_id)) =
		(integrator_id.parse::<i64>(), merchant_id.parse::<i64>())
	else {
		error!(
			"Mercantil {family} integrator or merchant id is not an integer, \
			 {family} disabled"
		);
		return None;
	};

	Some(MerchantIdentity {
		integrator_id,
		merchant_id,
		terminal_id: terminal_id.to_string(),
	})
}

fn present(value: &Option<String>) -> Option<&str> {
	value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn enabled_label(enabled: bool) -> &'static str {
	if enabled { "enabled" } else { "disabled" }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::domain::payment::PaymentFamily;

	fn base_settings() -> Config {
		Config {
			server_host:                    "0.0.0.0".to_string(),
			server_port:                    9999,
			server_keepalive:               75,
			http_timeout_ms:                30_000,
			environment:                    "production".to_string(),
			mercantil_integrator_id:        Some("31".to_string()),
			mercantil_terminal_id:          Some("abcde".to_string()),
			mercantil_c2p_encryption_key:   Some("A11103402525120190822HB01".to_string()),
			mercantil_c2p_merchant_id:      Some("150332".to_string()),
			mercantil_c2p_client_id:        Some("81188330-c768-46fe".to_string()),
			mercantil_c2p_origin_phone:     Some("584142591177".to_string()),
			mercantil_c2p_api_url:          Some("https://bank.test/c2p".to_string()),
			mercantil_cards_encryption_key: Some("card-key".to_string()),
			mercantil_cards_merchant_id:    Some("200284".to_string()),
			mercantil_cards_client_id:      Some("card-client".to_string()),
			mercantil_cards_api_url:        None,
			mercantil_cards_auth_url:       None,
		}
	}

	#[test]
	fn test_both_families_enabled() {
		let config = MercantilConfig::from_settings(&base_settings());

		let c2p = config.c2p().unwrap();
		assert_eq!(c2p.identity.integrator_id, 31);
		assert_eq!(c2p.identity.merchant_id, 150332);
		assert_eq!(c2p.origin_phone, "584142591177");

		let cards = config.cards().unwrap();
		assert_eq!(cards.identity.merchant_id, 200284);
		assert_eq!(cards.pay_url, None);
	}

	#[test]
	fn test_missing_family_variable_disables_only_that_family() {
		let mut settings = base_settings();
		settings.mercantil_c2p_origin_phone = Some("  ".to_string());

		let config = MercantilConfig::from_settings(&settings);

		assert!(!config.is_enabled(PaymentFamily::C2p));
		assert!(config.is_enabled(PaymentFamily::Cards));
	}

	#[test]
	fn test_missing_shared_variable_disables_both() {
		let mut settings = base_settings();
		settings.mercantil_terminal_id = None;

		let config = MercantilConfig::from_settings(&settings);

		assert_eq!(config, MercantilConfig::default());
	}

	#[test]
	fn test_non_numeric_merchant_id_disables_family() {
		let mut settings = base_settings();
		settings.mercantil_cards_merchant_id = Some("abc".to_string());

		let config = MercantilConfig::from_settings(&settings);

		assert!(config.is_enabled(PaymentFamily::C2p));
		assert!(!config.is_enabled(PaymentFamily::Cards));
	}
}
