use indigo_payments::domain::merchant::{
	C2pCredentials, CardCredentials, MercantilConfig, MerchantIdentity,
};
use indigo_payments::use_cases::dto::ClientContext;

pub const C2P_URL: &str = "https://bank.test/mercantil-banco/prod/v1/payment/c2p";
pub const CARDS_PAY_URL: &str =
	"https://bank.test/mercantil-banco/prod/v1/payment/pay";
pub const CARDS_AUTH_URL: &str =
	"https://bank.test/mercantil-banco/prod/v1/payment/getauth";
pub const C2P_KEY: &str = "A11103402525120190822HB01";
pub const CARDS_KEY: &str = "B22203402525120190822HB02";

fn identity(merchant_id: i64) -> MerchantIdentity {
	MerchantIdentity {
		integrator_id: 31,
		merchant_id,
		terminal_id:   "abcde".to_string(),
	}
}

pub fn c2p_credentials() -> C2pCredentials {
	C2pCredentials {
		identity:       identity(150332),
		encryption_key: C2P_KEY.to_string(),
		client_id:      "c2p-client-id".to_string(),
		origin_phone:   "584142591177".to_string(),
		api_url:        Some(C2P_URL.to_string()),
	}
}

pub fn card_credentials() -> CardCredentials {
	CardCredentials {
		identity:       identity(200284),
		encryption_key: CARDS_KEY.to_string(),
		client_id:      "cards-client-id".to_string(),
		pay_url:        Some(CARDS_PAY_URL.to_string()),
		auth_url:       Some(CARDS_AUTH_URL.to_string()),
	}
}

pub fn full_config() -> MercantilConfig {
	MercantilConfig {
		c2p:   Some(c2p_credentials()),
		cards: Some(card_credentials()),
	}
}

pub fn client() -> ClientContext {
	ClientContext {
		ip_address:    "190.202.1.10".to_string(),
		browser_agent: "Chrome 126.0.0".to_string(),
	}
}
