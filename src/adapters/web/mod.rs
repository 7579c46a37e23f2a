pub mod card_auth_handler;
pub mod client_info;
pub mod errors;
pub mod health_handler;
pub mod payments_handler;
pub mod schema;
