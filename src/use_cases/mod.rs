pub mod dto;
pub mod mercantil_payload;
pub mod process_payment;
pub mod request_card_auth;
pub mod settlement;
