pub mod card;
pub mod errors;
pub mod gateway;
pub mod invoice;
pub mod merchant;
pub mod payment;
pub mod provider_response;
