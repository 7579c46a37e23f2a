pub mod mercantil;
pub mod settings;
