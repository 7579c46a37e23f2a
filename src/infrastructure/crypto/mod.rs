pub mod field_cipher;
