use aes::Aes128;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockEncryptMut, KeyInit};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::error;
use sha2::{Digest, Sha256};

use crate::domain::errors::PaymentError;

type Aes128EcbEnc = ecb::Encryptor<Aes128>;

/// Encrypts a sensitive field the way the Mercantil API expects it.
///
/// The AES-128 key is the first half of the lowercase hex SHA-256 digest
/// of the merchant key, decoded back to bytes. The cipher runs in ECB
/// mode with PKCS#7 padding and the result is standard base64.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, PaymentError> {
	let key_bytes = derive_key(key)?;

	let cipher = Aes128EcbEnc::new_from_slice(&key_bytes).map_err(|e| {
		error!("Invalid AES key length: {e}");
		PaymentError::Crypto
	})?;

	let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

	Ok(STANDARD.encode(ciphertext))
}

fn derive_key(key: &str) -> Result<Vec<u8>, PaymentError> {
	let digest_hex = hex::encode(Sha256::digest(key.as_bytes()));
	let half = &digest_hex[..digest_hex.len() / 2];

	hex::decode(half).map_err(|e| {
		error!("Failed to decode derived key: {e}");
		PaymentError::Crypto
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_derive_key_takes_first_half_of_hex_digest() {
		let key = derive_key("A11103402525120190822HB01").unwrap();
		let full = Sha256::digest("A11103402525120190822HB01".as_bytes());

		assert_eq!(key.len(), 16);
		assert_eq!(key.as_slice(), &full[..16]);
	}

	#[test]
	fn test_encrypt_known_answer() {
		assert_eq!(
			encrypt("V18366876", "A11103402525120190822HB01").unwrap(),
			"lqXIA/GBI81FkM46sWf++g=="
		);
	}

	#[test]
	fn test_encrypt_is_deterministic() {
		let first = encrypt("V18366876", "merchant-key").unwrap();
		let second = encrypt("V18366876", "merchant-key").unwrap();

		assert_eq!(first, second);
	}

	#[test]
	fn test_encrypt_depends_on_key() {
		let first = encrypt("V18366876", "merchant-key").unwrap();
		let second = encrypt("V18366876", "other-key").unwrap();

		assert_ne!(first, second);
	}

	#[test]
	fn test_encrypt_pads_to_block_size() {
		let short = STANDARD.decode(encrypt("1234", "k").unwrap()).unwrap();
		let full_block =
			STANDARD.decode(encrypt("0123456789abcdef", "k").unwrap()).unwrap();

		assert_eq!(short.len(), 16);
		assert_eq!(full_block.len(), 32);
	}

	#[test]
	fn test_encrypt_empty_plaintext() {
		let encrypted = STANDARD.decode(encrypt("", "k").unwrap()).unwrap();
		assert_eq!(encrypted.len(), 16);
	}
}
