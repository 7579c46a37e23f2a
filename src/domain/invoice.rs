use rand::Rng;

const INVOICE_NUMBER_UPPER_BOUND: u32 = 1_000_000;

/// Random six digit invoice number. Not unique, collisions are accepted.
pub fn generate_invoice_number() -> String {
	let value = rand::thread_rng().gen_range(0..INVOICE_NUMBER_UPPER_BOUND);
	format_invoice_number(value)
}

pub fn format_invoice_number(value: u32) -> String {
	format!("{value:06}")
}

/// Keeps a caller supplied invoice number, generating one when blank.
pub fn resolve_invoice_number(provided: Option<&str>) -> String {
	match provided.map(str::trim) {
		Some(invoice) if !invoice.is_empty() => invoice.to_string(),
		_ => generate_invoice_number(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_invoice_number_zero_pads() {
		assert_eq!(format_invoice_number(42), "000042");
		assert_eq!(format_invoice_number(0), "000000");
		assert_eq!(format_invoice_number(999_999), "999999");
	}

	#[test]
	fn test_generate_invoice_number_is_six_digits() {
		for _ in 0..200 {
			let invoice = generate_invoice_number();
			assert_eq!(invoice.len(), 6);
			assert!(invoice.chars().all(|c| c.is_ascii_digit()));
		}
	}

	#[test]
	fn test_resolve_invoice_number_keeps_provided_value() {
		assert_eq!(resolve_invoice_number(Some("INV-77")), "INV-77");
		assert_eq!(resolve_invoice_number(Some("  ")).len(), 6);
		assert_eq!(resolve_invoice_number(None).len(), 6);
	}
}
