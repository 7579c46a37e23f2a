use crate::domain::errors::PaymentError;

/// Normalizes a card expiry (`MMYY` or `MM/YY`) into the `20YY/MM`
/// format the bank expects.
pub fn convert_date(input: &str) -> Result<String, PaymentError> {
	let (month, year) = match input.split_once('/') {
		Some((month, year)) => (month, year),
		None if input.len() == 4 && input.is_char_boundary(2) => {
			input.split_at(2)
		}
		None => return Err(invalid_expiry(input)),
	};

	if month.len() != 2 ||
		year.len() != 2 ||
		!month.chars().all(|c| c.is_ascii_digit()) ||
		!year.chars().all(|c| c.is_ascii_digit())
	{
		return Err(invalid_expiry(input));
	}

	Ok(format!("20{year}/{month}"))
}

fn invalid_expiry(input: &str) -> PaymentError {
	PaymentError::Validation(format!(
		"Invalid expiry date format: expected MMYY or MM/YY, got {} chars",
		input.len()
	))
}
