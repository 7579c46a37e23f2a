//! Bank response model and success classification.
//!
//! Mercantil answers each family with a differently shaped JSON body:
//! card payments carry `transaction_response`, Pago Móvil carries
//! `infoMsg`, the card auth call carries `authentication_info`, and
//! failures show up either as an `error_list` or as a `status` object.
//! Every section is read on its own into a typed variant, the sections
//! are then folded into a canonical [`PaymentOutcome`], and [`classify`]
//! applies the precedence rules on that outcome.
//!
//! Fields are read straight from the JSON value, one spelling at a time.
//! A mistyped or duplicated field never hides the rest of its section.

use serde_json::Value;

const FAULT_CODE_KEYS: &[&str] = &["error_code", "errorCode", "code"];
const FAULT_TEXT_KEYS: &[&str] = &["description", "message"];
const STATUS_CODE_KEYS: &[&str] = &["errorCode", "error_code"];
const STATUS_TECHNICAL_KEYS: &[&str] = &["technicalError", "technical_error"];
const ZERO_CODE_KEYS: &[&str] = &[
	"responseCode",
	"response_code",
	"returnCode",
	"return_code",
	"code",
];

/// One entry of an `error_list` or the coded part of a `status` object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderFault {
	pub error_code:  Option<Value>,
	pub description: Option<Value>,
}

impl ProviderFault {
	fn from_entry(entry: &Value) -> Self {
		if !entry.is_object() {
			return Self {
				error_code:  None,
				description: Some(entry.clone()),
			};
		}

		Self {
			error_code:  first_present(entry, FAULT_CODE_KEYS).cloned(),
			description: first_present(entry, FAULT_TEXT_KEYS).cloned(),
		}
	}

	pub fn message(&self) -> Option<String> {
		self.description
			.as_ref()
			.and_then(value_text)
			.or_else(|| self.error_code.as_ref().and_then(value_text))
	}
}

/// The `status` member: a plain marker string or a detail object.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusSection {
	Text(String),
	Detail(StatusDetail),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusDetail {
	pub error_code:      Option<Value>,
	pub technical_error: Option<Value>,
	pub description:     Option<Value>,
}

impl StatusDetail {
	fn from_section(section: &Value) -> Self {
		Self {
			error_code:      first_present(section, STATUS_CODE_KEYS).cloned(),
			technical_error: first_present(section, STATUS_TECHNICAL_KEYS)
				.cloned(),
			description:     first_present(section, FAULT_TEXT_KEYS).cloned(),
		}
	}

	fn fault(&self) -> Option<ProviderFault> {
		if self.error_code.is_none() && self.technical_error.is_none() {
			return None;
		}

		Some(ProviderFault {
			error_code:  self.error_code.clone(),
			description: self
				.description
				.clone()
				.or_else(|| self.technical_error.clone()),
		})
	}
}

/// Card payment answer (`transaction_response`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardTransactionResponse {
	pub trx_status:          Option<Value>,
	pub trx_internal_status: Option<Value>,
	pub payment_reference:   Option<Value>,
}

impl CardTransactionResponse {
	fn from_section(section: &Value) -> Self {
		Self {
			trx_status:          section.get("trx_status").cloned(),
			trx_internal_status: section.get("trx_internal_status").cloned(),
			payment_reference:   section.get("payment_reference").cloned(),
		}
	}
}

/// Pago Móvil answer (`infoMsg`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagoMovilInfo {
	pub gu_id: Option<Value>,
}

impl PagoMovilInfo {
	fn from_section(section: &Value) -> Self {
		Self {
			gu_id: section.get("guId").cloned(),
		}
	}
}

/// Card auth answer (`authentication_info`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardAuthInfo {
	pub trx_status: Option<Value>,
}

impl CardAuthInfo {
	fn from_section(section: &Value) -> Self {
		Self {
			trx_status: section.get("trx_status").cloned(),
		}
	}
}

/// Top level markers some endpoints use instead of a typed section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericMarkers {
	pub response_codes: Vec<Value>,
	pub reference:      Option<Value>,
}

impl GenericMarkers {
	fn from_body(body: &Value) -> Self {
		if !body.is_object() {
			return Self::default();
		}

		Self {
			response_codes: ZERO_CODE_KEYS
				.iter()
				.filter_map(|key| body.get(*key))
				.cloned()
				.collect(),
			reference:      body.get("reference").cloned(),
		}
	}
}

/// A bank response split into its typed sections. Sections that are
/// missing or not objects are left empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResponse {
	pub error_list:           Vec<ProviderFault>,
	pub status:               Option<StatusSection>,
	pub transaction_response: Option<CardTransactionResponse>,
	pub info_msg:             Option<PagoMovilInfo>,
	pub authentication_info:  Option<CardAuthInfo>,
	pub markers:              GenericMarkers,
}

impl ProviderResponse {
	pub fn from_value(value: &Value) -> Self {
		Self {
			error_list:           error_list(value.get("error_list")),
			status:               status_section(value.get("status")),
			transaction_response: section(value, "transaction_response")
				.map(CardTransactionResponse::from_section),
			info_msg:             section(value, "infoMsg")
				.map(PagoMovilInfo::from_section),
			authentication_info:  section(value, "authentication_info")
				.map(CardAuthInfo::from_section),
			markers:              GenericMarkers::from_body(value),
		}
	}

	pub fn outcome(&self) -> PaymentOutcome {
		PaymentOutcome::from(self)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
	CardApproved,
	CardInternalStatusOk,
	PagoMovilTransaction,
	CardAuthApproved,
	StatusSuccess,
	ZeroResponseCode,
}

/// Canonical view of any bank response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentOutcome {
	pub error_list:     Vec<ProviderFault>,
	pub status_fault:   Option<ProviderFault>,
	pub approvals:      Vec<Approval>,
	pub transaction_id: Option<String>,
}

impl PaymentOutcome {
	pub fn is_success(&self) -> bool {
		classify(self)
	}

	/// Most specific failure text the bank gave, if any.
	pub fn failure_reason(&self) -> Option<String> {
		self.error_list
			.iter()
			.find_map(ProviderFault::message)
			.or_else(|| self.status_fault.as_ref().and_then(ProviderFault::message))
	}
}

impl From<&ProviderResponse> for PaymentOutcome {
	fn from(response: &ProviderResponse) -> Self {
		let mut approvals = Vec::new();
		let mut transaction_id = None;

		if let Some(card) = &response.transaction_response {
			if has_text(card.trx_status.as_ref(), "approved") {
				approvals.push(Approval::CardApproved);
			}
			if has_text(card.trx_internal_status.as_ref(), "0000") {
				approvals.push(Approval::CardInternalStatusOk);
			}
			transaction_id = card.payment_reference.as_ref().and_then(value_text);
		}

		if let Some(gu_id) = response
			.info_msg
			.as_ref()
			.and_then(|info| info.gu_id.as_ref())
			.and_then(value_text)
		{
			approvals.push(Approval::PagoMovilTransaction);
			transaction_id.get_or_insert(gu_id);
		}

		if response
			.authentication_info
			.as_ref()
			.is_some_and(|auth| has_text(auth.trx_status.as_ref(), "approved"))
		{
			approvals.push(Approval::CardAuthApproved);
		}

		if matches!(&response.status, Some(StatusSection::Text(s)) if s == "success")
		{
			approvals.push(Approval::StatusSuccess);
		}

		let markers = &response.markers;
		if markers.response_codes.iter().any(is_zero_code) {
			approvals.push(Approval::ZeroResponseCode);
		}

		if transaction_id.is_none() {
			transaction_id = markers.reference.as_ref().and_then(value_text);
		}

		let status_fault = match &response.status {
			Some(StatusSection::Detail(detail)) => detail.fault(),
			_ => None,
		};

		PaymentOutcome {
			error_list: response.error_list.clone(),
			status_fault,
			approvals,
			transaction_id,
		}
	}
}

/// Decides whether the bank accepted the operation.
///
/// Order matters: error signals always override success markers, and
/// anything without an explicit success marker is a failure.
pub fn classify(outcome: &PaymentOutcome) -> bool {
	if !outcome.error_list.is_empty() {
		return false;
	}

	if outcome.status_fault.is_some() {
		return false;
	}

	!outcome.approvals.is_empty()
}

fn section<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
	value.get(key).filter(|section| section.is_object())
}

/// Any non-empty list, object or string counts as reported errors.
fn error_list(value: Option<&Value>) -> Vec<ProviderFault> {
	match value {
		Some(Value::Array(items)) => {
			items.iter().map(ProviderFault::from_entry).collect()
		}
		Some(entry @ Value::Object(map)) if !map.is_empty() => {
			vec![ProviderFault::from_entry(entry)]
		}
		Some(entry @ Value::String(s)) if !s.is_empty() => {
			vec![ProviderFault::from_entry(entry)]
		}
		_ => Vec::new(),
	}
}

fn status_section(value: Option<&Value>) -> Option<StatusSection> {
	match value? {
		Value::String(text) => Some(StatusSection::Text(text.clone())),
		detail @ Value::Object(_) => {
			Some(StatusSection::Detail(StatusDetail::from_section(detail)))
		}
		_ => None,
	}
}

fn first_present<'a>(object: &'a Value, keys: &[&str]) -> Option<&'a Value> {
	keys.iter()
		.filter_map(|key| object.get(*key))
		.find(|value| is_present(value))
}

/// `null`, `false`, `0` and `""` carry no signal.
fn is_present(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64() != Some(0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

fn has_text(value: Option<&Value>, expected: &str) -> bool {
	value.and_then(value_text).is_some_and(|text| text == expected)
}

fn is_zero_code(value: &Value) -> bool {
	match value {
		Value::Number(n) => n.as_f64() == Some(0.0),
		Value::String(s) => !s.is_empty() && s.chars().all(|c| c == '0'),
		_ => false,
	}
}

fn value_text(value: &Value) -> Option<String> {
	match value {
		Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		_ => None,
	}
}
