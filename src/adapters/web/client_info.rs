//! Caller details for the bank's `client_identify` block.
//!
//! The browser agent is a short `"<Browser> <major>.<minor>.0"` string
//! derived from the User-Agent header. It is a heuristic for a field the
//! bank wants short-formed, not a user agent parser.

use std::sync::LazyLock;

use actix_web::HttpRequest;
use actix_web::http::header;
use regex::Regex;

use crate::use_cases::dto::ClientContext;

const LOOPBACK: &str = "127.0.0.1";
const DEFAULT_BROWSER_AGENT: &str = "Chrome 120.0.0";

struct BrowserRule {
	name:     &'static str,
	markers:  &'static [&'static str],
	version:  Regex,
	fallback: &'static str,
}

// Chromium agents also advertise Safari and Edge advertises Chrome, so the
// order of the rules matters.
static BROWSER_RULES: LazyLock<Vec<BrowserRule>> = LazyLock::new(|| {
	vec![
		BrowserRule {
			name:     "Firefox",
			markers:  &["Firefox/", "FxiOS/"],
			version:  version_regex(r"(?:Firefox|FxiOS)/(\d+)\.(\d+)"),
			fallback: "Firefox 120.0.0",
		},
		BrowserRule {
			name:     "Edge",
			markers:  &["Edg/", "Edge/", "EdgA/", "EdgiOS/"],
			version:  version_regex(r"Edg(?:e|A|iOS)?/(\d+)\.(\d+)"),
			fallback: "Edge 120.0.0",
		},
		BrowserRule {
			name:     "Chrome",
			markers:  &["Chrome/", "CriOS/"],
			version:  version_regex(r"(?:Chrome|CriOS)/(\d+)\.(\d+)"),
			fallback: "Chrome 120.0.0",
		},
		BrowserRule {
			name:     "Safari",
			markers:  &["Safari/"],
			version:  version_regex(r"Version/(\d+)\.(\d+)"),
			fallback: "Safari 17.0.0",
		},
	]
});

fn version_regex(pattern: &str) -> Regex {
	Regex::new(pattern).expect("browser version pattern is valid")
}

pub fn client_context(req: &HttpRequest) -> ClientContext {
	let user_agent = header_text(req, header::USER_AGENT.as_str()).unwrap_or("");

	ClientContext {
		ip_address:    client_ip(req),
		browser_agent: browser_agent(user_agent),
	}
}

pub fn browser_agent(user_agent: &str) -> String {
	let Some(rule) = BROWSER_RULES
		.iter()
		.find(|rule| rule.markers.iter().any(|m| user_agent.contains(m)))
	else {
		return DEFAULT_BROWSER_AGENT.to_string();
	};

	match rule.version.captures(user_agent) {
		Some(caps) => format!("{} {}.{}.0", rule.name, &caps[1], &caps[2]),
		None => rule.fallback.to_string(),
	}
}

/// `X-Forwarded-For` first, then `X-Real-IP`, then the peer address.
pub fn client_ip(req: &HttpRequest) -> String {
	let forwarded = header_text(req, "x-forwarded-for")
		.and_then(|value| value.split(',').next())
		.map(str::trim)
		.filter(|ip| !ip.is_empty());

	let real_ip = header_text(req, "x-real-ip")
		.map(str::trim)
		.filter(|ip| !ip.is_empty());

	match forwarded.or(real_ip) {
		Some(ip) => normalize_ip(ip),
		None => req
			.peer_addr()
			.map(|addr| normalize_ip(&addr.ip().to_string()))
			.unwrap_or_else(|| LOOPBACK.to_string()),
	}
}

fn normalize_ip(ip: &str) -> String {
	ip.strip_prefix("::ffff:").unwrap_or(ip).to_string()
}

fn header_text<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
	req.headers().get(name).and_then(|v| v.to_str().ok())
}
