//! OAuth 1.0a request signing (HMAC-SHA1), as required by the posting API.

use crate::config::Credentials;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use chrono::Utc;
use ring::hmac;
use uuid::Uuid;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const VERSION: &str = "1.0";

/// Per-request values that must be unique for every signed call.
#[derive(Debug, Clone)]
pub struct RequestNonce {
    pub nonce: String,
    pub timestamp: i64,
}

impl RequestNonce {
    pub fn generate() -> Self {
        Self {
            nonce: Uuid::new_v4().simple().to_string(),
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// RFC 3986 encoding: everything except `A-Z a-z 0-9 - . _ ~`.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

pub fn signature_base_string(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&param_string)
    )
}

pub fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let signing_key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, signing_key.as_bytes());
    let tag = hmac::sign(&key, base_string.as_bytes());
    BASE64_STANDARD.encode(tag.as_ref())
}

/// Builds the `Authorization` header value. `request_params` are the query or
/// form parameters of the request; JSON bodies are not signed.
pub fn authorization_header(
    credentials: &Credentials,
    method: &str,
    url: &str,
    request_params: &[(&str, &str)],
    nonce: &RequestNonce,
) -> String {
    let timestamp = nonce.timestamp.to_string();
    let oauth_params: Vec<(&str, &str)> = vec![
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce.nonce.as_str()),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", VERSION),
    ];

    let mut all_params = oauth_params.clone();
    all_params.extend_from_slice(request_params);
    let base = signature_base_string(method, url, &all_params);
    let signature = sign(&base, &credentials.consumer_secret, &credentials.access_secret);

    let mut header_params = oauth_params;
    header_params.push(("oauth_signature", signature.as_str()));
    header_params.sort();

    let fields = header_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {}", fields)
}
