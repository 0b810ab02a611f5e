//! Clients for the three external services: form ingestion, checkout-session
//! creation and session-status lookup. Every call is raced against a fixed
//! timeout so a dead service degrades into a visible failure instead of a
//! spinner.

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::catalog::Package;
use crate::config;
use crate::forms::{encode_form_data, BriefForm, ContactForm};

const REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(Clone, PartialEq, Debug)]
pub enum ApiError {
    Timeout,
    Network,
    Service {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// Message shown to the user: the service's own `{error}` body when it
    /// sent one, otherwise the caller's fallback copy.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Service {
                message: Some(msg), ..
            } => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull a human-readable message out of an `{"error": "..."}` body.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.as_str())
        .map(str::to_string)
}

/// Monotonic tag source for in-flight requests. A completion is applied only
/// while its tag is still the newest one issued, so a slow earlier response
/// can never overwrite a faster later one.
#[derive(Default)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, tag: u64) -> bool {
        self.0 == tag
    }
}

async fn with_timeout<F, T>(fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, gloo_net::Error>>,
{
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(fut);
    pin_mut!(timeout);
    match select(fut, timeout).await {
        Either::Left((result, _)) => result.map_err(|_| ApiError::Network),
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

#[derive(Serialize)]
struct CheckoutSessionRequest<'a> {
    slug: &'a str,
    rush: bool,
    origin: &'a str,
}

#[derive(Deserialize)]
struct CheckoutSessionResponse {
    #[serde(rename = "clientSecret")]
    client_secret: String,
}

/// Ask the payment backend for an embedded-checkout session. The returned
/// client secret is an opaque token handed straight to the widget.
pub async fn create_checkout_session(slug: &str, rush: bool) -> Result<String, ApiError> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    let request = Request::post(&format!(
        "{}/create-checkout-session",
        config::get_functions_url()
    ))
    .json(&CheckoutSessionRequest {
        slug,
        rush,
        origin: &origin,
    })
    .map_err(|_| ApiError::Network)?;

    let response = with_timeout(async move { request.send().await }).await?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Service {
            status: response.status(),
            message: extract_error_message(&body),
        });
    }
    let session = response
        .json::<CheckoutSessionResponse>()
        .await
        .map_err(|_| ApiError::Network)?;
    Ok(session.client_secret)
}

#[derive(Deserialize, Clone, PartialEq, Default)]
pub struct SummaryMetadata {
    pub package: Option<String>,
    pub rush: Option<String>,
}

/// Read-only reconciliation of a completed checkout session.
#[derive(Deserialize, Clone, PartialEq)]
pub struct PurchaseSummary {
    pub payment_status: Option<String>,
    pub payment_intent_id: Option<String>,
    #[serde(default)]
    pub metadata: SummaryMetadata,
    /// Total in minor units (cents).
    pub amount_total: Option<i64>,
    pub currency: Option<String>,
}

impl PurchaseSummary {
    pub fn rush(&self) -> bool {
        self.metadata.rush.as_deref() == Some("true")
    }

    /// `"$2300.00 USD"`, or the placeholder when the total never arrived.
    pub fn nice_total(&self) -> String {
        match self.amount_total {
            Some(cents) => {
                let dollars = cents as f64 / 100.0;
                match self.currency.as_deref() {
                    Some(currency) => format!("${:.2} {}", dollars, currency.to_uppercase()),
                    None => format!("${:.2}", dollars),
                }
            }
            None => "—".to_string(),
        }
    }
}

pub async fn fetch_purchase_summary(session_id: &str) -> Result<PurchaseSummary, ApiError> {
    let request = Request::get(&format!(
        "{}/session-status?session_id={}",
        config::get_functions_url(),
        urlencoding::encode(session_id)
    ));
    let response = with_timeout(async move { request.send().await }).await?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Service {
            status: response.status(),
            message: extract_error_message(&body),
        });
    }
    response
        .json::<PurchaseSummary>()
        .await
        .map_err(|_| ApiError::Network)
}

/// Send the brief as multipart form data, files included. Attachments are
/// read once here and never retained.
pub async fn submit_brief(
    pkg: &Package,
    form: &BriefForm,
    files: &[web_sys::File],
    rush: bool,
) -> Result<(), ApiError> {
    let data = web_sys::FormData::new().map_err(|_| ApiError::Network)?;
    for (key, value) in form.fields(pkg, rush) {
        let _ = data.append_with_str(key, &value);
    }
    for file in files {
        let _ = data.append_with_blob("assetsFiles", file);
    }

    let request = Request::post(config::get_forms_url()).body(data);
    let response = with_timeout(async move { request.send().await }).await?;
    if !response.ok() {
        return Err(ApiError::Service {
            status: response.status(),
            message: None,
        });
    }
    Ok(())
}

/// Send the contact form urlencoded.
pub async fn submit_contact(form: &ContactForm) -> Result<(), ApiError> {
    let body = encode_form_data(&form.fields());
    let request = Request::post(config::get_forms_url())
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body);
    let response = with_timeout(async move { request.send().await }).await?;
    if !response.ok() {
        return Err(ApiError::Service {
            status: response.status(),
            message: None,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_extraction() {
        assert_eq!(
            extract_error_message(r#"{"error":"Unknown package"}"#),
            Some("Unknown package".to_string())
        );
        assert_eq!(extract_error_message(r#"{"message":"nope"}"#), None);
        assert_eq!(extract_error_message("not json"), None);
        assert_eq!(extract_error_message(r#"{"error":42}"#), None);
    }

    #[test]
    fn service_message_beats_the_fallback() {
        let err = ApiError::Service {
            status: 400,
            message: Some("Unknown package".into()),
        };
        assert_eq!(err.user_message("generic"), "Unknown package");

        let err = ApiError::Service {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("generic"), "generic");
        assert_eq!(ApiError::Timeout.user_message("generic"), "generic");
    }

    fn summary(amount: Option<i64>, currency: Option<&str>) -> PurchaseSummary {
        PurchaseSummary {
            payment_status: Some("paid".into()),
            payment_intent_id: Some("pi_123".into()),
            metadata: SummaryMetadata {
                package: Some("Growth".into()),
                rush: Some("true".into()),
            },
            amount_total: amount,
            currency: currency.map(str::to_string),
        }
    }

    #[test]
    fn minor_unit_totals_format_for_display() {
        assert_eq!(summary(Some(230_000), Some("usd")).nice_total(), "$2300.00 USD");
        assert_eq!(summary(Some(90_050), Some("usd")).nice_total(), "$900.50 USD");
        assert_eq!(summary(None, Some("usd")).nice_total(), "—");
        assert_eq!(summary(Some(100), None).nice_total(), "$1.00");
    }

    #[test]
    fn summary_decodes_the_wire_shape() {
        let json = r#"{
            "payment_status": "paid",
            "payment_intent_id": "pi_9",
            "metadata": {"package": "Growth", "rush": "true"},
            "amount_total": 270000,
            "currency": "usd"
        }"#;
        let summary: PurchaseSummary = serde_json::from_str(json).unwrap();
        assert!(summary.rush());
        assert_eq!(summary.nice_total(), "$2700.00 USD");

        // sparse body still decodes, placeholders take over
        let sparse: PurchaseSummary = serde_json::from_str(r#"{"payment_status":"paid"}"#).unwrap();
        assert!(!sparse.rush());
        assert_eq!(sparse.nice_total(), "—");
        assert!(sparse.payment_intent_id.is_none());
    }

    #[test]
    fn only_the_newest_request_tag_is_current() {
        let mut seq = RequestSeq::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));

        // toggling twice in quick succession: the final toggle wins
        let third = seq.issue();
        assert!(!seq.is_current(second));
        assert!(seq.is_current(third));
    }
}
