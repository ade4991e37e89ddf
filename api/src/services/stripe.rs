use anyhow::{Context, Result, bail};
use serde::Deserialize;
use util::config;

/// The subset of the provider's payment-intent object the API relies on.
#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Converts a display-currency price to the provider's minor units.
pub fn amount_in_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Create a card payment intent for `price` against the configured
/// Stripe-compatible endpoint (`STRIPE_API_BASE`, default the live API).
///
/// The secret key is sent as HTTP basic auth, and the body is
/// form-encoded per the provider's API.
pub async fn create_payment_intent(price: f64) -> Result<PaymentIntent> {
    let url = format!("{}/v1/payment_intents", config::stripe_api_base());
    let params = [
        ("amount", amount_in_cents(price).to_string()),
        ("currency", "usd".to_string()),
        ("payment_method_types[]", "card".to_string()),
    ];

    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .basic_auth(config::stripe_secret_key(), None::<&str>)
        .form(&params)
        .send()
        .await
        .context("payment provider request failed")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("payment provider returned {status}: {body}");
    }

    resp.json::<PaymentIntent>()
        .await
        .context("invalid payment provider response")
}
