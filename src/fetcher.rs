use anyhow::Result;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::{Config, Credentials};
use crate::error::FatalError;
use crate::models::RawProductEntry;
use crate::parser;

/// An authenticated backend session. The client carries the login cookies;
/// clones share the same connection pool and cookie jar, so workers can
/// fetch concurrently against one login.
#[derive(Clone, Debug)]
pub struct Session {
    client: Client,
    login_url: String,
    product_url: String,
    price_url: String,
}

impl Session {
    /// Two-step login handshake: the first POST submits the username alone
    /// (primes server-side state), the second submits username + password.
    /// A 200 on the second request is taken as authenticated; the body is
    /// not inspected.
    pub fn login(config: &Config, credentials: &Credentials) -> Result<Self, FatalError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()?;

        let session = Self {
            client,
            login_url: config.endpoints.login.clone(),
            product_url: config.endpoints.product_search.clone(),
            price_url: config.endpoints.marketing_price.clone(),
        };

        session
            .client
            .post(&session.login_url)
            .form(&[("user", credentials.username.as_str())])
            .send()?;

        session
            .client
            .post(&session.login_url)
            .form(&[
                ("user", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()?
            .error_for_status()?;

        println!("[LOGIN] Logged in successfully.");
        Ok(session)
    }

    /// One search probe. Transport errors, non-2xx statuses and non-JSON
    /// bodies are all `Err`; the caller decides what a failed probe means.
    pub fn fetch_products_for_term(&self, term: &str) -> Result<Vec<RawProductEntry>> {
        let data: Value = self
            .client
            .post(&self.product_url)
            .form(&[("param", term)])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(parser::entries_from_json(&data))
    }

    /// One marketing-price lookup. The price arrives as a raw text body;
    /// any status other than 200 resolves to an empty price.
    pub fn fetch_price(&self, id: &str) -> Result<String> {
        let resp = self
            .client
            .post(&self.price_url)
            .form(&[("id", id)])
            .send()?;
        if resp.status() != StatusCode::OK {
            return Ok(String::new());
        }
        Ok(resp.text()?.trim().to_string())
    }
}
