// src/core/net.rs

// Blocking HTTPS over reqwest. Both endpoints live on Google hosts, so the
// old plain-TCP HTTP/1.0 path can't reach them.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

fn client() -> Result<&'static Client> {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    if let Some(c) = CLIENT.get() {
        return Ok(c);
    }
    let built = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;
    Ok(CLIENT.get_or_init(|| built))
}

/// GET `url` and return the body text. Never cached: every load is fresh.
pub fn http_get(url: &str) -> Result<String> {
    let resp = client()?
        .get(url)
        .header("Cache-Control", "no-store")
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}

/// POST form fields to `url`. The body is not read: the script endpoint
/// answers with a redirect page, not a result.
pub fn http_post_form(url: &str, fields: &[(String, String)]) -> Result<()> {
    let resp = client()?.post(url).form(fields).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(())
}
