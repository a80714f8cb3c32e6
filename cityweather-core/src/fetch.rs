use reqwest::{Client, Request, StatusCode};
use serde::de::DeserializeOwned;

use crate::FetchError;

/// Execute `request` and decode a `200 OK` body into `T`.
///
/// Any other status yields [`FetchError::RequestFailed`] with the raw body.
/// The response is consumed on every path, so its connection is released.
pub async fn fetch_json<T: DeserializeOwned>(
    http: &Client,
    request: Request,
) -> Result<T, FetchError> {
    log::debug!("GET {}", redact(request.url()));

    let res = http.execute(request).await.map_err(FetchError::Transport)?;

    let status = res.status();
    let body = res.text().await.map_err(FetchError::Transport)?;

    if status != StatusCode::OK {
        return Err(FetchError::RequestFailed {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// URL with the `appid` value masked, for logging.
fn redact(url: &reqwest::Url) -> String {
    let mut url = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "appid" {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.to_string()
}
