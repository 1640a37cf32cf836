use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Request plumbing shared by the resource clients: one backend base URL,
/// a set of static headers, and percent-encoded path building.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    headers: HeaderMap,
}

impl ApiClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(Error::Config("API base URL cannot be empty".to_string()));
        }

        let base_url = Url::parse(trimmed)
            .map_err(|e| Error::Config(format!("Invalid API base URL {}: {}", trimmed, e)))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(Error::Config(
                "API base URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(Self {
            http,
            base_url,
            headers: HeaderMap::new(),
        })
    }

    /// Headers sent with every request made through this client.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Appends `segments` to the base URL path, percent-encoding each one.
    /// A `/` inside a segment is encoded rather than splitting it.
    pub fn endpoint<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                Error::Config(format!("API base URL cannot carry a path: {}", self.base_url))
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment.as_ref());
            }
        }
        Ok(url)
    }

    pub async fn get(&self, url: Url) -> Result<Response> {
        debug!(method = "GET", url = %url, "Calling backend");
        let response = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;
        debug!(status = %response.status(), "Backend responded");
        Ok(response)
    }

    pub async fn post_json<B>(&self, url: Url, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        debug!(method = "POST", url = %url, "Calling backend");
        let response = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;
        debug!(status = %response.status(), "Backend responded");
        Ok(response)
    }
}

/// Turns any non-success status into [`Error::Upstream`] with `context`.
pub fn ensure_success(response: Response, context: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!(status = %status, "{}", context);
        Err(Error::upstream(context, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(Client::new(), base).expect("valid base url")
    }

    #[test]
    fn rejects_invalid_base_urls() {
        assert!(ApiClient::new(Client::new(), "").is_err());
        assert!(ApiClient::new(Client::new(), "localhost:8000").is_err());
        assert!(ApiClient::new(Client::new(), "ftp://example.com").is_err());
    }

    #[test]
    fn endpoint_appends_segments_after_trailing_slash() {
        let api = client("http://localhost:8000/");
        let url = api.endpoint(["processes", "4", "candidates"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/processes/4/candidates");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let api = client("https://abc.ngrok-free.app/api");
        let url = api.endpoint(["candidates"]).unwrap();
        assert_eq!(url.as_str(), "https://abc.ngrok-free.app/api/candidates");
    }

    #[test]
    fn endpoint_percent_encodes_user_input() {
        let api = client("http://localhost:8000");
        let url = api
            .endpoint(["candidates", "search", "Le Gall/Dupont?x#y"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/candidates/search/Le%20Gall%2FDupont%3Fx%23y"
        );
    }
}
