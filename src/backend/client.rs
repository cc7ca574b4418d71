//! HTTP backend submitting the contact form as multipart form data

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{multipart, Method, Url};
use std::time::Duration;

use super::traits::{FormBackend, SubmitError, SubmitReceipt, SubmitRequest};

/// Request timeout; the endpoint is typically a third-party form service
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend submitting over HTTP with reqwest
pub struct HttpFormBackend {
    client: reqwest::Client,
}

impl HttpFormBackend {
    /// Create a backend with the default client settings
    pub fn new() -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

/// Parse the configured HTML-style method attribute into an HTTP method
fn parse_method(method: &str) -> Result<Method, SubmitError> {
    Method::from_bytes(method.to_uppercase().as_bytes())
        .map_err(|_| SubmitError::Config(format!("unsupported method '{method}'")))
}

/// Parse the configured action attribute into a request URL
fn parse_action(action: &str) -> Result<Url, SubmitError> {
    Url::parse(action).map_err(|e| SubmitError::Config(format!("bad action URL: {e}")))
}

#[async_trait]
impl FormBackend for HttpFormBackend {
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitReceipt, SubmitError> {
        let method = parse_method(&request.method)?;
        let url = parse_action(&request.action)?;

        let mut form = multipart::Form::new();
        for (name, value) in request.entries {
            form = form.text(name, value);
        }

        let response = self
            .client
            .request(method, url)
            .multipart(form)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        Ok(SubmitReceipt {
            status: response.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method_accepts_html_attribute_casing() {
        assert_eq!(parse_method("post").unwrap(), Method::POST);
        assert_eq!(parse_method("POST").unwrap(), Method::POST);
        assert_eq!(parse_method("get").unwrap(), Method::GET);
    }

    #[test]
    fn test_parse_method_rejects_garbage() {
        assert!(matches!(
            parse_method("not a method"),
            Err(SubmitError::Config(_))
        ));
    }

    #[test]
    fn test_parse_action_accepts_https_urls() {
        let url = parse_action("https://forms.test/f/abc").unwrap();
        assert_eq!(url.host_str(), Some("forms.test"));
    }

    #[test]
    fn test_parse_action_rejects_relative_paths() {
        assert!(matches!(
            parse_action("/api/contact"),
            Err(SubmitError::Config(_))
        ));
    }

    #[test]
    fn test_backend_constructs() {
        assert!(HttpFormBackend::new().is_ok());
    }
}
