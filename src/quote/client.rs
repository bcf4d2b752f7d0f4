//! HTTP client for the remote quoting function

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::quote::{QuoteParameters, QuoteResponse};
use serde::Serialize;
use url::Url;

/// Body of the quote request
#[derive(Debug, Serialize)]
struct QuoteRequest<'a> {
    #[serde(rename = "pdfText")]
    pdf_text: &'a str,
    params: &'a QuoteParameters,
}

/// Client for the quoting service
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl QuoteClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(Error::HttpRequest)?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send the text and parameters in one POST and parse the reply.
    ///
    /// The reply is returned as received; missing fields are left for the
    /// renderer to handle.
    pub async fn request_quote(
        &self,
        text: &str,
        params: &QuoteParameters,
    ) -> Result<QuoteResponse> {
        let request = QuoteRequest {
            pdf_text: text,
            params,
        };

        tracing::info!(
            endpoint = %self.endpoint,
            chars = text.len(),
            quantities = params.quantities.len(),
            "Requesting quote"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::QuoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        let quote: QuoteResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            items = quote.items().len(),
            total = quote.total(),
            "Quote received"
        );

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let params = QuoteParameters::new("alluminio");
        let body = QuoteRequest {
            pdf_text: "Spessore 2 mm",
            params: &params,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["pdfText"], "Spessore 2 mm");
        assert_eq!(json["params"]["material"], "alluminio");
        assert_eq!(json["params"]["hourlyRate"], 42.0);
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let config = ClientConfig {
            base_url: "::nope".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            QuoteClient::new(&config),
            Err(Error::InvalidEndpoint { .. })
        ));
    }
}
