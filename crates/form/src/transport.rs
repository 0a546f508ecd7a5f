/// Status and body text returned by the submission handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub text: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("reply is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Relays serialized form fields to the submission handler.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, fields: &[(String, String)]) -> Result<Reply, TransportError>;
}

/// Posts fields form-encoded over HTTP.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn submit(&self, fields: &[(String, String)]) -> Result<Reply, TransportError> {
        let response = self.client.post(&self.endpoint).form(fields).send().await?;
        let status = response.status().as_u16();
        let text = String::from_utf8(response.bytes().await?.to_vec())?;

        tracing::debug!(status, "Submission relayed");

        Ok(Reply { status, text })
    }
}
