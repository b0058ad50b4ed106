use super::config::RegisterConfig;
use super::error::RegisterFetchError;
use super::BankRegister;
use async_trait::async_trait;
use reqwest::Client;

#[async_trait]
pub trait RegisterSource: Send + Sync {
    // Load the whole register. Called at most once per validator.
    async fn fetch(&self) -> Result<BankRegister, RegisterFetchError>;

    /// Used as the `source` label of the register metrics.
    fn name(&self) -> &'static str {
        "custom"
    }
}

pub struct HttpRegisterSource {
    config: RegisterConfig,
    client: Client,
}

impl HttpRegisterSource {
    pub fn new(config: RegisterConfig) -> Self {
        HttpRegisterSource {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl RegisterSource for HttpRegisterSource {
    async fn fetch(&self) -> Result<BankRegister, RegisterFetchError> {
        let mut request_builder = self
            .client
            .get(&self.config.endpoint)
            .timeout(self.config.timeout);

        for header in &self.config.request_header {
            request_builder = request_builder.header(&header.key, &header.value);
        }

        let response = request_builder.send().await?;
        let status = response.status().as_u16();
        if !self
            .config
            .valid_http_status_code
            .iter()
            .any(|range| range.contains(&status))
        {
            return Err(RegisterFetchError::UnexpectedStatus(status));
        }

        let body = response.bytes().await?;
        Ok(BankRegister::from_json_slice(&body)?)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// An in-memory register, for embedded data or tests.
#[async_trait]
impl RegisterSource for BankRegister {
    async fn fetch(&self) -> Result<BankRegister, RegisterFetchError> {
        Ok(self.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
