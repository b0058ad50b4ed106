use serde::{Deserialize, Serialize};
use std::{ops::Range, time::Duration};

pub const DEFAULT_HTTPS_TIMEOUT_SEC: u64 = 3;

/// File name of the register below its resource location.
pub const BANK_REGISTER_FILE: &str = "banks.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RequestHeader {
    pub key: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RegisterConfig {
    pub endpoint: String,
    pub request_header: Vec<RequestHeader>,
    pub valid_http_status_code: Vec<Range<u16>>,
    pub timeout: Duration,
}

impl RegisterConfig {
    pub fn new(endpoint: &str) -> Self {
        RegisterConfig {
            endpoint: endpoint.to_string(),
            request_header: vec![RequestHeader {
                key: "Accept".to_string(),
                value: "application/json".to_string(),
            }],
            valid_http_status_code: vec![200..300],
            timeout: Duration::from_secs(DEFAULT_HTTPS_TIMEOUT_SEC),
        }
    }

    /// Point at `banks.json` inside a static resource location.
    pub fn from_resource_url(resource_url: &str) -> Self {
        RegisterConfig::new(&format!(
            "{}/{}",
            resource_url.trim_end_matches('/'),
            BANK_REGISTER_FILE
        ))
    }
}

pub struct RegisterConfigBuilder {
    config: RegisterConfig,
}

impl RegisterConfigBuilder {
    pub fn new(endpoint: &str) -> Self {
        RegisterConfigBuilder {
            config: RegisterConfig::new(endpoint),
        }
    }

    pub fn from_resource_url(resource_url: &str) -> Self {
        RegisterConfigBuilder {
            config: RegisterConfig::from_resource_url(resource_url),
        }
    }

    pub fn set_request_header(&mut self, request_header: Vec<RequestHeader>) -> &mut Self {
        self.config.request_header = request_header;
        self
    }

    pub fn add_request_header(&mut self, key: &str, value: &str) -> &mut Self {
        self.config.request_header.push(RequestHeader {
            key: key.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn set_valid_http_status_code(
        &mut self,
        valid_http_status_code: Vec<Range<u16>>,
    ) -> &mut Self {
        self.config.valid_http_status_code = valid_http_status_code;
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(&self) -> RegisterConfig {
        self.config.clone()
    }
}
