// src/core/net.rs

// HTTP GET via ureq. Non-2xx statuses are data here, not errors: the
// resolution chain is driven by 404s, so they come back as PageResponse.

use std::error::Error;
use std::time::Duration;

use crate::config::consts::HTTP_TIMEOUT_SECS;

pub struct PageResponse {
    pub status: u16,
    pub body: String,
}

/// Fetch seam so the pipeline can run against scripted responses in tests.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<PageResponse, Box<dyn Error>>;
}

pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent("springer_enrich/0.1")
            .build();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<PageResponse, Box<dyn Error>> {
        match self.agent.get(url).call() {
            Ok(resp) => {
                let status = resp.status();
                let body = resp.into_string()?;
                Ok(PageResponse { status, body })
            }
            // ureq reports 4xx/5xx as Err; the chain wants the status code.
            Err(ureq::Error::Status(status, _)) => Ok(PageResponse {
                status,
                body: s!(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
