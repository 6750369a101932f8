#![forbid(unsafe_code)]

use ld_app::{FetchError, FormSubmitter, JokeSource};
use ld_core::form::ContactSubmission;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

pub(crate) fn client(timeout_s: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_s.max(1)))
        .user_agent(concat!("listdeck/", env!("CARGO_PKG_VERSION")))
        .build()
}

fn transport(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}

pub(crate) struct HttpJokeSource {
    client: Client,
    url: String,
}

impl HttpJokeSource {
    pub(crate) fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl JokeSource for HttpJokeSource {
    fn fetch(&mut self) -> Result<String, FetchError> {
        tracing::debug!(url = %self.url, "fetching joke");
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(transport)?;
        // Error statuses still carry a JSON body; the payload decides the outcome.
        tracing::debug!(status = response.status().as_u16(), "joke response");
        response.text().map_err(transport)
    }
}

/// Posts `{name, email, message}` as JSON; any 2xx counts as delivered.
pub(crate) struct HttpFormSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpFormSubmitter {
    pub(crate) fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl FormSubmitter for HttpFormSubmitter {
    fn submit(&mut self, submission: &ContactSubmission) -> Result<(), FetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(submission)
            .send()
            .map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(())
    }
}

/// Stands in for a backend: waits, then reports success.
pub(crate) struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub(crate) fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

impl FormSubmitter for SimulatedSubmitter {
    fn submit(&mut self, submission: &ContactSubmission) -> Result<(), FetchError> {
        tracing::debug!(email = %submission.email, delay_ms = self.delay.as_millis() as u64, "simulated submit");
        std::thread::sleep(self.delay);
        Ok(())
    }
}
