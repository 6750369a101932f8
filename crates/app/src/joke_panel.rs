#![forbid(unsafe_code)]

use crate::FetchError;
use ld_core::joke::{JokeDisplay, JokeOutcome, JokeWidget, RequestToken};

/// Where jokes come from. Returns the raw response body.
pub trait JokeSource {
    fn fetch(&mut self) -> Result<String, FetchError>;
}

impl<F> JokeSource for F
where
    F: FnMut() -> Result<String, FetchError>,
{
    fn fetch(&mut self) -> Result<String, FetchError> {
        self()
    }
}

pub struct JokePanel<S> {
    source: S,
    widget: JokeWidget,
}

impl<S: JokeSource> JokePanel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            widget: JokeWidget::default(),
        }
    }

    pub fn widget(&self) -> &JokeWidget {
        &self.widget
    }

    pub fn display(&self) -> &JokeDisplay {
        self.widget.display()
    }

    /// Starts a request. `None` while another one is still in flight.
    pub fn begin(&mut self) -> Option<RequestToken> {
        self.widget.begin()
    }

    /// Delivers an answer; stale tokens are dropped.
    pub fn complete(&mut self, token: RequestToken, body: Result<String, FetchError>) -> bool {
        let outcome = match body {
            Ok(body) => JokeOutcome::from_body(&body),
            Err(err) => JokeOutcome::Failed(err.to_string()),
        };
        if let JokeOutcome::Failed(reason) = &outcome {
            tracing::warn!(reason = %reason, "joke fetch failed");
        }
        self.widget.finish(token, outcome)
    }

    /// One full round trip against the source. Returns false when a request
    /// was already in flight.
    pub fn fetch(&mut self) -> bool {
        let Some(token) = self.begin() else {
            return false;
        };
        let body = self.source.fetch();
        self.complete(token, body)
    }
}
