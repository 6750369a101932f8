#![forbid(unsafe_code)]

use serde_json::Value;

pub const DEFAULT_JOKE_URL: &str = "https://v2.jokeapi.dev/joke/Programming?type=single";

const LOADING: &str = "Loading joke...";
const NO_JOKE: &str = "No joke found! Try again.";
const FAILED: &str = "Failed to fetch joke. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JokeOutcome {
    Joke(String),
    /// The service answered, just without a joke.
    NoJoke,
    Failed(String),
}

impl JokeOutcome {
    /// Classifies a response body. Missing or empty `joke` is a valid answer;
    /// an unparseable or `null` body is a failure.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Null) => Self::Failed("joke payload is null".to_string()),
            Ok(value) => match value.get("joke").and_then(Value::as_str) {
                Some(joke) if !joke.trim().is_empty() => Self::Joke(joke.to_string()),
                _ => Self::NoJoke,
            },
            Err(err) => Self::Failed(format!("invalid joke payload: {err}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum JokeDisplay {
    #[default]
    Empty,
    Loading,
    Joke(String),
    NoJoke,
    Failed,
}

impl JokeDisplay {
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Loading => LOADING,
            Self::Joke(joke) => joke,
            Self::NoJoke => NO_JOKE,
            Self::Failed => FAILED,
        }
    }
}

/// Joke widget with an explicit in-flight guard. Each request carries a
/// token; answers to anything but the current token are dropped.
#[derive(Clone, Debug, Default)]
pub struct JokeWidget {
    issued: u64,
    in_flight: Option<RequestToken>,
    display: JokeDisplay,
}

impl JokeWidget {
    pub fn begin(&mut self) -> Option<RequestToken> {
        if self.in_flight.is_some() {
            return None;
        }
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.in_flight = Some(token);
        self.display = JokeDisplay::Loading;
        Some(token)
    }

    pub fn finish(&mut self, token: RequestToken, outcome: JokeOutcome) -> bool {
        if self.in_flight != Some(token) {
            return false;
        }
        self.in_flight = None;
        self.display = match outcome {
            JokeOutcome::Joke(joke) => JokeDisplay::Joke(joke),
            JokeOutcome::NoJoke => JokeDisplay::NoJoke,
            JokeOutcome::Failed(_) => JokeDisplay::Failed,
        };
        true
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn display(&self) -> &JokeDisplay {
        &self.display
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_in_flight() {
            "Loading..."
        } else {
            "Get a Programming Joke"
        }
    }
}
