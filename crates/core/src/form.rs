#![forbid(unsafe_code)]

//! Contact form validation and submission bookkeeping.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

pub const FIX_ERRORS: &str = "Please fix the errors above.";
pub const SUBMITTED: &str = "Form submitted successfully!";
pub const THANK_YOU: &str = "Thank you for your message! I will get back to you soon.";
pub const SEND_FAILED: &str = "There was an error sending your message. Please try again.";

static STRICT_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("strict email pattern"));
static LOOSE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("loose email pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden field; humans leave it empty.
    pub honeypot: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn check_name(raw: &str) -> Result<String, FieldError> {
    let name = raw.trim();
    let fail = |message| Err(FieldError { field: Field::Name, message });
    if name.is_empty() {
        return fail("Name is required");
    }
    if name.chars().count() < 3 {
        return fail("Name must be at least 3 characters");
    }
    Ok(name.to_string())
}

pub fn check_email(raw: &str) -> Result<String, FieldError> {
    let email = raw.trim();
    let fail = |message| Err(FieldError { field: Field::Email, message });
    if email.is_empty() {
        return fail("Email is required");
    }
    if !STRICT_EMAIL.is_match(email) {
        return fail("Please enter a valid email address");
    }
    Ok(email.to_string())
}

pub fn check_message(raw: &str) -> Result<String, FieldError> {
    let message = raw.trim();
    let fail = |text| Err(FieldError { field: Field::Message, message: text });
    if message.is_empty() {
        return fail("Message is required");
    }
    if message.chars().count() < 10 {
        return fail("Message must be at least 10 characters");
    }
    Ok(message.to_string())
}

/// Validates every field and reports all failures at once.
pub fn validate_strict(input: &ContactInput) -> Result<ContactSubmission, Vec<FieldError>> {
    let name = check_name(&input.name);
    let email = check_email(&input.email);
    let message = check_message(&input.message);
    match (name, email, message) {
        (Ok(name), Ok(email), Ok(message)) => Ok(ContactSubmission {
            name,
            email,
            message,
        }),
        (name, email, message) => Err([name.err(), email.err(), message.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortfolioVerdict {
    Accepted(ContactSubmission),
    /// Honeypot was filled in; drop without any feedback.
    Spam,
    Rejected(&'static str),
}

/// Portfolio page rules: first failing check wins.
pub fn validate_portfolio(input: &ContactInput) -> PortfolioVerdict {
    if !input.honeypot.is_empty() {
        return PortfolioVerdict::Spam;
    }
    let name = input.name.trim();
    let email = input.email.trim();
    let message = input.message.trim();
    if name.is_empty() {
        return PortfolioVerdict::Rejected("Please enter your name.");
    }
    if email.is_empty() || !LOOSE_EMAIL.is_match(email) {
        return PortfolioVerdict::Rejected("Please enter a valid email address.");
    }
    if message.is_empty() {
        return PortfolioVerdict::Rejected("Please enter a message.");
    }
    PortfolioVerdict::Accepted(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// In-flight flag for a submit button.
#[derive(Clone, Debug, Default)]
pub struct SubmissionTracker {
    phase: SubmissionPhase,
}

impl SubmissionTracker {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// False when a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.phase == SubmissionPhase::Submitting {
            return false;
        }
        self.phase = SubmissionPhase::Submitting;
        true
    }

    pub fn finish(&mut self, ok: bool) {
        self.phase = if ok {
            SubmissionPhase::Succeeded
        } else {
            SubmissionPhase::Failed
        };
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            SubmissionPhase::Submitting => "Submitting...",
            _ => "Submit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, message: &str) -> ContactInput {
        ContactInput {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn strict_reports_every_field() {
        let errors = validate_strict(&input(" ", "bad", "short")).unwrap_err();
        let messages = errors.iter().map(|e| e.message).collect::<Vec<_>>();
        assert_eq!(
            messages,
            vec![
                "Name is required",
                "Please enter a valid email address",
                "Message must be at least 10 characters",
            ]
        );
    }

    #[test]
    fn strict_accepts_trimmed_values() {
        let ok = validate_strict(&input(" Ada ", "ada@example.com ", "Hello there, friend"))
            .expect("valid");
        assert_eq!(ok.name, "Ada");
        assert_eq!(ok.email, "ada@example.com");
    }

    #[test]
    fn strict_email_rejects_spaces_and_missing_dot() {
        assert!(check_email("a b@example.com").is_err());
        assert!(check_email("ada@example").is_err());
        assert_eq!(check_email("").unwrap_err().message, "Email is required");
        assert_eq!(check_name("Al").unwrap_err().message, "Name must be at least 3 characters");
    }

    #[test]
    fn portfolio_first_failure_wins() {
        assert_eq!(
            validate_portfolio(&input("", "nope", "")),
            PortfolioVerdict::Rejected("Please enter your name.")
        );
        assert_eq!(
            validate_portfolio(&input("Ada", "nope", "")),
            PortfolioVerdict::Rejected("Please enter a valid email address.")
        );
        assert_eq!(
            validate_portfolio(&input("Ada", "a@b.co", " ")),
            PortfolioVerdict::Rejected("Please enter a message.")
        );
        assert!(matches!(
            validate_portfolio(&input("Ada", "a@b.co", "hi")),
            PortfolioVerdict::Accepted(_)
        ));
    }

    #[test]
    fn honeypot_marks_spam() {
        let mut bot = input("Ada", "a@b.co", "hi");
        bot.honeypot = "http://spam".to_string();
        assert_eq!(validate_portfolio(&bot), PortfolioVerdict::Spam);
    }

    #[test]
    fn tracker_refuses_double_submit() {
        let mut tracker = SubmissionTracker::default();
        assert!(tracker.begin());
        assert_eq!(tracker.button_label(), "Submitting...");
        assert!(!tracker.begin());
        tracker.finish(true);
        assert_eq!(tracker.phase(), SubmissionPhase::Succeeded);
        assert!(tracker.begin());
    }
}
