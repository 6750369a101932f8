#![forbid(unsafe_code)]

//! Confirmation barrier in front of destructive mutations.
//!
//! The gate holds the pending action itself, so nothing is applied until the
//! user answers and a cancelled request leaves no trace.

pub const REMOVE_TASK: &str = "Are you sure you want to remove this task?";
pub const CLEAR_COMPLETED: &str = "Are you sure you want to clear all completed tasks?";
pub const CLEAR_MATCHING: &str = "Are you sure you want to remove the matching tasks?";
pub const REMOVE_CART_LINE: &str = "Remove this item from your cart?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

impl From<bool> for Decision {
    fn from(value: bool) -> Self {
        if value { Self::Confirm } else { Self::Cancel }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateState<A> {
    Idle,
    AwaitingConfirmation { message: String, action: A },
    Confirmed,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("a confirmation is already pending")]
    AlreadyAwaiting,
    #[error("no confirmation is pending")]
    NotAwaiting,
}

/// Synchronous yes/no capability (a dialog, a terminal prompt, a test stub).
pub trait Confirmer {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirmer for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Answers every question the same way.
#[derive(Clone, Copy, Debug)]
pub struct FixedAnswer(pub bool);

impl Confirmer for FixedAnswer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct ConfirmationGate<A> {
    state: GateState<A>,
}

impl<A> Default for ConfirmationGate<A> {
    fn default() -> Self {
        Self {
            state: GateState::Idle,
        }
    }
}

impl<A> ConfirmationGate<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GateState<A> {
        &self.state
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.state, GateState::AwaitingConfirmation { .. })
    }

    pub fn pending_message(&self) -> Option<&str> {
        match &self.state {
            GateState::AwaitingConfirmation { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn request(&mut self, message: impl Into<String>, action: A) -> Result<(), GateError> {
        if self.is_awaiting() {
            return Err(GateError::AlreadyAwaiting);
        }
        self.state = GateState::AwaitingConfirmation {
            message: message.into(),
            action,
        };
        Ok(())
    }

    /// Settles the pending request; the action comes back only when confirmed.
    pub fn resolve(&mut self, decision: Decision) -> Result<Option<A>, GateError> {
        let settled = match decision {
            Decision::Confirm => GateState::Confirmed,
            Decision::Cancel => GateState::Cancelled,
        };
        match std::mem::replace(&mut self.state, settled) {
            GateState::AwaitingConfirmation { action, .. } => Ok(match decision {
                Decision::Confirm => Some(action),
                Decision::Cancel => None,
            }),
            previous => {
                self.state = previous;
                Err(GateError::NotAwaiting)
            }
        }
    }

    /// Puts the pending question to `confirmer` and turns the reply into a decision.
    pub fn consult(&self, confirmer: &mut dyn Confirmer) -> Result<Decision, GateError> {
        let message = self.pending_message().ok_or(GateError::NotAwaiting)?;
        Ok(Decision::from(confirmer.confirm(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_request_returns_action() {
        let mut gate = ConfirmationGate::new();
        gate.request(REMOVE_TASK, 7u64).expect("request");
        assert!(gate.is_awaiting());
        assert_eq!(gate.pending_message(), Some(REMOVE_TASK));
        assert_eq!(gate.resolve(Decision::Confirm).expect("resolve"), Some(7));
        assert_eq!(gate.state(), &GateState::Confirmed);
    }

    #[test]
    fn cancelled_request_drops_action() {
        let mut gate = ConfirmationGate::new();
        gate.request(REMOVE_TASK, "x").expect("request");
        assert_eq!(gate.resolve(Decision::Cancel).expect("resolve"), None);
        assert_eq!(gate.state(), &GateState::Cancelled);
    }

    #[test]
    fn second_request_while_awaiting_is_refused() {
        let mut gate = ConfirmationGate::new();
        gate.request(REMOVE_TASK, 1).expect("request");
        assert_eq!(gate.request(CLEAR_COMPLETED, 2), Err(GateError::AlreadyAwaiting));
        assert_eq!(gate.resolve(Decision::Confirm).expect("resolve"), Some(1));
    }

    #[test]
    fn resolve_without_request_keeps_state() {
        let mut gate: ConfirmationGate<u8> = ConfirmationGate::new();
        assert_eq!(gate.resolve(Decision::Confirm), Err(GateError::NotAwaiting));
        assert_eq!(gate.state(), &GateState::Idle);
    }

    #[test]
    fn consult_routes_message_through_confirmer() {
        let mut seen = Vec::new();
        let mut confirmer = |message: &str| {
            seen.push(message.to_string());
            false
        };
        let mut gate = ConfirmationGate::new();
        gate.request(CLEAR_COMPLETED, ()).expect("request");
        assert_eq!(gate.consult(&mut confirmer).expect("consult"), Decision::Cancel);
        assert!(gate.is_awaiting());
        assert_eq!(gate.resolve(Decision::Cancel).expect("resolve"), None);
        assert_eq!(seen, vec![CLEAR_COMPLETED.to_string()]);
    }

    #[test]
    fn consult_without_request_is_refused() {
        let gate: ConfirmationGate<u8> = ConfirmationGate::new();
        assert_eq!(
            gate.consult(&mut FixedAnswer(true)),
            Err(GateError::NotAwaiting)
        );
    }
}
