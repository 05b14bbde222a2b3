use crate::core::credential::Credential;

/// Where a session stands with respect to authentication.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthState {
    /// Waiting for a PIN, with this many attempts left before lockout.
    AwaitingPin { remaining: u32 },
    Authenticated,
    /// Attempts exhausted. Terminal; the session is over.
    Locked
}

/// Result of feeding one candidate PIN to the gate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PinOutcome {
    Accepted,
    Rejected { remaining: u32 },
    LockedOut
}

/// Bounded-retry authentication gate, driven by discrete verify events
/// so it composes with any UI event model. Attempt counts live only in
/// memory; a new session always starts with the full allowance.
pub struct AuthGate {
    state: AuthState
}

impl AuthGate {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    pub fn new(max_attempts: u32) -> AuthGate {
        AuthGate { state: AuthState::AwaitingPin { remaining: max_attempts } }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    pub fn is_locked(&self) -> bool {
        self.state == AuthState::Locked
    }

    /// Feeds one candidate PIN. A correct PIN authenticates; a wrong
    /// one burns an attempt, and burning the last attempt locks the
    /// gate. The terminal states absorb further submissions.
    pub fn submit(&mut self, credential: &Credential, candidate: &str) -> PinOutcome {
        match self.state {
            AuthState::Authenticated => PinOutcome::Accepted,
            AuthState::Locked => PinOutcome::LockedOut,
            AuthState::AwaitingPin { remaining } => {
                if credential.verify(candidate) {
                    self.state = AuthState::Authenticated;
                    return PinOutcome::Accepted;
                }
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.state = AuthState::Locked;
                    return PinOutcome::LockedOut;
                }
                self.state = AuthState::AwaitingPin { remaining };
                return PinOutcome::Rejected { remaining };
            }
        }
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        AuthGate::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}
