//! Authorization flow state machine.
//!
//! Tracks which call is legal next and which ids it needs. [`AuthFlow`] performs
//! no I/O: the caller makes each call (usually through [`crate::client`]) and feeds
//! the outcome back with the matching `on_*` method.
//!
//! ```text
//! Start ─────────────── init ──────────▶ TokenProcessStarted
//! Start / loop-back ─── context-get ───▶ ContextObtained
//! ContextObtained ───── session ───────▶ SessionActive
//! SessionActive ─────── session ───────▶ SessionActive (resend)
//! ContextObtained ───── check ─────────▶ SessionActive (session already open)
//! SessionActive ─────── check ─────────▶ Verified
//! Verified ──────────── init ──────────▶ TokenProcessStarted
//! Ready / carried ───── execute ───────▶ TokenIssued
//! ```

pub mod state;

pub use state::{FlowState, NextStep};

use crate::domain::auth_check::{
    CheckoutAuthCheck, CheckoutAuthCheckError, CheckoutAuthCheckRequest,
};
use crate::domain::auth_context::{
    AuthContext, CheckoutAuthContextGetError, CheckoutAuthContextGetRequest,
};
use crate::domain::auth_session::{
    CheckoutAuthSessionGenerate, CheckoutAuthSessionGenerateError,
    CheckoutAuthSessionGenerateRequest,
};
use crate::domain::auth_state::AuthTypeState;
use crate::domain::token_issue::{
    CheckoutTokenIssueExecuteError, CheckoutTokenIssueExecuteRequest,
    CheckoutTokenIssueInitRequest, TokenIssueProcess,
};
use crate::protocol::{Endpoint, RefusedError};
use crate::shared::AuthType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("{operation} is not allowed in state {state}")]
    InvalidTransition {
        state: &'static str,
        operation: &'static str,
    },

    #[error("{0} does not use sessions")]
    SessionNotRequired(AuthType),

    #[error("{0} needs an active session")]
    SessionRequired(AuthType),

    #[error("{0} is not offered by the auth context")]
    UnknownAuthType(AuthType),
}

/// One authorization / token-issue flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFlow {
    state: FlowState,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::Start,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    fn invalid(&self, operation: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            state: self.state.name(),
            operation,
        }
    }

    // ── Auth context ─────────────────────────────────────────────────────

    /// Record a fetched context. Also the loop-back after `AuthRequired`.
    pub fn on_context(&mut self, context: AuthContext) -> Result<(), FlowError> {
        let process = match &self.state {
            FlowState::Start => None,
            FlowState::ContextObtained { process, .. }
            | FlowState::SessionActive { process, .. } => process.clone(),
            FlowState::TokenProcessStarted { process } if process.auth_required => {
                Some(process.clone())
            }
            _ => return Err(self.invalid(CheckoutAuthContextGetRequest::NAME)),
        };
        self.state = FlowState::ContextObtained { context, process };
        Ok(())
    }

    // ── Session ──────────────────────────────────────────────────────────

    /// Request for a new session of `auth_type`, if the flow allows one.
    ///
    /// Allowed from `SessionActive` as well, to resend a code or switch method.
    pub fn session_request(
        &self,
        auth_type: AuthType,
    ) -> Result<CheckoutAuthSessionGenerateRequest, FlowError> {
        let context = self.session_context()?;
        let method = offered(context, auth_type)?;
        if !method.is_session_required {
            return Err(FlowError::SessionNotRequired(auth_type));
        }
        Ok(CheckoutAuthSessionGenerateRequest::new(
            &context.auth_context_id,
            auth_type,
        ))
    }

    pub fn on_session_generated(
        &mut self,
        auth_type: AuthType,
        response: &CheckoutAuthSessionGenerate,
    ) -> Result<(), FlowError> {
        self.session_request(auth_type)?;
        let context = with_state(self.session_context()?, &response.result);
        let process = self.state.process().cloned();
        self.state = FlowState::SessionActive {
            context,
            auth_type,
            session: response.result.active_session,
            process,
        };
        Ok(())
    }

    fn session_context(&self) -> Result<&AuthContext, FlowError> {
        match &self.state {
            FlowState::ContextObtained { context, .. }
            | FlowState::SessionActive { context, .. } => Ok(context),
            _ => Err(self.invalid(CheckoutAuthSessionGenerateRequest::NAME)),
        }
    }

    // ── Check ────────────────────────────────────────────────────────────

    fn checkable(&self, auth_type: AuthType) -> Result<&AuthContext, FlowError> {
        match &self.state {
            FlowState::SessionActive {
                context,
                auth_type: active,
                ..
            } if *active == auth_type => Ok(context),
            FlowState::ContextObtained { context, .. } => {
                let method = offered(context, auth_type)?;
                if method.is_session_required && !method.has_active_session() {
                    return Err(FlowError::SessionRequired(auth_type));
                }
                Ok(context)
            }
            _ => Err(self.invalid(CheckoutAuthCheckRequest::NAME)),
        }
    }

    /// A method whose session is already open on the server moves the flow to
    /// `SessionActive`, so that refusals update its attempt counters.
    fn resume_session(&mut self, auth_type: AuthType) -> Result<(), FlowError> {
        let FlowState::ContextObtained { context, process } = &self.state else {
            return Ok(());
        };
        let Some(session) = offered(context, auth_type)?.active_session else {
            return Ok(());
        };
        self.state = FlowState::SessionActive {
            context: context.clone(),
            auth_type,
            session: Some(session),
            process: process.clone(),
        };
        Ok(())
    }

    /// Request submitting `answer` for `auth_type`, if the flow allows it.
    ///
    /// Checking a method with an open session enters `SessionActive`.
    pub fn check_request(
        &mut self,
        auth_type: AuthType,
        answer: impl Into<String>,
    ) -> Result<CheckoutAuthCheckRequest, FlowError> {
        let context = self.checkable(auth_type)?;
        let request = CheckoutAuthCheckRequest::new(&context.auth_context_id, auth_type, answer);
        self.resume_session(auth_type)?;
        Ok(request)
    }

    pub fn on_checked(
        &mut self,
        auth_type: AuthType,
        response: &CheckoutAuthCheck,
    ) -> Result<(), FlowError> {
        let context = match &response.result {
            Some(updated) => with_state(self.checkable(auth_type)?, updated),
            None => self.checkable(auth_type)?.clone(),
        };
        let process = self.state.process().cloned();
        self.state = FlowState::Verified {
            context,
            auth_type,
            process,
        };
        Ok(())
    }

    // ── Token issue ──────────────────────────────────────────────────────

    /// Record a started process.
    pub fn on_token_issue_init(&mut self, process: TokenIssueProcess) -> Result<(), FlowError> {
        if !matches!(
            self.state,
            FlowState::Start | FlowState::ContextObtained { .. } | FlowState::Verified { .. }
        ) {
            return Err(self.invalid(CheckoutTokenIssueInitRequest::NAME));
        }
        self.state = FlowState::TokenProcessStarted { process };
        Ok(())
    }

    fn ready_process(&self) -> Result<&TokenIssueProcess, FlowError> {
        match &self.state {
            FlowState::TokenProcessStarted { process } if !process.auth_required => Ok(process),
            FlowState::Verified {
                process: Some(process),
                ..
            } => Ok(process),
            _ => Err(self.invalid(CheckoutTokenIssueExecuteRequest::NAME)),
        }
    }

    pub fn execute_request(&self) -> Result<CheckoutTokenIssueExecuteRequest, FlowError> {
        let process = self.ready_process()?;
        Ok(CheckoutTokenIssueExecuteRequest::new(&process.process_id))
    }

    pub fn on_token_issued(&mut self) -> Result<(), FlowError> {
        self.ready_process()?;
        self.state = FlowState::TokenIssued;
        Ok(())
    }

    // ── Refusals ─────────────────────────────────────────────────────────

    /// Apply an endpoint refusal to the flow.
    ///
    /// The refusal must belong to a call the current state allows.
    pub fn on_refused(&mut self, error: &RefusedError) -> Result<(), FlowError> {
        match *error {
            RefusedError::AuthContextGet(CheckoutAuthContextGetError::InvalidContext) => {
                match &self.state {
                    FlowState::Start
                    | FlowState::ContextObtained { .. }
                    | FlowState::SessionActive { .. } => {}
                    FlowState::TokenProcessStarted { process } if process.auth_required => {}
                    _ => return Err(self.invalid(CheckoutAuthContextGetRequest::NAME)),
                }
                self.state = FlowState::Start;
            }

            RefusedError::AuthSessionGenerate(code) => {
                self.session_context()?;
                if code == CheckoutAuthSessionGenerateError::InvalidContext {
                    self.state = FlowState::Start;
                }
            }

            RefusedError::AuthCheck(code) => self.on_check_refused(code)?,

            RefusedError::TokenIssueInit(_) => {
                if !matches!(
                    self.state,
                    FlowState::Start
                        | FlowState::ContextObtained { .. }
                        | FlowState::Verified { .. }
                ) {
                    return Err(self.invalid(CheckoutTokenIssueInitRequest::NAME));
                }
            }

            RefusedError::TokenIssueExecute(code) => {
                let mut process = self.ready_process()?.clone();
                self.state = match code {
                    CheckoutTokenIssueExecuteError::AuthRequired => {
                        process.auth_required = true;
                        FlowState::TokenProcessStarted { process }
                    }
                    CheckoutTokenIssueExecuteError::AuthExpired => FlowState::Start,
                };
            }
        }
        Ok(())
    }

    fn on_check_refused(&mut self, code: CheckoutAuthCheckError) -> Result<(), FlowError> {
        let (context, process) = match &self.state {
            FlowState::SessionActive {
                context, process, ..
            }
            | FlowState::ContextObtained { context, process } => (context.clone(), process.clone()),
            _ => return Err(self.invalid(CheckoutAuthCheckRequest::NAME)),
        };

        match code {
            CheckoutAuthCheckError::InvalidContext => self.state = FlowState::Start,
            CheckoutAuthCheckError::InvalidAnswer => {
                if let FlowState::SessionActive {
                    context,
                    auth_type,
                    session: Some(session),
                    ..
                } = &mut self.state
                {
                    session.attempts_left = session.attempts_left.saturating_sub(1);
                    if let Some(method) = context
                        .auth_types
                        .iter_mut()
                        .find(|s| s.auth_type() == *auth_type)
                    {
                        method.active_session = Some(*session);
                    }
                }
            }
            CheckoutAuthCheckError::SessionDoesNotExist
            | CheckoutAuthCheckError::SessionExpired
            | CheckoutAuthCheckError::VerifyAttemptsExceeded
            | CheckoutAuthCheckError::UnsupportedAuthType => {
                self.state = FlowState::ContextObtained { context, process };
            }
        }
        Ok(())
    }

    // ── Guidance ─────────────────────────────────────────────────────────

    /// The call to make next. In `ContextObtained` the method is picked with
    /// [`AuthContext::preferred_auth_type`].
    pub fn next_step(&self) -> NextStep {
        match &self.state {
            FlowState::Start => NextStep::InitTokenIssue,
            FlowState::ContextObtained { context, .. } => {
                let Some(auth_type) = context.preferred_auth_type() else {
                    return NextStep::NoAuthMethod;
                };
                let auth_context_id = context.auth_context_id.clone();
                match context.state(auth_type) {
                    Some(method) if method.is_session_required && !method.has_active_session() => {
                        NextStep::GenerateSession {
                            auth_context_id,
                            auth_type,
                        }
                    }
                    _ => NextStep::CheckAnswer {
                        auth_context_id,
                        auth_type,
                    },
                }
            }
            FlowState::SessionActive {
                context, auth_type, ..
            } => NextStep::CheckAnswer {
                auth_context_id: context.auth_context_id.clone(),
                auth_type: *auth_type,
            },
            FlowState::Verified { process, .. } => match process {
                Some(process) => NextStep::ExecuteTokenIssue {
                    process_id: process.process_id.clone(),
                },
                None => NextStep::InitTokenIssue,
            },
            FlowState::TokenProcessStarted { process } if process.auth_required => {
                NextStep::GetAuthContext {
                    auth_context_id: process.auth_context_id.clone(),
                }
            }
            FlowState::TokenProcessStarted { process } => NextStep::ExecuteTokenIssue {
                process_id: process.process_id.clone(),
            },
            FlowState::TokenIssued => NextStep::Done,
        }
    }
}

fn offered(context: &AuthContext, auth_type: AuthType) -> Result<&AuthTypeState, FlowError> {
    context
        .state(auth_type)
        .ok_or(FlowError::UnknownAuthType(auth_type))
}

/// Copy of `context` with the entry for `updated`'s type replaced.
fn with_state(context: &AuthContext, updated: &AuthTypeState) -> AuthContext {
    let mut context = context.clone();
    if let Some(slot) = context
        .auth_types
        .iter_mut()
        .find(|s| s.auth_type() == updated.auth_type())
    {
        *slot = updated.clone();
    }
    context
}
