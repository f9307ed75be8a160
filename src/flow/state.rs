//! Flow states and the next-step hint derived from them.

use crate::domain::auth_context::AuthContext;
use crate::domain::auth_state::ActiveSession;
use crate::domain::token_issue::TokenIssueProcess;
use crate::shared::AuthType;

/// Where an authorization / token-issue flow currently stands.
///
/// A process that came back with `AuthRequired` is carried through the auth
/// states so that a verified user can execute it without a new init.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Start,
    ContextObtained {
        context: AuthContext,
        process: Option<TokenIssueProcess>,
    },
    SessionActive {
        context: AuthContext,
        auth_type: AuthType,
        /// Locally tracked counters; `attempts_left` drops on every wrong answer.
        session: Option<ActiveSession>,
        process: Option<TokenIssueProcess>,
    },
    Verified {
        context: AuthContext,
        auth_type: AuthType,
        process: Option<TokenIssueProcess>,
    },
    /// `process.auth_required` tells the two sub-states apart.
    TokenProcessStarted { process: TokenIssueProcess },
    TokenIssued,
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Start => "Start",
            FlowState::ContextObtained { .. } => "ContextObtained",
            FlowState::SessionActive { .. } => "SessionActive",
            FlowState::Verified { .. } => "Verified",
            FlowState::TokenProcessStarted { process } if process.auth_required => {
                "TokenProcessStarted(AuthRequired)"
            }
            FlowState::TokenProcessStarted { .. } => "TokenProcessStarted(Ready)",
            FlowState::TokenIssued => "TokenIssued",
        }
    }

    pub fn context(&self) -> Option<&AuthContext> {
        match self {
            FlowState::ContextObtained { context, .. }
            | FlowState::SessionActive { context, .. }
            | FlowState::Verified { context, .. } => Some(context),
            _ => None,
        }
    }

    pub fn process(&self) -> Option<&TokenIssueProcess> {
        match self {
            FlowState::ContextObtained { process, .. }
            | FlowState::SessionActive { process, .. }
            | FlowState::Verified { process, .. } => process.as_ref(),
            FlowState::TokenProcessStarted { process } => Some(process),
            FlowState::Start | FlowState::TokenIssued => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::TokenIssued)
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The call a caller should make next, with the ids it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    /// `token-issue-init`; the server answers with a context when auth is needed.
    InitTokenIssue,
    /// `auth-context-get` for this context.
    GetAuthContext { auth_context_id: String },
    /// `auth-session-generate`.
    GenerateSession {
        auth_context_id: String,
        auth_type: AuthType,
    },
    /// `auth-check` with the user's answer.
    CheckAnswer {
        auth_context_id: String,
        auth_type: AuthType,
    },
    /// `token-issue-execute`.
    ExecuteTokenIssue { process_id: String },
    /// The context offers no enabled method; the flow cannot continue.
    NoAuthMethod,
    Done,
}
