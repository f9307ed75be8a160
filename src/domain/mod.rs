//! Domain modules organized as vertical slices, one per API operation group.
//!
//! Each sub-module contains:
//! - `mod.rs`: Request/response types, the endpoint descriptor, refusal codes
//! - `wire.rs`: Raw serde structs matching the JSON envelopes
//! - `convert.rs`: `From`/`TryFrom` conversions between wire and domain types
//! - `client.rs`: Sub-client with the async call (feature `http`)

pub mod auth_check;
pub mod auth_context;
pub mod auth_session;
pub mod auth_state;
pub mod merchant;
pub mod token_issue;
