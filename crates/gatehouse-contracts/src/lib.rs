//! # gatehouse-contracts
//!
//! Shared types and contracts for the gatehouse access-control layer.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only the capability catalog, verdict types, identifier
//! newtypes, and error types.

pub mod actor;
pub mod capability;
pub mod error;
pub mod verdict;

pub use actor::{OrgId, SessionId};
pub use capability::Capability;
pub use error::{GatehouseError, GatehouseResult};
pub use verdict::{AccessQuery, Verdict};
