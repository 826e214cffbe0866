//! # gatehouse-core
//!
//! The default-deny permission resolver and collaborator traits for the
//! gatehouse access layer.
//!
//! This crate provides:
//! - The three collaborator traits (`Entitlements`, `IdentityProvider`,
//!   `Navigator`)
//! - The `ActorSnapshot` model read by every evaluation
//! - The pure `resolve()` function and its `access_query()` projection
//! - `SessionFeed`, an observable in-memory identity provider
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gatehouse_core::{resolve, snapshot::ActorSnapshot};
//! use gatehouse_contracts::Capability;
//!
//! let verdict = resolve(&snapshot, Capability::AiAnalysisUse);
//! ```

pub mod resolver;
pub mod session;
pub mod snapshot;
pub mod traits;

pub use resolver::{access_query, resolve};
pub use session::SessionFeed;
pub use snapshot::{ActorSnapshot, Membership};
