//! Static access-control lists for gating automation environments.
//!
//! This crate answers one question: may this actor act in this
//! environment? The answer comes from a read-only YAML document keyed by
//! a single `acl` root tag, mapping each environment name to the actors
//! allowed in it:
//!
//! ```yaml
//! acl:
//!   staging:
//!     - alice
//!     - bob
//!   production:
//!     - alice
//! ```
//!
//! The list is loaded once, never mutated, and queried with
//! [`AccessList::can_access`]. An environment missing from the document
//! is an error (the environment was never granted to anyone), while an
//! environment with an empty actor sequence legitimately denies everyone.
//!
//! # Example
//!
//! ```
//! use access::AccessList;
//!
//! let list = AccessList::parse(b"acl:\n  staging:\n    - alice\n")?;
//!
//! assert!(list.can_access("alice", "staging")?);
//! assert!(!list.can_access("mallory", "staging")?);
//! # Ok::<(), access::Error>(())
//! ```

mod error;
mod list;

pub use error::{Error, Result};
pub use list::AccessList;
