//! Access-list loading and membership checks.

use crate::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk document shape: a single `acl` root tag over the mapping.
#[derive(Debug, Deserialize)]
struct AclDocument {
    acl: Option<BTreeMap<String, Vec<String>>>,
}

/// An access-control list keyed by environment and the actors that may
/// act in it.
///
/// A list is either *initialized* (loaded from a document, possibly with
/// zero environments) or *uninitialized* (constructed via [`Default`] and
/// never loaded). Querying an uninitialized list is a caller bug and is
/// surfaced as [`Error::Uninitialized`] rather than masked as a denial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessList {
    environments: Option<BTreeMap<String, Vec<String>>>,
}

impl AccessList {
    /// Load an access list from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read(path.as_ref())?;
        Self::parse(&raw)
    }

    /// Parse an access list from raw YAML bytes.
    ///
    /// An empty document, or one without the `acl` root tag, parses as an
    /// initialized list with zero environments. Malformed YAML and
    /// documents where the tag holds anything other than a mapping of
    /// actor sequences fail with [`Error::Parse`].
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let doc: Option<AclDocument> =
            serde_yaml::from_slice(bytes).map_err(|e| Error::Parse(e.to_string()))?;

        Ok(Self {
            environments: Some(doc.and_then(|d| d.acl).unwrap_or_default()),
        })
    }

    /// Check whether `actor` may act in `environment`.
    ///
    /// Returns `Ok(false)` when the environment is listed but the actor
    /// is not in its sequence. Matching is exact: case-sensitive, no
    /// normalization. Fails with [`Error::Uninitialized`] on a list that
    /// was never loaded and [`Error::UndefinedEnvironment`] when the
    /// environment has no entry at all.
    pub fn can_access(&self, actor: &str, environment: &str) -> Result<bool> {
        Ok(self.actors(environment)?.iter().any(|entry| entry == actor))
    }

    /// The actor sequence for one environment, in file order.
    pub fn actors(&self, environment: &str) -> Result<&[String]> {
        let environments = self.environments.as_ref().ok_or(Error::Uninitialized)?;
        environments
            .get(environment)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UndefinedEnvironment(environment.to_string()))
    }

    /// Environment names present in the list, in sorted order.
    pub fn environments(&self) -> Result<Vec<&str>> {
        let environments = self.environments.as_ref().ok_or(Error::Uninitialized)?;
        Ok(environments.keys().map(String::as_str).collect())
    }

    /// Whether the list has been loaded from a document.
    pub fn is_initialized(&self) -> bool {
        self.environments.is_some()
    }
}
