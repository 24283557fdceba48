//! Registry of known (resource, action) pairs.
//!
//! The permission table is an open string-keyed mapping; a typo in a
//! provisioned grant would otherwise surface as a silent deny at evaluation
//! time. Validating permission sets against this registry at
//! configuration-load time turns unknown pairs into a configuration error
//! instead.

use std::collections::{HashMap, HashSet};

use crate::error::AppError;
use crate::models::PermissionSet;

/// Known (resource, action) pairs accepted in permission grants.
#[derive(Debug, Clone)]
pub struct PermissionRegistry {
    known: HashMap<String, HashSet<String>>,
}

impl PermissionRegistry {
    /// Empty registry; accepts nothing until pairs are registered.
    pub fn new() -> Self {
        Self {
            known: HashMap::new(),
        }
    }

    /// Register `actions` as valid for `resource`.
    pub fn register<I, S>(&mut self, resource: impl Into<String>, actions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known
            .entry(resource.into())
            .or_default()
            .extend(actions.into_iter().map(Into::into));
    }

    /// Whether `(resource, action)` is a known pair.
    pub fn contains(&self, resource: &str, action: &str) -> bool {
        self.known
            .get(resource)
            .is_some_and(|actions| actions.contains(action))
    }

    /// Validate every entry of a permission set against the registry.
    ///
    /// Returns a configuration error naming the first unknown pair found.
    pub fn validate(&self, set: &PermissionSet) -> Result<(), AppError> {
        for (resource, actions) in set.iter() {
            for action in actions {
                if !self.contains(resource, action) {
                    return Err(AppError::Configuration(format!(
                        "unknown permission pair: {}:{}",
                        resource, action
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for PermissionRegistry {
    /// Registry of the pairs the application actually queries.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("defects", ["read", "create", "update", "delete", "manage"]);
        registry.register("attachments", ["read", "upload", "delete"]);
        registry.register("suppliers", ["read", "manage"]);
        registry.register("rbac", ["read", "manage"]);
        registry.register("workflow", ["read", "manage"]);
        registry.register("sla", ["read", "manage"]);
        registry
    }
}
