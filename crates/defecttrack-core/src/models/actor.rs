use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// User role for authorization
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Sqa,
    Supplier,
    Viewer,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Sqa => write!(f, "sqa"),
            UserRole::Supplier => write!(f, "supplier"),
            UserRole::Viewer => write!(f, "viewer"),
        }
    }
}

/// Mapping from resource name to the set of actions the holder may perform
/// on it. Resources and actions are opaque strings matched by exact equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionSet {
    entries: HashMap<String, HashSet<String>>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `action` is allowed on `resource`.
    pub fn grant(&mut self, resource: impl Into<String>, action: impl Into<String>) {
        self.entries
            .entry(resource.into())
            .or_default()
            .insert(action.into());
    }

    /// Whether this set contains an entry for `resource` whose action set
    /// contains `action`. A missing resource and a missing action both
    /// answer `false`.
    pub fn allows(&self, resource: &str, action: &str) -> bool {
        self.entries
            .get(resource)
            .is_some_and(|actions| actions.contains(action))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (resource, actions) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.entries.iter().map(|(r, a)| (r.as_str(), a))
    }
}

impl FromIterator<(String, String)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (resource, action) in iter {
            set.grant(resource, action);
        }
        set
    }
}

/// The authenticated identity attempting an action.
///
/// Created at authentication time by the identity provider, immutable for
/// the duration of a request. `is_admin` is derived once from the role at
/// construction and is the authoritative admin signal; the evaluator still
/// honors a direct role comparison for call sites that construct an actor
/// with an out-of-band flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub role: UserRole,
    pub is_admin: bool,
    pub permissions: PermissionSet,
    /// Supplier identifier for supplier-portal accounts; `None` for
    /// internal users.
    pub supplier: Option<String>,
}

impl Actor {
    /// Create an actor, deriving `is_admin` from the role.
    pub fn new(role: UserRole, permissions: PermissionSet) -> Self {
        Self {
            is_admin: role == UserRole::Admin,
            role,
            permissions,
            supplier: None,
        }
    }

    /// Create an actor from an identity provider that supplies the admin
    /// flag directly (e.g. a session token that carries it precomputed).
    pub fn with_admin_flag(role: UserRole, is_admin: bool, permissions: PermissionSet) -> Self {
        Self {
            role,
            is_admin,
            permissions,
            supplier: None,
        }
    }

    /// Create a supplier-portal actor acting on behalf of `supplier`.
    /// Supplier accounts carry no explicit permission grants; their access
    /// is ownership-scoped.
    pub fn supplier_account(supplier: impl Into<String>) -> Self {
        Self {
            role: UserRole::Supplier,
            is_admin: false,
            permissions: PermissionSet::new(),
            supplier: Some(supplier.into()),
        }
    }

    /// Attach a supplier identifier to this actor.
    pub fn acting_for(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }
}
