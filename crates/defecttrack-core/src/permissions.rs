//! Permission evaluator
//!
//! Decides whether an acting user may perform a given action on a given
//! resource. Denial is a normal result, not an error; callers render or log
//! it without unwinding.

use serde::{Deserialize, Serialize};

use crate::models::{Actor, UserRole};

/// Outcome of a permission query as seen by a rendering caller.
///
/// `Pending` means permission data has not been loaded yet; the caller must
/// suppress its rendering decision rather than defaulting to allow or deny.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Pending,
    Granted,
    Denied,
}

impl Decision {
    /// Whether the query resolved to a grant. `Pending` is not a grant.
    pub fn is_granted(self) -> bool {
        self == Decision::Granted
    }
}

/// Evaluate whether `actor` may perform `action` on `resource`.
///
/// With `allow_admin` set, admin actors are granted unconditionally. The
/// admin check honors both the precomputed `is_admin` flag and a direct role
/// comparison: some call sites only have one of the two signals available,
/// and either alone must suffice.
pub fn evaluate(actor: &Actor, resource: &str, action: &str, allow_admin: bool) -> bool {
    if allow_admin && (actor.is_admin || actor.role == UserRole::Admin) {
        return true;
    }
    actor.permissions.allows(resource, action)
}

/// Imperative permission check with the admin bypass enabled.
pub fn can(actor: &Actor, resource: &str, action: &str) -> bool {
    evaluate(actor, resource, action, true)
}

/// Tri-state permission query for rendering callers.
///
/// `loaded` is `None` until the identity provider has delivered the actor's
/// permission data; until then every query answers `Pending`.
pub fn query(loaded: Option<&Actor>, resource: &str, action: &str, allow_admin: bool) -> Decision {
    match loaded {
        None => Decision::Pending,
        Some(actor) => {
            if evaluate(actor, resource, action, allow_admin) {
                Decision::Granted
            } else {
                Decision::Denied
            }
        }
    }
}
