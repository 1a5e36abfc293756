//! Grant-based permission evaluation.
//!
//! A request is allowed iff the principal holds an explicit grant for the
//! (resource, action) pair the endpoint maps to. Everything else denies:
//! anonymous principals, unknown resources, unmapped methods, and grant
//! lookups that fail upstream all resolve to a deny.

use axum::http::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Resource kinds exposed by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Actor,
    Movie,
    Genre,
    Review,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Actor => "actor",
            Resource::Movie => "movie",
            Resource::Genre => "genre",
            Resource::Review => "review",
        }
    }

    /// Parse a stored resource string. Unknown strings yield `None` so a
    /// stale grant row can never widen access.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "actor" => Some(Resource::Actor),
            "movie" => Some(Resource::Movie),
            "genre" => Some(Resource::Genre),
            "review" => Some(Resource::Review),
            _ => None,
        }
    }
}

/// CRUD actions, derived from the HTTP method of the incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Action::Create),
            "read" => Some(Action::Read),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            _ => None,
        }
    }

    /// Map an HTTP method onto a CRUD action. Methods without a CRUD
    /// meaning (OPTIONS, TRACE, ...) map to `None` and are denied by the
    /// permission middleware.
    pub fn from_method(method: &Method) -> Option<Self> {
        match *method {
            Method::GET | Method::HEAD => Some(Action::Read),
            Method::POST => Some(Action::Create),
            Method::PUT | Method::PATCH => Some(Action::Update),
            Method::DELETE => Some(Action::Delete),
            _ => None,
        }
    }
}

/// An explicit authorization record: the principal may perform `action`
/// on resources of kind `resource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    pub resource: Resource,
    pub action: Action,
}

impl Grant {
    pub fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }
}

/// Read-only snapshot of a principal's grants, loaded once per request.
#[derive(Debug, Clone, Default)]
pub struct GrantSet {
    grants: HashSet<Grant>,
}

impl GrantSet {
    pub fn new(grants: impl IntoIterator<Item = Grant>) -> Self {
        Self {
            grants: grants.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn allows(&self, resource: Resource, action: Action) -> bool {
        self.grants.contains(&Grant::new(resource, action))
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

/// The identity making a request, as established by the upstream
/// authentication layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    User { id: String },
}

impl Principal {
    pub fn user(id: impl Into<String>) -> Self {
        Principal::User { id: id.into() }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::User { .. })
    }
}

/// Decide whether `principal` may perform `action` on `resource`.
///
/// Pure predicate over the grant snapshot: no side effects, default deny.
/// An anonymous principal is denied regardless of the grants passed in.
pub fn check(principal: &Principal, grants: &GrantSet, resource: Resource, action: Action) -> bool {
    match principal {
        Principal::Anonymous => false,
        Principal::User { .. } => grants.allows(resource, action),
    }
}
