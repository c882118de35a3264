//! Built-in rule predicates

use super::types::{AccessContext, Subject};
use std::fmt::Debug;

/// A boolean test over an [`AccessContext`]
pub trait AccessPredicate: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    fn evaluate(&self, context: &AccessContext) -> bool;
}

/// Grants unconditionally
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl AccessPredicate for Always {
    fn name(&self) -> &'static str {
        "always"
    }

    fn evaluate(&self, _context: &AccessContext) -> bool {
        true
    }
}

/// Some account is authenticated
#[derive(Debug, Clone, Copy, Default)]
pub struct IsAuthenticated;

impl AccessPredicate for IsAuthenticated {
    fn name(&self) -> &'static str {
        "isAuthenticated"
    }

    fn evaluate(&self, context: &AccessContext) -> bool {
        context.actor.is_some()
    }
}

/// The actor is the account the action targets; false when either is absent
#[derive(Debug, Clone, Copy, Default)]
pub struct IsUserProfileOwner;

impl AccessPredicate for IsUserProfileOwner {
    fn name(&self) -> &'static str {
        "isUserProfileOwner"
    }

    fn evaluate(&self, context: &AccessContext) -> bool {
        match (context.actor, context.subject) {
            (Some(actor), Subject::User(owner)) => actor.id == owner,
            _ => false,
        }
    }
}
