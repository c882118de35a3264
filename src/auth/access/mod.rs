//! Access control evaluator
//!
//! Declarative rule tables map an action to a predicate over
//! `{actor, subject}`. Wildcard rules are consulted first and grant on their
//! own; otherwise the first rule of the action's category decides. Anything
//! without a rule is denied.

mod evaluator;
mod predicates;
mod rules;
mod types;

// Re-export public types and structs
pub use evaluator::AccessControl;
pub use predicates::{AccessPredicate, Always, IsAuthenticated, IsUserProfileOwner};
pub use rules::{AccessRule, AccessRules, AccessRulesBuilder, default_rules};
pub use types::{AccessContext, Action, Category, Principal, Subject};
