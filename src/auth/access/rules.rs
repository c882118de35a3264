//! Rule tables

use super::predicates::{AccessPredicate, Always, IsAuthenticated, IsUserProfileOwner};
use super::types::{Action, Category};
use crate::utils::error::{Result, ServiceError};
use std::collections::HashMap;
use std::sync::Arc;

/// One `{action, predicate}` entry
#[derive(Debug, Clone)]
pub struct AccessRule {
    pub action: Action,
    pub predicate: Arc<dyn AccessPredicate>,
}

/// Immutable rule table keyed by category
#[derive(Debug, Clone, Default)]
pub struct AccessRules {
    rules: HashMap<Category, Vec<AccessRule>>,
}

impl AccessRules {
    pub fn builder() -> AccessRulesBuilder {
        AccessRulesBuilder::default()
    }

    /// Rules of a category in registration order
    pub fn category(&self, category: Category) -> &[AccessRule] {
        self.rules.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Collects rules and checks each action against its category
#[derive(Debug, Default)]
pub struct AccessRulesBuilder {
    rules: HashMap<Category, Vec<AccessRule>>,
    error: Option<ServiceError>,
}

impl AccessRulesBuilder {
    pub fn rule<P>(mut self, category: Category, action: Action, predicate: P) -> Self
    where
        P: AccessPredicate + 'static,
    {
        if self.error.is_none() && category != Category::Any && action.category() != category {
            self.error = Some(ServiceError::config(format!(
                "Action {} cannot be registered under category {}",
                action, category
            )));
        }

        self.rules.entry(category).or_default().push(AccessRule {
            action,
            predicate: Arc::new(predicate),
        });
        self
    }

    pub fn build(self) -> Result<AccessRules> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(AccessRules { rules: self.rules }),
        }
    }
}

/// The service's rule table
///
/// Anyone may register. Accounts are only visible to and editable by their
/// owner; any authenticated account may list accounts and manage workers.
pub fn default_rules() -> Result<AccessRules> {
    AccessRules::builder()
        .rule(Category::Any, Action::UserCreate, Always)
        .rule(Category::User, Action::UserUpdatePassword, IsUserProfileOwner)
        .rule(Category::User, Action::UserUpdate, IsUserProfileOwner)
        .rule(Category::User, Action::UserGet, IsUserProfileOwner)
        .rule(Category::User, Action::UserDelete, IsUserProfileOwner)
        .rule(Category::User, Action::UserList, IsAuthenticated)
        .rule(Category::Worker, Action::WorkerCreate, IsAuthenticated)
        .rule(Category::Worker, Action::WorkerGet, IsAuthenticated)
        .rule(Category::Worker, Action::WorkerList, IsAuthenticated)
        .rule(Category::Worker, Action::WorkerUpdate, IsAuthenticated)
        .rule(Category::Worker, Action::WorkerDelete, IsAuthenticated)
        .build()
}
