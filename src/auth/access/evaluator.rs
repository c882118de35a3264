//! Rule evaluation

use super::rules::{AccessRules, default_rules};
use super::types::{AccessContext, Action, Category};
use crate::utils::error::{Result, ServiceError};
use tracing::{debug, warn};

/// Evaluates actions against a rule table
#[derive(Debug, Clone)]
pub struct AccessControl {
    rules: AccessRules,
}

impl AccessControl {
    pub fn new(rules: AccessRules) -> Self {
        Self { rules }
    }

    /// Evaluator over [`default_rules`]
    pub fn with_default_rules() -> Result<Self> {
        Ok(Self::new(default_rules()?))
    }

    /// Whether the context may perform `action` under `category`
    pub fn check_access(
        &self,
        category: Category,
        action: Action,
        context: &AccessContext,
    ) -> bool {
        let wildcard = self
            .rules
            .category(Category::Any)
            .iter()
            .any(|rule| rule.action == action && rule.predicate.evaluate(context));
        if wildcard {
            debug!("Access to {} granted by wildcard rule", action);
            return true;
        }

        match self
            .rules
            .category(category)
            .iter()
            .find(|rule| rule.action == action)
        {
            Some(rule) => {
                let granted = rule.predicate.evaluate(context);
                debug!(
                    "Access to {} evaluated by {}: {}",
                    action,
                    rule.predicate.name(),
                    granted
                );
                granted
            }
            None => {
                debug!("No rule for {} in category {}", action, category);
                false
            }
        }
    }

    /// [`check_access`](Self::check_access) in the action's own category, denial as `Forbidden`
    pub fn authorize(&self, action: Action, context: &AccessContext) -> Result<()> {
        if self.check_access(action.category(), action, context) {
            Ok(())
        } else {
            warn!(
                "Access denied: {} for actor {:?}",
                action,
                context.actor.map(|actor| actor.id)
            );
            Err(ServiceError::forbidden("Access denied"))
        }
    }
}
