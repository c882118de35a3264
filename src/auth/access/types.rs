//! Access control types

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Rule table category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Rules that apply to every actor, ahead of any category
    #[serde(rename = "*")]
    Any,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "worker")]
    Worker,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Any => "*",
            Category::User => "user",
            Category::Worker => "worker",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named action guarded by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    UserCreate,
    UserGet,
    UserList,
    UserUpdate,
    UserUpdatePassword,
    UserDelete,
    WorkerCreate,
    WorkerGet,
    WorkerList,
    WorkerUpdate,
    WorkerDelete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::UserCreate => "user:create",
            Action::UserGet => "user:get",
            Action::UserList => "user:list",
            Action::UserUpdate => "user:update",
            Action::UserUpdatePassword => "user:update:password",
            Action::UserDelete => "user:delete",
            Action::WorkerCreate => "worker:create",
            Action::WorkerGet => "worker:get",
            Action::WorkerList => "worker:list",
            Action::WorkerUpdate => "worker:update",
            Action::WorkerDelete => "worker:delete",
        }
    }

    /// Category the action belongs to
    pub fn category(&self) -> Category {
        match self {
            Action::UserCreate
            | Action::UserGet
            | Action::UserList
            | Action::UserUpdate
            | Action::UserUpdatePassword
            | Action::UserDelete => Category::User,
            Action::WorkerCreate
            | Action::WorkerGet
            | Action::WorkerList
            | Action::WorkerUpdate
            | Action::WorkerDelete => Category::Worker,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
}

impl Principal {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// The record an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Collection-level actions (create, list)
    None,
    User(Uuid),
    Worker(Uuid),
}

/// Input to every predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessContext {
    pub actor: Option<Principal>,
    pub subject: Subject,
}

impl AccessContext {
    pub fn new(actor: Option<Principal>, subject: Subject) -> Self {
        Self { actor, subject }
    }

    /// No authenticated caller
    pub fn anonymous(subject: Subject) -> Self {
        Self::new(None, subject)
    }

    pub fn authenticated(actor: Uuid, subject: Subject) -> Self {
        Self::new(Some(Principal::new(actor)), subject)
    }
}
