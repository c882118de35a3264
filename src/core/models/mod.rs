//! Domain models

pub mod pagination;
pub mod user;
pub mod worker;

pub use pagination::{DEFAULT_LIMIT, MAX_LIMIT, Page, Pagination};
pub use user::{NewUser, PasswordUpdate, User, UserListQuery, UserUpdate};
pub use worker::{Contacts, Gender, NewWorker, Worker, WorkerListQuery, WorkerUpdate};
