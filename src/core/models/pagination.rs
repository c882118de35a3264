//! Offset pagination

use crate::utils::error::{Result, ServiceError};
use serde::Serialize;

pub const DEFAULT_LIMIT: u64 = 50;
pub const MAX_LIMIT: u64 = 100;

/// Validated `skip`/`limit` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// `skip >= 0`, `1 <= limit <= 100`; absent values take the defaults
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self> {
        let skip = match skip {
            None => 0,
            Some(skip) if skip >= 0 => skip as u64,
            Some(_) => {
                return Err(ServiceError::validation(
                    "\"skip\" must be larger than or equal to 0",
                ));
            }
        };

        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(limit) if limit < 1 => {
                return Err(ServiceError::validation(
                    "\"limit\" must be larger than or equal to 1",
                ));
            }
            Some(limit) if limit as u64 > MAX_LIMIT => {
                return Err(ServiceError::validation(format!(
                    "\"limit\" must be less than or equal to {}",
                    MAX_LIMIT
                )));
            }
            Some(limit) => limit as u64,
        };

        Ok(Self { skip, limit })
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub docs: Vec<T>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl<T> Page<T> {
    pub fn new(docs: Vec<T>, total: u64, pagination: Pagination) -> Self {
        Self {
            docs,
            total,
            limit: pagination.limit,
            offset: pagination.skip,
        }
    }

    /// Slice an already filtered and sorted collection
    pub fn from_sorted(items: Vec<T>, pagination: Pagination) -> Self {
        let total = items.len() as u64;
        let docs = items
            .into_iter()
            .skip(pagination.skip as usize)
            .take(pagination.limit as usize)
            .collect();
        Self::new(docs, total, pagination)
    }
}
