//! Repository traits over the project and investment tables.
//!
//! Services only see these traits. [`SqlRepository`] backs them with a SeaORM
//! connection; test builds also get an in-memory implementation.

#[cfg(test)]
pub mod memory;
pub mod sql;

use crate::{
    errors::Result,
    models::{InvestmentRecord, ProjectRecord},
};
use async_trait::async_trait;

pub use sql::SqlRepository;

/// Storage operations for projects.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Loads one project together with its investments.
    async fn find_by_id(&self, id: i64) -> Result<Option<ProjectRecord>>;
    /// Loads every project together with its investments.
    async fn find_all(&self) -> Result<Vec<ProjectRecord>>;
    /// Inserts the project when `id` is `None`, otherwise overwrites the stored row.
    ///
    /// The record's investment list replaces the project's stored investment set.
    async fn save(&self, project: ProjectRecord) -> Result<ProjectRecord>;
    /// Deletes the project and its investments. Returns `false` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Storage operations for investments.
#[async_trait]
pub trait InvestmentRepository: Send + Sync {
    /// Loads one investment.
    async fn find_by_id(&self, id: i64) -> Result<Option<InvestmentRecord>>;
    /// Loads every investment that references `project_id`.
    async fn find_by_project_id(&self, project_id: i64) -> Result<Vec<InvestmentRecord>>;
    /// Loads every investment whose investor name equals `investor_name` exactly.
    async fn find_by_investor_name(&self, investor_name: &str) -> Result<Vec<InvestmentRecord>>;
    /// Inserts the investment when `id` is `None`, otherwise overwrites the stored row.
    async fn save(&self, investment: InvestmentRecord) -> Result<InvestmentRecord>;
    /// Deletes the investment. Returns `false` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool>;
}
