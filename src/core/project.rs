//! Project business logic - create, update, delete and lookups.
//!
//! Updates are full overwrites: every business field, including the investment list,
//! is taken from the supplied payload. The funding goal is only checked on create.

use crate::{
    errors::{Error, Result},
    models::{ProjectDto, ProjectRecord},
    repository::ProjectRepository,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Project operations over an injected repository.
#[derive(Clone)]
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    /// Creates a service that stores projects in `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// Persists a new project and returns it with its assigned id.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `data` is absent
    /// - `goal_amount` is negative
    /// - The database insert operation fails
    pub async fn create_project(&self, data: Option<ProjectDto>) -> Result<ProjectDto> {
        let Some(dto) = data else {
            return Err(Error::invalid_data("Data is not valid"));
        };
        if dto.goal_amount < 0.0 {
            return Err(Error::invalid_data("Data is not valid"));
        }

        let mut record = ProjectRecord::from(dto);
        record.id = None;
        for investment in &mut record.investments {
            investment.id = None;
        }

        let saved = self.repository.save(record).await?;
        info!(project_id = ?saved.id, name = %saved.name, "created project");
        Ok(saved.into())
    }

    /// Overwrites name, description, goal, amount raised and investments of project `id`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No project exists with `id`
    /// - `data` is absent
    /// - The database update operation fails
    pub async fn update_project(&self, id: i64, data: Option<ProjectDto>) -> Result<ProjectDto> {
        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("Project with ID {id} not found")))?;

        let Some(dto) = data else {
            return Err(Error::invalid_data("Data is not valid"));
        };
        let updated = ProjectRecord::from(dto);

        existing.amount_raised = updated.amount_raised;
        existing.description = updated.description;
        existing.goal_amount = updated.goal_amount;
        existing.investments = updated.investments;
        existing.name = updated.name;

        let saved = self.repository.save(existing).await?;
        info!(project_id = id, "updated project");
        Ok(saved.into())
    }

    /// Deletes project `id` together with its investments.
    ///
    /// # Errors
    /// Returns an error if no project exists with `id` or the delete fails.
    pub async fn delete_project(&self, id: i64) -> Result<bool> {
        if self.repository.find_by_id(id).await?.is_none() {
            debug!(project_id = id, "delete requested for missing project");
            return Err(Error::not_found("Project By Id not Found"));
        }

        let deleted = self.repository.delete(id).await?;
        info!(project_id = id, deleted, "deleted project");
        Ok(deleted)
    }

    /// Fetches a single project.
    ///
    /// # Errors
    /// Returns an error if no project exists with `id` or the query fails.
    pub async fn get_project_by_id(&self, id: i64) -> Result<ProjectDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProjectDto::from)
            .ok_or_else(|| Error::not_found("Project By Id not Found"))
    }

    /// Lists every project; an empty store yields an empty list.
    pub async fn get_all_projects(&self) -> Result<Vec<ProjectDto>> {
        Ok(self
            .repository
            .find_all()
            .await?
            .into_iter()
            .map(ProjectDto::from)
            .collect())
    }
}
