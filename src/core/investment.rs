//! Investment business logic.
//!
//! No field-level validation happens here: negative amounts and references to projects
//! that do not exist are passed through to the store. The two list lookups report an
//! empty result as [`Error::NotFound`].

use crate::{
    errors::{Error, Result},
    models::{InvestmentDto, InvestmentRecord},
    repository::InvestmentRepository,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Investment operations over an injected repository.
#[derive(Clone)]
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepository>,
}

impl InvestmentService {
    /// Creates a service that stores investments in `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn InvestmentRepository>) -> Self {
        Self { repository }
    }

    /// Persists a new investment and returns it with its assigned id.
    ///
    /// # Errors
    /// Returns an error if `data` is absent or the store rejects the insert.
    pub async fn create_investment(&self, data: Option<InvestmentDto>) -> Result<InvestmentDto> {
        let Some(dto) = data else {
            return Err(Error::invalid_data("Data is not valid"));
        };

        let mut record = InvestmentRecord::from(dto);
        record.id = None;

        let saved = self.repository.save(record).await?;
        info!(
            investment_id = ?saved.id,
            project_id = ?saved.project_id,
            amount = saved.amount,
            "created investment"
        );
        Ok(saved.into())
    }

    /// Overwrites amount, investor name and project reference of investment `id`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No investment exists with `id`
    /// - `data` is absent
    /// - The database update operation fails
    pub async fn update_investment(
        &self,
        id: i64,
        data: Option<InvestmentDto>,
    ) -> Result<InvestmentDto> {
        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("Investment with ID {id} not found")))?;

        let Some(dto) = data else {
            return Err(Error::invalid_data("Data is not valid"));
        };
        let updated = InvestmentRecord::from(dto);

        existing.amount = updated.amount;
        existing.investor_name = updated.investor_name;
        existing.project_id = updated.project_id;

        let saved = self.repository.save(existing).await?;
        info!(investment_id = id, "updated investment");
        Ok(saved.into())
    }

    /// Deletes investment `id`.
    ///
    /// # Errors
    /// Returns an error if no investment exists with `id` or the delete fails.
    pub async fn delete_investment(&self, id: i64) -> Result<bool> {
        if self.repository.find_by_id(id).await?.is_none() {
            debug!(investment_id = id, "delete requested for missing investment");
            return Err(Error::not_found("Investment by id not found"));
        }

        let deleted = self.repository.delete(id).await?;
        info!(investment_id = id, deleted, "deleted investment");
        Ok(deleted)
    }

    /// Fetches a single investment.
    ///
    /// # Errors
    /// Returns an error if no investment exists with `id` or the query fails.
    pub async fn get_investment_by_id(&self, id: i64) -> Result<InvestmentDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(InvestmentDto::from)
            .ok_or_else(|| Error::not_found("Investment by id not found"))
    }

    /// Lists the investments made against `project_id`.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] when the project has no investments.
    pub async fn get_investments_by_project_id(
        &self,
        project_id: i64,
    ) -> Result<Vec<InvestmentDto>> {
        let investments = self.repository.find_by_project_id(project_id).await?;
        if investments.is_empty() {
            return Err(Error::not_found(format!(
                "Investments for project ID {project_id} not found"
            )));
        }
        Ok(investments.into_iter().map(InvestmentDto::from).collect())
    }

    /// Lists the investments made by `investor_name` (exact match).
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] when the investor has no investments.
    pub async fn get_investments_by_investor_name(
        &self,
        investor_name: &str,
    ) -> Result<Vec<InvestmentDto>> {
        let investments = self.repository.find_by_investor_name(investor_name).await?;
        if investments.is_empty() {
            return Err(Error::not_found("Investment by Name not found"));
        }
        Ok(investments.into_iter().map(InvestmentDto::from).collect())
    }
}
