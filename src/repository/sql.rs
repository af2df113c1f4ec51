//! SeaORM-backed repositories.
//!
//! One [`SqlRepository`] serves both traits since a project save also writes the
//! investment rows it owns. Multi-row writes run inside a single transaction.

use super::{InvestmentRepository, ProjectRepository};
use crate::{
    entities::{Investment, Project, investment, project},
    errors::Result,
    models::{InvestmentRecord, ProjectRecord},
};
use async_trait::async_trait;
use sea_orm::{ActiveValue, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::debug;

/// Repository over a SeaORM database connection.
#[derive(Clone, Debug)]
pub struct SqlRepository {
    db: DatabaseConnection,
}

impl SqlRepository {
    /// Wraps an open connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn investment_record(model: investment::Model) -> InvestmentRecord {
    InvestmentRecord {
        id: Some(model.id),
        amount: model.amount,
        investor_name: model.investor_name,
        project_id: model.project_id,
    }
}

fn project_record(model: project::Model, investments: Vec<investment::Model>) -> ProjectRecord {
    ProjectRecord {
        id: Some(model.id),
        name: model.name,
        description: model.description,
        goal_amount: model.goal_amount,
        amount_raised: model.amount_raised,
        investments: investments.into_iter().map(investment_record).collect(),
    }
}

/// Inserts or updates a single investment row on `db` (connection or transaction).
async fn write_investment<C>(db: &C, record: InvestmentRecord) -> Result<investment::Model>
where
    C: ConnectionTrait,
{
    let mut active = investment::ActiveModel {
        amount: Set(record.amount),
        investor_name: Set(record.investor_name),
        project_id: Set(record.project_id),
        ..Default::default()
    };

    let model = match record.id {
        Some(id) => {
            active.id = ActiveValue::Unchanged(id);
            active.update(db).await?
        }
        None => active.insert(db).await?,
    };
    Ok(model)
}

#[async_trait]
impl ProjectRepository for SqlRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ProjectRecord>> {
        let Some(model) = Project::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let investments = model
            .find_related(Investment)
            .order_by_asc(investment::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Some(project_record(model, investments)))
    }

    async fn find_all(&self) -> Result<Vec<ProjectRecord>> {
        let rows = Project::find()
            .find_with_related(Investment)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, investments)| project_record(model, investments))
            .collect())
    }

    async fn save(&self, record: ProjectRecord) -> Result<ProjectRecord> {
        let txn = self.db.begin().await?;

        let mut active = project::ActiveModel {
            name: Set(record.name),
            description: Set(record.description),
            goal_amount: Set(record.goal_amount),
            amount_raised: Set(record.amount_raised),
            ..Default::default()
        };
        let model = match record.id {
            Some(id) => {
                active.id = ActiveValue::Unchanged(id);
                active.update(&txn).await?
            }
            None => active.insert(&txn).await?,
        };

        // The supplied list becomes the project's full investment set.
        let mut kept = Vec::with_capacity(record.investments.len());
        for mut investment in record.investments {
            investment.project_id = Some(model.id);
            if let Some(existing_id) = investment.id {
                if Investment::find_by_id(existing_id).one(&txn).await?.is_none() {
                    investment.id = None;
                }
            }
            kept.push(write_investment(&txn, investment).await?.id);
        }

        let mut orphans =
            Investment::delete_many().filter(investment::Column::ProjectId.eq(model.id));
        if !kept.is_empty() {
            orphans = orphans.filter(investment::Column::Id.is_not_in(kept.clone()));
        }
        let removed = orphans.exec(&txn).await?.rows_affected;

        let investments = Investment::find()
            .filter(investment::Column::ProjectId.eq(model.id))
            .order_by_asc(investment::Column::Id)
            .all(&txn)
            .await?;

        txn.commit().await?;
        debug!(
            project_id = model.id,
            kept = kept.len(),
            removed,
            "saved project"
        );

        Ok(project_record(model, investments))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        Investment::delete_many()
            .filter(investment::Column::ProjectId.eq(id))
            .exec(&txn)
            .await?;
        let result = Project::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl InvestmentRepository for SqlRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<InvestmentRecord>> {
        Ok(Investment::find_by_id(id)
            .one(&self.db)
            .await?
            .map(investment_record))
    }

    async fn find_by_project_id(&self, project_id: i64) -> Result<Vec<InvestmentRecord>> {
        let models = Investment::find()
            .filter(investment::Column::ProjectId.eq(project_id))
            .order_by_asc(investment::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(investment_record).collect())
    }

    async fn find_by_investor_name(&self, investor_name: &str) -> Result<Vec<InvestmentRecord>> {
        let models = Investment::find()
            .filter(investment::Column::InvestorName.eq(investor_name))
            .order_by_asc(investment::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(investment_record).collect())
    }

    async fn save(&self, record: InvestmentRecord) -> Result<InvestmentRecord> {
        write_investment(&self.db, record)
            .await
            .map(investment_record)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = Investment::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
