//! In-memory repositories for service and handler tests.

#![allow(clippy::unwrap_used)]

use super::{InvestmentRepository, ProjectRepository};
use crate::{
    errors::Result,
    models::{InvestmentRecord, ProjectRecord},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Project row without its children; investments live in their own map.
#[derive(Clone, Debug)]
struct ProjectRow {
    name: String,
    description: String,
    goal_amount: f64,
    amount_raised: f64,
}

#[derive(Debug, Default)]
struct Tables {
    projects: BTreeMap<i64, ProjectRow>,
    investments: BTreeMap<i64, InvestmentRecord>,
    next_project_id: i64,
    next_investment_id: i64,
}

impl Tables {
    fn project(&self, id: i64) -> Option<ProjectRecord> {
        let row = self.projects.get(&id)?;
        Some(ProjectRecord {
            id: Some(id),
            name: row.name.clone(),
            description: row.description.clone(),
            goal_amount: row.goal_amount,
            amount_raised: row.amount_raised,
            investments: self
                .investments
                .values()
                .filter(|i| i.project_id == Some(id))
                .cloned()
                .collect(),
        })
    }

    fn write_investment(&mut self, mut record: InvestmentRecord) -> InvestmentRecord {
        let id = match record.id {
            Some(id) if self.investments.contains_key(&id) => id,
            _ => {
                self.next_investment_id += 1;
                self.next_investment_id
            }
        };
        record.id = Some(id);
        self.investments.insert(id, record.clone());
        record
    }
}

/// Map-backed store implementing both repository traits.
///
/// Ids start at 1 and are never reused. Project references are not checked.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    tables: Mutex<Tables>,
}

impl MemoryRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for MemoryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ProjectRecord>> {
        Ok(self.tables.lock().unwrap().project(id))
    }

    async fn find_all(&self) -> Result<Vec<ProjectRecord>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .projects
            .keys()
            .filter_map(|id| tables.project(*id))
            .collect())
    }

    async fn save(&self, record: ProjectRecord) -> Result<ProjectRecord> {
        let mut tables = self.tables.lock().unwrap();

        let id = match record.id {
            Some(id) if tables.projects.contains_key(&id) => id,
            _ => {
                tables.next_project_id += 1;
                tables.next_project_id
            }
        };
        tables.projects.insert(
            id,
            ProjectRow {
                name: record.name,
                description: record.description,
                goal_amount: record.goal_amount,
                amount_raised: record.amount_raised,
            },
        );

        let mut kept = Vec::new();
        for mut investment in record.investments {
            investment.project_id = Some(id);
            kept.push(tables.write_investment(investment).id);
        }
        tables
            .investments
            .retain(|key, i| i.project_id != Some(id) || kept.contains(&Some(*key)));

        Ok(tables.project(id).unwrap())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.lock().unwrap();
        if tables.projects.remove(&id).is_none() {
            return Ok(false);
        }
        tables.investments.retain(|_, i| i.project_id != Some(id));
        Ok(true)
    }
}

#[async_trait]
impl InvestmentRepository for MemoryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<InvestmentRecord>> {
        Ok(self.tables.lock().unwrap().investments.get(&id).cloned())
    }

    async fn find_by_project_id(&self, project_id: i64) -> Result<Vec<InvestmentRecord>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .investments
            .values()
            .filter(|i| i.project_id == Some(project_id))
            .cloned()
            .collect())
    }

    async fn find_by_investor_name(&self, investor_name: &str) -> Result<Vec<InvestmentRecord>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .investments
            .values()
            .filter(|i| i.investor_name == investor_name)
            .cloned()
            .collect())
    }

    async fn save(&self, record: InvestmentRecord) -> Result<InvestmentRecord> {
        Ok(self.tables.lock().unwrap().write_investment(record))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .investments
            .remove(&id)
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_project_delete_drops_children() -> Result<()> {
        let repo = MemoryRepository::new();

        let project = ProjectRepository::save(&repo, project_record_named("A")).await?;
        InvestmentRepository::save(&repo, investment_record_for(project.id, 5.0, "Ada")).await?;
        assert_eq!(
            ProjectRepository::find_by_id(&repo, project.id.unwrap())
                .await?
                .unwrap()
                .investments
                .len(),
            1
        );

        assert!(ProjectRepository::delete(&repo, project.id.unwrap()).await?);
        assert!(
            InvestmentRepository::find_by_investor_name(&repo, "Ada")
                .await?
                .is_empty()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_accepts_dangling_project_reference() -> Result<()> {
        let repo = MemoryRepository::new();

        let saved =
            InvestmentRepository::save(&repo, investment_record_for(Some(42), 5.0, "Ada")).await?;
        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.project_id, Some(42));

        Ok(())
    }
}
