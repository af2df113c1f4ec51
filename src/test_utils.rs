//! Shared test utilities.
//!
//! Helpers for setting up test databases and building records and DTOs with
//! sensible defaults.

use crate::{
    errors::Result,
    models::{InvestmentDto, InvestmentRecord, ProjectDto, ProjectRecord},
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for store-backed tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Unsaved project record with no investments.
///
/// # Defaults
/// * `description`: `"Description of <name>"`
/// * `goal_amount`: 10000.0
/// * `amount_raised`: 5000.0
pub fn project_record_named(name: &str) -> ProjectRecord {
    ProjectRecord {
        id: None,
        name: name.to_string(),
        description: format!("Description of {name}"),
        goal_amount: 10000.0,
        amount_raised: 5000.0,
        investments: Vec::new(),
    }
}

/// Unsaved investment record pointing at `project_id`.
pub fn investment_record_for(
    project_id: Option<i64>,
    amount: f64,
    investor_name: &str,
) -> InvestmentRecord {
    InvestmentRecord {
        id: None,
        amount,
        investor_name: investor_name.to_string(),
        project_id,
    }
}

/// Project payload with the same defaults as [`project_record_named`].
pub fn project_dto(name: &str) -> ProjectDto {
    project_record_named(name).into()
}

/// Investment payload without an id.
pub fn investment_dto(amount: f64, investor_name: &str, project_id: Option<i64>) -> InvestmentDto {
    investment_record_for(project_id, amount, investor_name).into()
}
