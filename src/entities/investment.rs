//! Investment entity - An amount pledged by a named investor.
//!
//! `project_id` is a nullable foreign key to `projects.id`; deleting a project
//! cascades to its investments.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Investment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "investments")]
pub struct Model {
    /// Unique identifier for the investment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Amount invested (sign is not checked)
    pub amount: f64,
    /// Free text name of the investor
    pub investor_name: String,
    /// ID of the project this investment belongs to
    pub project_id: Option<i64>,
}

/// Defines relationships between Investment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each investment belongs to one project
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
