//! Project entity - Represents a crowdfunding project.
//!
//! Each project has a name, description, funding goal and the amount raised so far.
//! Investments reference their project through `investments.project_id`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    /// Unique identifier for the project
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short label (e.g., "Project A")
    pub name: String,
    /// Free text description
    pub description: String,
    /// Funding target
    pub goal_amount: f64,
    /// Total raised so far
    pub amount_raised: f64,
}

/// Defines relationships between Project and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One project has many investments
    #[sea_orm(has_many = "super::investment::Entity")]
    Investments,
}

impl Related<super::investment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
