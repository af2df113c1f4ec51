//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod investment;
pub mod project;

pub use investment::{
    Column as InvestmentColumn, Entity as Investment, Model as InvestmentModel,
};
pub use project::{Column as ProjectColumn, Entity as Project, Model as ProjectModel};
