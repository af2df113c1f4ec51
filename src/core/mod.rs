//! Core business logic - framework-agnostic project and investment operations.
//!
//! Services validate input, load rows before mutating them and convert between
//! record and transfer shapes. They only talk to storage through the repository traits.

pub mod investment;
pub mod project;

pub use investment::InvestmentService;
pub use project::ProjectService;
