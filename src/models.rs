//! Record and transfer shapes for projects and investments.
//!
//! Records are what the repositories store and return; `id == None` marks a record
//! that has not been persisted yet. DTOs are the JSON bodies exchanged over HTTP.
//! Every conversion between the two is written out field by field.

use serde::{Deserialize, Serialize};

/// Repository-facing project row plus the investments that reference it.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectRecord {
    /// Store-assigned identifier, `None` until saved
    pub id: Option<i64>,
    /// Short label
    pub name: String,
    /// Free text description
    pub description: String,
    /// Funding target
    pub goal_amount: f64,
    /// Total raised so far
    pub amount_raised: f64,
    /// Investments owned by this project
    pub investments: Vec<InvestmentRecord>,
}

/// Repository-facing investment row.
#[derive(Clone, Debug, PartialEq)]
pub struct InvestmentRecord {
    /// Store-assigned identifier, `None` until saved
    pub id: Option<i64>,
    /// Amount invested
    pub amount: f64,
    /// Free text name of the investor
    pub investor_name: String,
    /// Owning project, if any
    pub project_id: Option<i64>,
}

/// JSON shape of a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    /// Identifier; ignored on input
    #[serde(default)]
    pub id: Option<i64>,
    /// Short label
    #[serde(default)]
    pub name: String,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// Funding target, must not be negative on create
    #[serde(default)]
    pub goal_amount: f64,
    /// Total raised so far
    #[serde(default)]
    pub amount_raised: f64,
    /// Investments owned by this project
    #[serde(default)]
    pub investments: Vec<InvestmentDto>,
}

/// JSON shape of an investment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDto {
    /// Identifier; ignored on create
    #[serde(default)]
    pub id: Option<i64>,
    /// Amount invested
    #[serde(default)]
    pub amount: f64,
    /// Free text name of the investor
    #[serde(default)]
    pub investor_name: String,
    /// Owning project, if any
    #[serde(default)]
    pub project_id: Option<i64>,
}

impl From<ProjectRecord> for ProjectDto {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            goal_amount: record.goal_amount,
            amount_raised: record.amount_raised,
            investments: record
                .investments
                .into_iter()
                .map(InvestmentDto::from)
                .collect(),
        }
    }
}

impl From<ProjectDto> for ProjectRecord {
    fn from(dto: ProjectDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            goal_amount: dto.goal_amount,
            amount_raised: dto.amount_raised,
            investments: dto
                .investments
                .into_iter()
                .map(InvestmentRecord::from)
                .collect(),
        }
    }
}

impl From<InvestmentRecord> for InvestmentDto {
    fn from(record: InvestmentRecord) -> Self {
        Self {
            id: record.id,
            amount: record.amount,
            investor_name: record.investor_name,
            project_id: record.project_id,
        }
    }
}

impl From<InvestmentDto> for InvestmentRecord {
    fn from(dto: InvestmentDto) -> Self {
        Self {
            id: dto.id,
            amount: dto.amount,
            investor_name: dto.investor_name,
            project_id: dto.project_id,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_project_dto_uses_camel_case() {
        let dto = ProjectDto {
            id: Some(1),
            name: "Project A".to_string(),
            description: "Description of Project A".to_string(),
            goal_amount: 10000.0,
            amount_raised: 5000.0,
            investments: vec![],
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["goalAmount"], 10000.0);
        assert_eq!(json["amountRaised"], 5000.0);
        assert!(json["investments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_project_dto_defaults_optional_fields() {
        let dto: ProjectDto =
            serde_json::from_str(r#"{"name":"Project A","goalAmount":10000,"amountRaised":5000}"#)
                .unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.description, "");
        assert_eq!(dto.goal_amount, 10000.0);
        assert!(dto.investments.is_empty());
    }

    #[test]
    fn test_partial_objects_deserialize_with_defaults() {
        let project: ProjectDto = serde_json::from_str(r#"{"goalAmount":5}"#).unwrap();
        assert_eq!(project.name, "");
        assert_eq!(project.goal_amount, 5.0);

        let investment: InvestmentDto =
            serde_json::from_str(r#"{"amount":5,"projectId":1}"#).unwrap();
        assert_eq!(investment.investor_name, "");
        assert_eq!(investment.project_id, Some(1));

        let empty: InvestmentDto = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.amount, 0.0);
    }

    #[test]
    fn test_investment_dto_parses_project_reference() {
        let dto: InvestmentDto =
            serde_json::from_str(r#"{"amount":1000,"investorName":"John Doe","projectId":7}"#)
                .unwrap();

        assert_eq!(dto.amount, 1000.0);
        assert_eq!(dto.investor_name, "John Doe");
        assert_eq!(dto.project_id, Some(7));
    }

    #[test]
    fn test_project_conversion_carries_investments() {
        let record = ProjectRecord {
            id: Some(3),
            name: "Solar".to_string(),
            description: "Panels".to_string(),
            goal_amount: 500.0,
            amount_raised: 0.0,
            investments: vec![InvestmentRecord {
                id: Some(9),
                amount: 50.0,
                investor_name: "Ada".to_string(),
                project_id: Some(3),
            }],
        };

        let dto = ProjectDto::from(record.clone());
        assert_eq!(dto.investments.len(), 1);
        assert_eq!(dto.investments[0].investor_name, "Ada");
        assert_eq!(ProjectRecord::from(dto), record);
    }
}
