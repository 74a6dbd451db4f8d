//! Company records and request payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A company row
///
/// `code` is the primary key. It is derived from `name` when the company is
/// created through the API and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// List entry: the company without its description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}

/// Body of `POST /companies`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCompany {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewCompany {
    /// Build the row to insert under an already derived code
    pub fn into_company(self, code: String) -> Company {
        Company {
            code,
            name: self.name,
            description: self.description,
        }
    }
}

/// Body of `PUT /companies/{code}`: a full overwrite of name and description
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CompanyUpdate {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
