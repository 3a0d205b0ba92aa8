use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingModel {
    PerUser,
    PerAccount,
}

/// A priced AI tool from the recommendation catalog.
///
/// Only the cost field matching `billing_model` is read; the other one is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedTool {
    pub name: String,
    pub billing_model: BillingModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_per_user: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_cost_per_month: Option<f64>,
}

impl RecommendedTool {
    pub fn per_user(name: &str, license_per_user: f64) -> Self {
        Self {
            name: name.to_string(),
            billing_model: BillingModel::PerUser,
            license_per_user: Some(license_per_user),
            account_cost_per_month: None,
        }
    }

    pub fn per_account(name: &str, account_cost_per_month: f64) -> Self {
        Self {
            name: name.to_string(),
            billing_model: BillingModel::PerAccount,
            license_per_user: None,
            account_cost_per_month: Some(account_cost_per_month),
        }
    }

    /// The cost field the billing model points at, if it was supplied.
    pub fn relevant_cost(&self) -> Option<f64> {
        match self.billing_model {
            BillingModel::PerUser => self.license_per_user,
            BillingModel::PerAccount => self.account_cost_per_month,
        }
    }
}
