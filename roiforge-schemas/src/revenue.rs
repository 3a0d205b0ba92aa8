use serde::{Deserialize, Serialize};

/// Optional revenue-uplift model attached to a request.
///
/// The model only counts when both fields are set to a non-zero number. A zero
/// in either field means "no revenue impact", the same as leaving it out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RevenueModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_per_asset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_incremental_conversion_lift_pct: Option<f64>,
}

impl RevenueModel {
    pub fn new(revenue_per_asset: f64, expected_incremental_conversion_lift_pct: f64) -> Self {
        Self {
            revenue_per_asset: Some(revenue_per_asset),
            expected_incremental_conversion_lift_pct: Some(expected_incremental_conversion_lift_pct),
        }
    }

    /// Returns `(revenue_per_asset, lift_pct)` when both are set and truthy.
    pub fn active_terms(&self) -> Option<(f64, f64)> {
        let revenue = self.revenue_per_asset.filter(|v| is_truthy(*v))?;
        let lift = self
            .expected_incremental_conversion_lift_pct
            .filter(|v| is_truthy(*v))?;
        Some((revenue, lift))
    }
}

fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let partial = RevenueModel {
            revenue_per_asset: Some(1000.0),
            expected_incremental_conversion_lift_pct: None,
        };
        assert_eq!(partial.active_terms(), None);
        assert_eq!(RevenueModel::new(1000.0, 10.0).active_terms(), Some((1000.0, 10.0)));
    }

    #[test]
    fn zero_and_nan_count_as_absent() {
        assert_eq!(RevenueModel::new(0.0, 10.0).active_terms(), None);
        assert_eq!(RevenueModel::new(1000.0, 0.0).active_terms(), None);
        assert_eq!(RevenueModel::new(f64::NAN, 10.0).active_terms(), None);
    }
}
