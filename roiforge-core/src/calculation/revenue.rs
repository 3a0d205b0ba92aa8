use roiforge_schemas::revenue::RevenueModel;

/// Monthly revenue uplift, or `None` when there is no active revenue model.
pub fn monthly_revenue_lift(model: Option<&RevenueModel>, runs_per_month: f64) -> Option<f64> {
    let (revenue_per_asset, lift_pct) = model?.active_terms()?;
    Some(revenue_per_asset * (lift_pct / 100.0) * runs_per_month.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lift_scales_with_runs() {
        let model = RevenueModel::new(1000.0, 10.0);
        assert_eq!(monthly_revenue_lift(Some(&model), 10.0), Some(1000.0));
        assert_eq!(monthly_revenue_lift(Some(&model), -4.0), Some(0.0));
    }

    #[test]
    fn absent_or_zeroed_model_has_no_lift() {
        assert_eq!(monthly_revenue_lift(None, 10.0), None);
        assert_eq!(monthly_revenue_lift(Some(&RevenueModel::default()), 10.0), None);
        assert_eq!(monthly_revenue_lift(Some(&RevenueModel::new(1000.0, 0.0)), 10.0), None);
    }
}
