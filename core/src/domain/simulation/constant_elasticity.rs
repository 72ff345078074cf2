use std::collections::HashMap;

use crate::domain::{
    common::{DemandCurve, entities::app_errors::CoreError},
    menu::entities::Menu,
    simulation::{entities::SimulationOutcome, ports::DemandModel},
};

/// Own-price elasticity assumed for items that do not declare one.
pub const DEFAULT_OWN_ELASTICITY: f64 = -1.0;

#[derive(Debug, Clone)]
struct BaselineItem {
    id: String,
    price: f64,
    demand: f64,
    /// (affecting item id, coefficient), own price first.
    terms: Vec<(String, f64)>,
}

/// Closed-form demand model anchored at the master menu.
///
/// Log-linear: `Q_i = Q_i0 * prod_j (P_j / P_j0)^e_ij`.
/// Linear: `Q_i = max(0, Q_i0 * (1 + sum_j e_ij * (P_j - P_j0) / P_j0))`.
#[derive(Debug, Clone)]
pub struct ConstantElasticityModel {
    curve: DemandCurve,
    baseline: Vec<BaselineItem>,
    baseline_prices: HashMap<String, f64>,
}

impl ConstantElasticityModel {
    pub fn new(master: &Menu, curve: DemandCurve) -> Self {
        let baseline = master
            .items()
            .iter()
            .map(|item| {
                let mut terms = vec![(
                    item.id.clone(),
                    item.own_elasticity.unwrap_or(DEFAULT_OWN_ELASTICITY),
                )];
                terms.extend(
                    master
                        .cross_elasticities()
                        .iter()
                        .filter(|cross| cross.target_item_id == item.id)
                        .map(|cross| (cross.affecting_item_id.clone(), cross.coefficient)),
                );

                BaselineItem {
                    id: item.id.clone(),
                    price: item.price,
                    demand: item.baseline_demand,
                    terms,
                }
            })
            .collect();

        let baseline_prices = master
            .items()
            .iter()
            .map(|item| (item.id.clone(), item.price))
            .collect();

        Self {
            curve,
            baseline,
            baseline_prices,
        }
    }

    fn demand_for(&self, base: &BaselineItem, menu: &Menu) -> Result<f64, CoreError> {
        match self.curve {
            DemandCurve::LogLinear => {
                let mut demand = base.demand;
                for (affecting_id, coefficient) in &base.terms {
                    let Some((base_price, price)) = self.price_pair(affecting_id, menu) else {
                        continue;
                    };
                    if price == 0.0 {
                        return Err(CoreError::InvalidPrice {
                            item_id: affecting_id.clone(),
                            price,
                            reason: "the log-linear demand curve is undefined at a zero price"
                                .to_string(),
                        });
                    }
                    demand *= (price / base_price).powf(*coefficient);
                }
                Ok(demand)
            }
            DemandCurve::Linear => {
                let shift: f64 = base
                    .terms
                    .iter()
                    .filter_map(|(affecting_id, coefficient)| {
                        self.price_pair(affecting_id, menu)
                            .map(|(base_price, price)| {
                                coefficient * (price - base_price) / base_price
                            })
                    })
                    .sum();
                Ok((base.demand * (1.0 + shift)).max(0.0))
            }
        }
    }

    /// Baseline and current price of an item, or `None` when the baseline
    /// price is zero and the item cannot move demand.
    fn price_pair(&self, item_id: &str, menu: &Menu) -> Option<(f64, f64)> {
        let base_price = *self.baseline_prices.get(item_id)?;
        if base_price == 0.0 {
            return None;
        }
        let price = menu.item(item_id).map(|item| item.price)?;
        Some((base_price, price))
    }
}

impl DemandModel for ConstantElasticityModel {
    fn name(&self) -> &'static str {
        match self.curve {
            DemandCurve::LogLinear => "constant_elasticity_log_linear",
            DemandCurve::Linear => "constant_elasticity_linear",
        }
    }

    fn simulate(&self, menu: &Menu) -> Result<SimulationOutcome, CoreError> {
        let demand = menu
            .items()
            .iter()
            .map(|item| {
                match self.baseline.iter().find(|base| base.id == item.id) {
                    Some(base) => self.demand_for(base, menu),
                    // Items added after the model was built have no history.
                    None => Ok(0.0),
                }
            })
            .collect::<Result<Vec<f64>, CoreError>>()?;

        Ok(SimulationOutcome::from_demand(menu, &demand))
    }
}
