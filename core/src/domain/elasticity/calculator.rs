use crate::domain::elasticity::{
    entities::{DemandClassification, Elasticity, ItemRelationship},
    value_objects::{PedResult, PricePoint, XedResult, XedSimulationData},
};

/// Midpoint (arc) elasticity between two observations.
///
/// Returns `Undefined` when the average quantity or the average price is
/// zero. With an unchanged price the result is 0 for unchanged demand and
/// signed infinity otherwise.
pub fn arc_elasticity(q1: f64, q2: f64, p1: f64, p2: f64) -> Elasticity {
    let avg_q = (q1 + q2) / 2.0;
    let avg_p = (p1 + p2) / 2.0;

    if avg_q == 0.0 || avg_p == 0.0 {
        return Elasticity::Undefined;
    }

    let pct_change_q = (q2 - q1) / avg_q;
    let pct_change_p = (p2 - p1) / avg_p;

    if pct_change_p == 0.0 {
        return if pct_change_q == 0.0 {
            Elasticity::Finite(0.0)
        } else if pct_change_q > 0.0 {
            Elasticity::PositiveInfinity
        } else {
            Elasticity::NegativeInfinity
        };
    }

    Elasticity::Finite(pct_change_q / pct_change_p)
}

/// Computes one PED figure per scenario point against the baseline point.
pub fn ped_from_simulation_data(points: &[PricePoint]) -> Vec<PedResult> {
    if points.len() < 2 {
        return Vec::new();
    }

    let Some(baseline) = points
        .iter()
        .find(|p| p.is_baseline)
        .or_else(|| points.iter().find(|p| p.percentage_change == 0.0))
    else {
        return Vec::new();
    };

    points
        .iter()
        .filter(|p| !std::ptr::eq(*p, baseline))
        .map(|point| {
            let ped_value =
                arc_elasticity(baseline.demand, point.demand, baseline.price, point.price);
            let classification = DemandClassification::from_elasticity(ped_value);

            PedResult {
                percentage_change_price: point.percentage_change,
                original_price: baseline.price,
                new_price: point.price,
                original_demand: baseline.demand,
                new_demand: point.demand,
                ped_value,
                classification,
                revenue_hint: classification.revenue_hint().to_string(),
            }
        })
        .collect()
}

pub fn xed_from_simulation_data(data: XedSimulationData) -> XedResult {
    let xed_value = arc_elasticity(
        data.q_target_base,
        data.q_target_scenario,
        data.p_affecting_base,
        data.p_affecting_scenario,
    );

    XedResult {
        relationship: ItemRelationship::from_elasticity(xed_value),
        xed_value,
        simulation: data,
    }
}
