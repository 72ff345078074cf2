use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    elasticity::value_objects::XedResult,
    menu::entities::Menu,
    simulation::{
        entities::SimulationOutcome,
        value_objects::{
            CalculatePedInput, CalculateXedInput, PedReport, PriceComparison,
            SimulatePriceChangeInput,
        },
    },
};

/// Maps a priced menu to the demand it would see over one period.
///
/// Implementations must be deterministic: the same menu always yields the
/// same outcome, so baseline and scenario runs are directly comparable.
pub trait DemandModel: Send + Sync {
    fn name(&self) -> &'static str;

    fn simulate(&self, menu: &Menu) -> Result<SimulationOutcome, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait SimulationService: Send + Sync {
    fn simulate_price_change(
        &self,
        input: SimulatePriceChangeInput,
    ) -> impl Future<Output = Result<PriceComparison, CoreError>> + Send;

    fn calculate_ped(
        &self,
        input: CalculatePedInput,
    ) -> impl Future<Output = Result<PedReport, CoreError>> + Send;

    fn calculate_xed(
        &self,
        input: CalculateXedInput,
    ) -> impl Future<Output = Result<XedResult, CoreError>> + Send;
}
