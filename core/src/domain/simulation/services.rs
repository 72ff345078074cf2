use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    elasticity::{
        calculator::{ped_from_simulation_data, xed_from_simulation_data},
        value_objects::XedResult,
    },
    menu::ports::MenuRepository,
    pos::ports::PosClient,
    simulation::{
        ports::SimulationService,
        value_objects::{
            CalculatePedInput, CalculateXedInput, PedReport, PriceComparison,
            SimulatePriceChangeInput, validate_percentage_change,
        },
    },
};

impl<M, P> SimulationService for Service<M, P>
where
    M: MenuRepository,
    P: PosClient,
{
    #[instrument(skip(self, input), fields(item_id = %input.item_id, new_price = input.new_price))]
    async fn simulate_price_change(
        &self,
        input: SimulatePriceChangeInput,
    ) -> Result<PriceComparison, CoreError> {
        let engine = self.engine.read().await;
        let comparison = engine.compare_price_change(&input.item_id, input.new_price)?;

        tracing::info!(
            run_id = %comparison.run_id,
            revenue_change = comparison.revenue_change,
            "price change simulated"
        );

        Ok(comparison)
    }

    #[instrument(skip(self, input), fields(item_id = %input.item_id))]
    async fn calculate_ped(&self, input: CalculatePedInput) -> Result<PedReport, CoreError> {
        let percentage_changes = input
            .percentage_changes
            .into_iter()
            .map(validate_percentage_change)
            .collect::<Result<Vec<f64>, CoreError>>()?;

        let engine = self.engine.read().await;
        let item = engine
            .menu()
            .item(&input.item_id)
            .cloned()
            .ok_or_else(|| CoreError::ItemNotFound(input.item_id.clone()))?;

        let points = engine.ped_simulation_set(&item.id, &percentage_changes)?;
        let data = ped_from_simulation_data(&points);

        Ok(PedReport {
            item_id: item.id,
            item_name: item.name,
            demand_model: engine.model_name().to_string(),
            points,
            data,
        })
    }

    #[instrument(
        skip(self, input),
        fields(target = %input.target_item_id, affecting = %input.affecting_item_id)
    )]
    async fn calculate_xed(&self, input: CalculateXedInput) -> Result<XedResult, CoreError> {
        let percentage_change = validate_percentage_change(input.percentage_change)?;

        let engine = self.engine.read().await;
        let data = engine.xed_simulation_set(
            &input.target_item_id,
            &input.affecting_item_id,
            percentage_change,
        )?;

        Ok(xed_from_simulation_data(data))
    }
}
