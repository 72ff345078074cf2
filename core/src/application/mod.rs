use crate::{
    domain::common::{
        MenuSourceConfig, PlatelyConfig, entities::app_errors::CoreError, services::Service,
    },
    infrastructure::{
        menu::{file_loader::load_menu_file, in_memory::InMemoryMenuRepository},
        pos::toast_client::ToastPosClient,
        sample::sample_menu,
    },
};

pub type PlatelyService = Service<InMemoryMenuRepository, ToastPosClient>;

pub async fn create_service(config: PlatelyConfig) -> Result<PlatelyService, CoreError> {
    let menu = match &config.menu_source {
        MenuSourceConfig::Sample => sample_menu()?,
        MenuSourceConfig::File(path) => load_menu_file(path).await?,
    };

    let pos_client = config.pos.as_ref().map(ToastPosClient::new).transpose()?;
    if pos_client.is_none() {
        tracing::info!("no POS credentials configured, POS routes are disabled");
    }

    let service = Service::new(
        InMemoryMenuRepository::new(menu),
        pos_client,
        config.simulation,
    )
    .await?;

    tracing::info!(seed = service.seed(), "plately service created");
    Ok(service)
}
