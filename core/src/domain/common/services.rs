use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{
    common::{SimulationConfig, entities::app_errors::CoreError},
    menu::{entities::Menu, ports::MenuRepository},
    pos::ports::PosClient,
    simulation::SimulationEngine,
};

/// Application service implementing every domain service port.
pub struct Service<M, P>
where
    M: MenuRepository,
    P: PosClient,
{
    pub(crate) menu_repository: Arc<M>,
    pub(crate) pos_client: Option<Arc<P>>,
    pub(crate) engine: Arc<RwLock<SimulationEngine>>,
    pub(crate) simulation_config: SimulationConfig,
    pub(crate) seed: u64,
    pub(crate) started_at: DateTime<Utc>,
}

impl<M, P> Service<M, P>
where
    M: MenuRepository,
    P: PosClient,
{
    pub async fn new(
        menu_repository: M,
        pos_client: Option<P>,
        simulation_config: SimulationConfig,
    ) -> Result<Self, CoreError> {
        let seed = simulation_config.resolve_seed();
        let menu = menu_repository.load_menu().await?;
        let engine = SimulationEngine::build(menu, &simulation_config, seed)?;

        Ok(Self {
            menu_repository: Arc::new(menu_repository),
            pos_client: pos_client.map(Arc::new),
            engine: Arc::new(RwLock::new(engine)),
            simulation_config,
            seed,
            started_at: Utc::now(),
        })
    }

    /// Swaps the master menu for the one `update` derives from it. The engine
    /// write lock is held throughout, and nothing is stored unless the new
    /// engine builds, so the repository and the engine never disagree.
    pub(crate) async fn replace_menu_with<F, T>(&self, update: F) -> Result<T, CoreError>
    where
        F: FnOnce(&Menu) -> Result<(Menu, T), CoreError> + Send,
        T: Send,
    {
        let mut engine = self.engine.write().await;
        let current = self.menu_repository.load_menu().await?;
        let (menu, output) = update(&current)?;

        // Same seed, so results stay reproducible across syncs.
        let rebuilt = SimulationEngine::build(menu.clone(), &self.simulation_config, self.seed)?;
        self.menu_repository.replace_menu(menu).await?;
        *engine = rebuilt;

        Ok(output)
    }

    pub(crate) fn pos_client(&self) -> Result<&P, CoreError> {
        self.pos_client
            .as_deref()
            .ok_or(CoreError::PosNotConfigured)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<M, P> Clone for Service<M, P>
where
    M: MenuRepository,
    P: PosClient,
{
    fn clone(&self) -> Self {
        Self {
            menu_repository: Arc::clone(&self.menu_repository),
            pos_client: self.pos_client.clone(),
            engine: Arc::clone(&self.engine),
            simulation_config: self.simulation_config.clone(),
            seed: self.seed,
            started_at: self.started_at,
        }
    }
}
