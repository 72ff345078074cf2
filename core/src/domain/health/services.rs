use chrono::Utc;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::HealthStatus, ports::HealthCheckService},
    menu::ports::MenuRepository,
    pos::ports::PosClient,
};

impl<M, P> HealthCheckService for Service<M, P>
where
    M: MenuRepository,
    P: PosClient,
{
    async fn health(&self) -> Result<HealthStatus, CoreError> {
        let engine = self.engine.read().await;

        Ok(HealthStatus {
            status: "ok".to_string(),
            started_at: self.started_at,
            uptime_seconds: (Utc::now() - self.started_at).num_seconds(),
            menu_items: engine.menu().len(),
            demand_model: engine.model_name().to_string(),
            pos_configured: self.pos_client.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            common::{DemandModelKind, SimulationConfig},
            pos::ports::MockPosClient,
        },
        infrastructure::sample::sample_menu,
        infrastructure::menu::in_memory::InMemoryMenuRepository,
    };

    #[tokio::test]
    async fn test_health_reports_engine_summary() {
        let config = SimulationConfig {
            model: DemandModelKind::Agents,
            num_agents: 10,
            seed: Some(3),
            ..Default::default()
        };
        let service: Service<_, MockPosClient> =
            Service::new(InMemoryMenuRepository::new(sample_menu().unwrap()), None, config)
                .await
                .unwrap();

        let status = service.health().await.unwrap();
        assert_eq!(status.status, "ok");
        assert_eq!(status.menu_items, 5);
        assert_eq!(status.demand_model, "agent_based");
        assert!(!status.pos_configured);
        assert!(status.uptime_seconds >= 0);
    }
}
