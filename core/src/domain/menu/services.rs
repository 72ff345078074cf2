use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    menu::{
        entities::MenuItem,
        ports::{MenuRepository, MenuService},
        value_objects::MenuDocument,
    },
    pos::ports::PosClient,
};

impl<M, P> MenuService for Service<M, P>
where
    M: MenuRepository,
    P: PosClient,
{
    #[instrument(skip(self))]
    async fn get_menu(&self) -> Result<MenuDocument, CoreError> {
        let engine = self.engine.read().await;
        Ok(MenuDocument::from(engine.menu()))
    }

    #[instrument(skip(self))]
    async fn get_menu_item(&self, item_id: String) -> Result<MenuItem, CoreError> {
        let engine = self.engine.read().await;
        engine
            .menu()
            .item(&item_id)
            .cloned()
            .ok_or(CoreError::ItemNotFound(item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::SimulationConfig, menu::entities::Menu, menu::ports::MockMenuRepository,
        pos::ports::MockPosClient,
    };

    fn repository() -> MockMenuRepository {
        let menu = Menu::new(
            vec![
                MenuItem::new("burger", "Classic Burger", 12.0).with_demand(100.0, -1.2),
                MenuItem::new("coke", "Coke", 2.5).with_demand(150.0, -0.5),
            ],
            vec![],
        )
        .unwrap();

        let mut repository = MockMenuRepository::new();
        repository.expect_load_menu().times(1).returning(move || {
            let menu = menu.clone();
            Box::pin(async move { Ok(menu) })
        });
        repository
    }

    #[tokio::test]
    async fn test_get_menu_lists_items_in_order() {
        let service: Service<_, MockPosClient> =
            Service::new(repository(), None, SimulationConfig::default())
                .await
                .unwrap();

        let document = service.get_menu().await.unwrap();
        let ids: Vec<&str> = document.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["burger", "coke"]);
    }

    #[tokio::test]
    async fn test_get_menu_item_not_found() {
        let service: Service<_, MockPosClient> =
            Service::new(repository(), None, SimulationConfig::default())
                .await
                .unwrap();

        assert_eq!(service.get_menu_item("coke".into()).await.unwrap().price, 2.5);
        assert_eq!(
            service.get_menu_item("sushi".into()).await,
            Err(CoreError::ItemNotFound("sushi".into()))
        );
    }
}
