use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::Menu, ports::MenuRepository},
};

/// Process-local menu store. The master menu only changes through a POS sync.
#[derive(Debug, Clone)]
pub struct InMemoryMenuRepository {
    menu: Arc<RwLock<Menu>>,
}

impl InMemoryMenuRepository {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu: Arc::new(RwLock::new(menu)),
        }
    }
}

impl MenuRepository for InMemoryMenuRepository {
    async fn load_menu(&self) -> Result<Menu, CoreError> {
        Ok(self.menu.read().await.clone())
    }

    async fn replace_menu(&self, menu: Menu) -> Result<(), CoreError> {
        *self.menu.write().await = menu;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::entities::MenuItem;

    #[tokio::test]
    async fn test_replace_menu() {
        let repository = InMemoryMenuRepository::new(
            Menu::new(vec![MenuItem::new("coke", "Coke", 2.5)], vec![]).unwrap(),
        );
        let replacement = Menu::new(vec![MenuItem::new("tea", "Iced Tea", 3.0)], vec![]).unwrap();

        repository.replace_menu(replacement.clone()).await.unwrap();

        assert_eq!(repository.load_menu().await.unwrap(), replacement);
    }
}
