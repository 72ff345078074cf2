use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::entities::{CrossElasticity, Menu, MenuItem},
};

/// Built-in demo menu used when no menu file is configured.
pub fn sample_menu() -> Result<Menu, CoreError> {
    let items = vec![
        MenuItem::new("burger_classic", "Classic Burger", 12.00).with_demand(120.0, -1.2),
        MenuItem::new("pizza_pepperoni", "Pepperoni Pizza", 15.00).with_demand(95.0, -1.1),
        MenuItem::new("salad_caesar", "Caesar Salad", 10.00).with_demand(60.0, -0.8),
        MenuItem::new("pasta_carbonara", "Carbonara Pasta", 14.00).with_demand(70.0, -0.9),
        MenuItem::new("coke_soda", "Coke", 2.50).with_demand(180.0, -0.4),
    ];

    let cross_elasticities = [
        ("pizza_pepperoni", "burger_classic", 0.35),
        ("burger_classic", "pizza_pepperoni", 0.30),
        ("coke_soda", "burger_classic", -0.20),
        ("coke_soda", "pizza_pepperoni", -0.15),
    ]
    .into_iter()
    .map(|(target, affecting, coefficient)| CrossElasticity {
        target_item_id: target.to_string(),
        affecting_item_id: affecting.to_string(),
        coefficient,
    })
    .collect();

    Menu::new(items, cross_elasticities)
}
