use serde::{Deserialize, Serialize};

/// an item of the static rewards catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreItem {
    pub name: String,
    pub cost: u32,
    pub icon: String,
}

impl StoreItem {
    pub fn catalog() -> Vec<StoreItem> {
        vec![
            StoreItem::new("\"Green Hero\" badge", 200, "🌿"),
            StoreItem::new("Café Coupon", 500, "🎟️"),
            StoreItem::new("Tree Planting (virtual)", 1000, "🌍"),
        ]
    }

    /// finds a catalog item whose name contains `query`, ignoring case
    pub fn find(query: &str) -> Option<StoreItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        StoreItem::catalog()
            .into_iter()
            .find(|item| item.name.to_lowercase().contains(&needle))
    }

    fn new(name: &str, cost: u32, icon: &str) -> StoreItem {
        StoreItem {
            name: name.to_string(),
            cost,
            icon: icon.to_string(),
        }
    }
}
