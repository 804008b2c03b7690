// The in-app store is a static mock: nothing here can be bought.

use serde::Deserialize;

use crate::{
    catalog::try_load_document,
    resources::{ResourceBundle, asset_key},
};

pub const SHOP_RESOURCE: &str = "shop.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreItem {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl StoreItem {
    pub fn asset_key(&self) -> &str {
        asset_key(&self.image)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyBalance {
    pub currency: String,
    pub amount: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Shop {
    pub title: String,
    pub categories: Vec<String>,
    pub balances: Vec<CurrencyBalance>,
    pub featured: Vec<StoreItem>,
    pub special: Vec<StoreItem>,
}

impl Default for Shop {
    fn default() -> Self {
        Self {
            title: "Shop of the Day".to_string(),
            categories: Vec::new(),
            balances: Vec::new(),
            featured: Vec::new(),
            special: Vec::new(),
        }
    }
}

impl Shop {
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.special.is_empty()
    }
}

// Same policy as the catalogs: a broken listing shows an empty shop.
pub fn load_shop(bundle: &dyn ResourceBundle) -> Shop {
    match try_load_document::<Shop>(bundle, SHOP_RESOURCE) {
        Ok(shop) => {
            log::info!(
                "Loaded shop with {} featured and {} special items",
                shop.featured.len(),
                shop.special.len()
            );
            shop
        }
        Err(e) => {
            log::error!("{e}");
            Shop::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{BundledResources, DirectoryResources};

    #[test]
    fn bundled_shop_matches_the_store_layout() {
        let shop = load_shop(&BundledResources);
        assert_eq!(
            shop.categories,
            ["FEATURED", "COLLECTIONS", "BUNDLES", "KILLERS", "SURVIVORS"]
        );
        assert_eq!(shop.featured[0].name, "The Trapper");
        assert_eq!(shop.featured[0].asset_key(), "trapper");
        assert_eq!(shop.special[1].price, "Free Gift");
    }

    #[test]
    fn missing_shop_is_empty() {
        let dir = tempfile::tempdir().expect("Expected a temp dir");
        let shop = load_shop(&DirectoryResources::new(dir.path()));
        assert!(shop.is_empty());
        assert_eq!(shop.title, "Shop of the Day");
    }
}
