// app_state.rs

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::catalog::CatalogKind;

// Top level screens, in tab bar order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Tab {
    #[default]
    Shop,
    Perks,
    Powers,
    Items,
    Lore,
    Settings,
}

impl Tab {
    pub fn index(&self) -> usize {
        Tab::iter().position(|tab| tab == *self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Tab::iter().nth(index)
    }

    pub fn next(&self) -> Self {
        Tab::from_index((self.index() + 1) % Tab::iter().len()).unwrap_or_default()
    }

    pub fn previous(&self) -> Self {
        let count = Tab::iter().len();
        Tab::from_index((self.index() + count - 1) % count).unwrap_or_default()
    }

    pub fn catalog(&self) -> Option<CatalogKind> {
        match self {
            Tab::Perks => Some(CatalogKind::Perks),
            Tab::Powers => Some(CatalogKind::Powers),
            Tab::Items => Some(CatalogKind::Items),
            Tab::Shop | Tab::Lore | Tab::Settings => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_in_both_directions() {
        assert_eq!(Tab::Shop.next(), Tab::Perks);
        assert_eq!(Tab::Settings.next(), Tab::Shop);
        assert_eq!(Tab::Shop.previous(), Tab::Settings);
        assert_eq!(Tab::Lore.previous(), Tab::Items);
    }

    #[test]
    fn catalog_tabs_map_to_their_kind() {
        assert_eq!(Tab::Powers.catalog(), Some(CatalogKind::Powers));
        assert_eq!(Tab::Lore.catalog(), None);
        assert_eq!(Tab::from_index(3), Some(Tab::Items));
        assert_eq!(Tab::from_index(6), None);
    }
}
