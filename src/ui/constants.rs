// ui/constants.rs

use ratatui::style::Color;

pub const DBD_RED: Color = Color::Rgb(153, 0, 0);
pub const DBD_BLACK: Color = Color::Rgb(13, 13, 13);

pub const TITLE: &str = "DEAD BY DAYLIGHT TRACKER";

pub const CATALOG_HINTS: &str =
    "/ search | ↑↓ select | Esc clear search | Tab next screen | q quit";
pub const SEARCH_HINTS: &str = "Type to filter by name | ↑↓ select | Enter or Esc done";
pub const SHOP_HINTS: &str = "←→ category | g get auric cells | Tab next screen | q quit";
pub const LORE_HINTS: &str = "↑↓ scroll | PgUp PgDn page | Tab next screen | q quit";
pub const SETTINGS_HINTS: &str = "↑↓ select | ←→ change | Tab next screen | q quit";
