pub mod app;
pub mod app_state;
pub mod catalog;
pub mod context;
pub mod error;
pub mod logging;
pub mod lore;
pub mod message;
pub mod resources;
pub mod settings;
pub mod settings_state;
pub mod shop;
pub mod tui;
pub mod ui;

// Re-export commonly used items for easier access
pub use app::App;
pub use app_state::Tab;
pub use catalog::{CatalogEntry, CatalogKind, DecodePolicy, filter_entries, load_catalog, spawn_load};
pub use error::{AppError, CatalogError};
pub use message::{Message, MessageType};
pub use resources::{ResourceBundle, SharedResources, asset_key};
pub use settings::Settings;
