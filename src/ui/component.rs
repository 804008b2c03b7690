use crossterm::event::KeyEvent;
use enum_dispatch::enum_dispatch;
use ratatui::{buffer::Buffer, layout::Rect};
use std::fmt::Debug;

use crate::{
    app::{Action, InputMode},
    context::Context,
    ui::{
        catalog_view::CatalogView, lore_view::LoreView, settings_menu::SettingsMenu,
        shop_view::ShopView,
    },
};

#[enum_dispatch]
pub trait Component: Debug {
    fn on_key(&mut self, key: KeyEvent, context: &mut Context) -> Option<Action>;

    // Called on every tick of the event loop.
    fn on_tick(&mut self) {}

    fn render(&mut self, area: Rect, buffer: &mut Buffer, context: &Context);

    fn key_hints(&self, input_mode: InputMode) -> &'static str;
}

#[enum_dispatch(Component)]
#[derive(Debug)]
pub enum ComponentEnum {
    ShopView,
    CatalogView,
    LoreView,
    SettingsMenu,
}
