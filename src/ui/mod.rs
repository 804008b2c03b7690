// ui/mod.rs

pub mod catalog_view;
mod component;
pub mod constants;
pub mod lore_view;
pub mod settings_menu;
pub mod shop_view;
pub mod spinner;

pub use component::{Component, ComponentEnum};

use crate::{
    app_state::Tab,
    context::Context,
    message::MessageType,
    ui::{
        catalog_view::CatalogView, constants::DBD_RED, constants::TITLE, lore_view::LoreView,
        settings_menu::SettingsMenu, shop_view::ShopView,
    },
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};
use strum::IntoEnumIterator;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

pub fn center_rect(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area] = Layout::horizontal([horizontal])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    area
}

/// Builds the screen shown for `tab`.
pub fn component_for(tab: Tab, context: &mut Context) -> ComponentEnum {
    if let Some(kind) = tab.catalog() {
        return CatalogView::new(kind, context).into();
    }
    match tab {
        Tab::Lore => LoreView::new(context).into(),
        Tab::Settings => SettingsMenu::new(context).into(),
        _ => ShopView::new(context).into(),
    }
}

/// Draws the header, tab bar, console and key hints around the active screen.
///
/// Returns the area left for the screen itself, or `None` when the terminal is
/// too small and only a warning was drawn.
pub fn render_chrome(
    area: Rect,
    buffer: &mut Buffer,
    tab: Tab,
    hints: &str,
    context: &Context,
) -> Option<Rect> {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        Paragraph::new("Terminal too small. Please resize.")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .render(area, buffer);
        return None;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(buffer, chunks[0]);
    render_tabs(buffer, tab, chunks[1]);
    render_console(buffer, context, chunks[3]);

    Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .render(chunks[4], buffer);

    Some(chunks[2])
}

fn render_header(buffer: &mut Buffer, area: Rect) {
    Paragraph::new(format!("{TITLE} v{}", env!("CARGO_PKG_VERSION")))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .render(area, buffer);
}

fn render_tabs(buffer: &mut Buffer, tab: Tab, area: Rect) {
    let titles: Vec<Line> = Tab::iter()
        .map(|tab| Line::from(format!("{} {tab}", tab.index() + 1)))
        .collect();

    Tabs::new(titles)
        .select(tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(DBD_RED)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .border_type(BorderType::Rounded)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DBD_RED)),
        )
        .render(area, buffer);
}

fn render_console(buffer: &mut Buffer, context: &Context, area: Rect) {
    let Some(message) = context.messages.last() else {
        return;
    };
    let color = match message.message_type {
        MessageType::Info => Color::Yellow,
        MessageType::Error => Color::Red,
    };
    Paragraph::new(Line::from(Span::styled(
        message.content.as_str(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center)
    .render(area, buffer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::InputMode, message::Message, resources::resources_for, settings::Settings};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn small_terminal_gets_a_warning() {
        let mut settings = Settings::default();
        let resources = resources_for(None);
        let context = Context {
            settings: &mut settings,
            resources: &resources,
            input_mode: &InputMode::Normal,
            messages: &[],
        };
        let area = Rect::new(0, 0, 40, 10);
        let mut buffer = Buffer::empty(area);
        assert!(render_chrome(area, &mut buffer, Tab::Shop, "", &context).is_none());
        assert!(buffer_text(&buffer).contains("Terminal too small"));
    }

    #[test]
    fn chrome_shows_tabs_and_last_message() {
        let mut settings = Settings::default();
        let resources = resources_for(None);
        let messages = vec![Message::info("first"), Message::error("Settings not saved")];
        let context = Context {
            settings: &mut settings,
            resources: &resources,
            input_mode: &InputMode::Normal,
            messages: &messages,
        };
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        let body = render_chrome(area, &mut buffer, Tab::Perks, "q quit", &context);
        assert_eq!(body, Some(Rect::new(0, 4, 80, 18)));

        let text = buffer_text(&buffer);
        assert!(text.contains("2 Perks"));
        assert!(text.contains("6 Settings"));
        assert!(text.contains("Settings not saved"));
        assert!(!text.contains("first"));
    }
}
