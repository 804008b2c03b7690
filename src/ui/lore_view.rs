// ui/lore_view.rs

use crate::{
    app::{Action, InputMode},
    context::Context,
    lore::{load_lore, wrap_lore},
    ui::constants::{DBD_RED, LORE_HINTS},
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::*,
};

use super::Component;

const PAGE: u16 = 10;

#[derive(Debug, Default)]
pub struct LoreView {
    text: String,
    scroll: u16,
    // Set on each render, used to clamp scrolling.
    max_scroll: u16,
}

impl Component for LoreView {
    fn on_key(&mut self, key: KeyEvent, _context: &mut Context) -> Option<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE),
            KeyCode::Home => self.scroll = 0,
            _ => return None,
        }
        self.scroll = self.scroll.min(self.max_scroll);
        None
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, _context: &Context) {
        let block = Block::default()
            .border_type(BorderType::Rounded)
            .borders(Borders::ALL)
            .title(" THE ENTITY'S REALM ")
            .border_style(Style::default().fg(DBD_RED));
        let inner = block.inner(area);

        if self.text.is_empty() {
            Paragraph::new("The fog hides this story for now.")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buffer);
            return;
        }

        let lines: Vec<Line> = wrap_lore(&self.text, inner.width as usize)
            .into_iter()
            .map(Line::from)
            .collect();
        self.max_scroll = (lines.len() as u16).saturating_sub(inner.height);
        self.scroll = self.scroll.min(self.max_scroll);

        Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .scroll((self.scroll, 0))
            .block(block)
            .render(area, buffer);
    }

    fn key_hints(&self, _input_mode: InputMode) -> &'static str {
        LORE_HINTS
    }
}

impl LoreView {
    pub fn new(context: &mut Context) -> Self {
        Self::from_text(load_lore(context.resources.as_ref()))
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}
