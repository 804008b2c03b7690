// ui/catalog_view.rs

use crate::{
    app::{Action, InputMode},
    catalog::{CatalogEntry, CatalogKind, filter_entries, spawn_load},
    context::Context,
    ui::{
        constants::{CATALOG_HINTS, DBD_RED, SEARCH_HINTS},
        spinner::{Spinner, spinner_frame},
    },
};
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tui_input::{Input, backend::crossterm::EventHandler};

use super::Component;

/// A searchable list over one catalog.
///
/// The catalog is loaded off the UI thread when the view is created. Until it
/// arrives the view shows a spinner; keys typed meanwhile still edit the query.
#[derive(Debug)]
pub struct CatalogView {
    kind: CatalogKind,
    entries: Option<Vec<CatalogEntry>>,
    visible: Vec<CatalogEntry>,
    pending: Option<oneshot::Receiver<Vec<CatalogEntry>>>,
    search: Input,
    list_state: ListState,
    spinner: Spinner,
}

impl Component for CatalogView {
    fn on_key(&mut self, key: KeyEvent, context: &mut Context) -> Option<Action> {
        match context.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('/') | KeyCode::Char('e') => {
                    Some(Action::SwitchInputMode(InputMode::Editing))
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.list_state.select_previous();
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.select_next();
                    None
                }
                KeyCode::Home => {
                    self.list_state.select_first();
                    None
                }
                KeyCode::End => {
                    self.select_last();
                    None
                }
                KeyCode::Esc => {
                    self.search.reset();
                    self.refilter();
                    None
                }
                _ => None,
            },
            InputMode::Editing => match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::SwitchInputMode(InputMode::Normal)),
                KeyCode::Up => {
                    self.list_state.select_previous();
                    None
                }
                KeyCode::Down => {
                    self.select_next();
                    None
                }
                _ => {
                    if self.search.handle_event(&Event::Key(key)).is_some() {
                        self.refilter();
                    }
                    None
                }
            },
        }
    }

    fn on_tick(&mut self) {
        self.poll_pending();
        if self.entries.is_none() {
            self.spinner.next_frame();
        }
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, context: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_search(buffer, context, chunks[0]);
        self.render_entries(buffer, chunks[1]);
        self.render_counter(buffer, chunks[2]);
    }

    fn key_hints(&self, input_mode: InputMode) -> &'static str {
        match input_mode {
            InputMode::Normal => CATALOG_HINTS,
            InputMode::Editing => SEARCH_HINTS,
        }
    }
}

impl CatalogView {
    pub fn new(kind: CatalogKind, context: &mut Context) -> Self {
        let receiver = spawn_load(
            context.resources.clone(),
            kind,
            context.settings.decode_policy(),
        );
        Self::loading(kind, receiver)
    }

    pub fn loading(kind: CatalogKind, receiver: oneshot::Receiver<Vec<CatalogEntry>>) -> Self {
        Self {
            kind,
            entries: None,
            visible: Vec::new(),
            pending: Some(receiver),
            search: Input::default(),
            list_state: ListState::default(),
            spinner: Spinner::new(),
        }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn is_loading(&self) -> bool {
        self.entries.is_none()
    }

    pub fn query(&self) -> &str {
        self.search.value()
    }

    pub fn visible(&self) -> &[CatalogEntry] {
        &self.visible
    }

    pub fn selected(&self) -> Option<&CatalogEntry> {
        self.list_state.selected().and_then(|index| self.visible.get(index))
    }

    // Takes the catalog once the background load has delivered it.
    fn poll_pending(&mut self) {
        let Some(receiver) = self.pending.as_mut() else {
            return;
        };
        match receiver.try_recv() {
            Ok(entries) => {
                log::debug!("{} {} ready for display", entries.len(), self.kind);
                self.pending = None;
                self.entries = Some(entries);
                self.refilter();
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                log::error!("The {} load ended without a result", self.kind);
                self.pending = None;
                self.entries = Some(Vec::new());
                self.refilter();
            }
        }
    }

    fn refilter(&mut self) {
        let Some(entries) = self.entries.as_deref() else {
            return;
        };
        self.visible = filter_entries(entries, Some(self.search.value()));
        let selected = if self.visible.is_empty() {
            None
        } else {
            Some(
                self.list_state
                    .selected()
                    .unwrap_or(0)
                    .min(self.visible.len() - 1),
            )
        };
        self.list_state.select(selected);
    }

    fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(index) => (index + 1).min(self.visible.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.list_state.select(Some(self.visible.len() - 1));
        }
    }

    fn render_search(&self, buffer: &mut Buffer, context: &Context, area: Rect) {
        let (title, border_color) = match context.input_mode {
            InputMode::Normal => (" Search (press '/' to type) ", Color::DarkGray),
            InputMode::Editing => (" Search ", Color::Yellow),
        };
        let width = area.width.saturating_sub(3) as usize;
        let scroll = self.search.visual_scroll(width);

        Paragraph::new(self.search.value())
            .scroll((0, scroll as u16))
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .border_type(BorderType::Rounded)
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(border_color)),
            )
            .render(area, buffer);
    }

    fn render_entries(&mut self, buffer: &mut Buffer, area: Rect) {
        let block = Block::default()
            .border_type(BorderType::Rounded)
            .borders(Borders::ALL)
            .title(format!(" {} ", self.kind.title()))
            .border_style(Style::default().fg(DBD_RED));

        let empty_text = match &self.entries {
            None => Some(spinner_frame(
                &self.spinner,
                &format!("Loading {}...", self.kind),
            )),
            Some(entries) if entries.is_empty() => {
                Some(format!("No {} available.", self.kind))
            }
            Some(_) if self.visible.is_empty() => {
                Some(format!("No results for \"{}\".", self.search.value()))
            }
            Some(_) => None,
        };

        if let Some(text) = empty_text {
            Paragraph::new(text)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buffer);
            return;
        }

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.name().to_string(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  [{}]", entry.asset_key()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buffer, &mut self.list_state);
    }

    fn render_counter(&self, buffer: &mut Buffer, area: Rect) {
        let Some(entries) = &self.entries else {
            return;
        };
        Paragraph::new(format!(
            "Showing {} of {} {}",
            self.visible.len(),
            entries.len(),
            self.kind
        ))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Right)
        .render(area, buffer);
    }
}
