// ui/settings_menu.rs

use crate::{
    app::{Action, InputMode},
    app_state::Tab,
    context::Context,
    settings::Settings,
    settings_state::{SETTING_ROWS, SettingsState},
    ui::{center_rect, constants::SETTINGS_HINTS},
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Buffer,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};
use strum::IntoEnumIterator;

use super::Component;

const SETTING_NAMES: [&str; SETTING_ROWS] = ["Skip invalid records", "Debug logging", "Start tab"];
const TOGGLE_OPTIONS: [&str; 2] = ["Off", "On"];

#[derive(Debug)]
pub struct SettingsMenu {
    pub state: SettingsState,
}

impl Component for SettingsMenu {
    fn on_key(&mut self, key: KeyEvent, context: &mut Context) -> Option<Action> {
        let changed = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.selected_setting =
                    (self.state.selected_setting + SETTING_ROWS - 1) % SETTING_ROWS;
                false
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.selected_setting = (self.state.selected_setting + 1) % SETTING_ROWS;
                false
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.change_settings(-1);
                true
            }
            KeyCode::Right | KeyCode::Enter | KeyCode::Char('l') => {
                self.change_settings(1);
                true
            }
            _ => false,
        };

        if !changed {
            return None;
        }
        self.state.apply_to(context.settings);
        Some(Action::SettingsChanged)
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, context: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .flex(ratatui::layout::Flex::Center)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(SETTING_ROWS as u16 + 2),
            ])
            .split(area);

        self.render_console(buffer, context, chunks[0], chunks[1]);
        self.render_settings(buffer, chunks[3]);
    }

    fn key_hints(&self, _input_mode: InputMode) -> &'static str {
        SETTINGS_HINTS
    }
}

impl SettingsMenu {
    pub fn new(context: &mut Context) -> Self {
        Self {
            state: SettingsState::from_settings(context.settings),
        }
    }

    fn options(row: usize) -> Vec<String> {
        match row {
            2 => Tab::iter().map(|tab| tab.to_string()).collect(),
            _ => TOGGLE_OPTIONS.iter().map(|option| option.to_string()).collect(),
        }
    }

    fn render_settings(&self, buffer: &mut Buffer, area: Rect) {
        let text: Vec<Line> = SETTING_NAMES
            .iter()
            .enumerate()
            .map(|(number, setting)| {
                let highlight_line_style = if number == self.state.selected_setting {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                let mut spans = vec![
                    Span::styled(
                        format!("{}. ", number + 1),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(format!("{:<22}", setting), highlight_line_style),
                ];

                let selected_option = self.state.selected_options[number];
                spans.extend(Self::options(number).into_iter().enumerate().map(
                    |(option_number, option)| {
                        let option_style = if option_number == selected_option {
                            Style::default().fg(Color::Green)
                        } else {
                            Style::default().fg(Color::DarkGray)
                        };
                        Span::styled(format!("[{}] ", option), option_style)
                    },
                ));

                Line::from(spans)
            })
            .collect();

        let width = text.iter().map(Line::width).max().unwrap_or(0) as u16;
        let settings_area = center_rect(
            area,
            Constraint::Length(width.saturating_add(2)),
            Constraint::Percentage(100),
        );

        Paragraph::new(text)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .border_type(BorderType::Rounded)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(settings_area, buffer);
    }

    fn render_console(&self, buffer: &mut Buffer, context: &Context, source: Rect, path: Rect) {
        Paragraph::new(format!("Content: {}", context.resources.describe()))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .render(source, buffer);

        Paragraph::new(format!(
            "Settings are saved at: {}",
            Settings::default_path().display()
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .render(path, buffer);
    }

    fn change_settings(&mut self, change: isize) {
        let current_setting = self.state.selected_setting;
        let count = Self::options(current_setting).len() as isize;
        let selected = self.state.selected_options[current_setting] as isize;
        self.state.selected_options[current_setting] = (selected + change).rem_euclid(count) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::resources_for;
    use crossterm::event::KeyModifiers;

    #[test]
    fn changes_apply_to_settings() {
        let mut settings = Settings::default();
        let resources = resources_for(None);
        let mut context = Context {
            settings: &mut settings,
            resources: &resources,
            input_mode: &InputMode::Normal,
            messages: &[],
        };
        let mut menu = SettingsMenu::new(&mut context);

        let action = menu.on_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE), &mut context);
        assert!(matches!(action, Some(Action::SettingsChanged)));
        assert!(context.settings.skip_invalid_records);

        menu.on_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE), &mut context);
        menu.on_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE), &mut context);
        assert_eq!(context.settings.start_tab, Tab::Settings);

        assert!(menu.on_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &mut context).is_none());
    }
}
