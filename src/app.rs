// /app.rs
use crate::context::Context;
use crate::tui::{Tui, TuiEvent};
use crate::ui::{self, Component, ComponentEnum};
use crate::{
    app_state::Tab,
    logging,
    message::Message,
    resources::SharedResources,
    settings::Settings,
};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// Console messages kept; only the newest is shown.
pub const MESSAGE_HISTORY: usize = 20;

pub enum Action {
    Quit,
    SwitchTab(Tab),
    SwitchInputMode(InputMode),
    SettingsChanged,
    Notify(Message),
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

pub struct App {
    // Application state and control flow
    running: bool,
    tab: Tab,
    component: ComponentEnum,
    input_mode: InputMode,

    // --- Global information
    settings: Settings,
    resources: SharedResources,
    messages: Vec<Message>,
}

impl App {
    pub fn new(mut settings: Settings) -> Self {
        let resources = settings.resources();
        let tab = settings.start_tab;
        let component = ui::component_for(
            tab,
            &mut Context {
                settings: &mut settings,
                resources: &resources,
                input_mode: &InputMode::Normal,
                messages: &[],
            },
        );
        Self {
            running: true,
            tab,
            component,
            input_mode: InputMode::Normal,
            settings,
            resources,
            messages: Vec::new(),
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?
            .tick_rate(8.0) // 8 ticks per second, also drives the loading spinner
            .frame_rate(30.0); // 30 frames per second

        tui.enter()?; // Starts event handler, enters raw mode, enters alternate screen

        loop {
            tui.draw(|frame| {
                let context = Context {
                    settings: &mut self.settings,
                    resources: &self.resources,
                    input_mode: &self.input_mode,
                    messages: &self.messages,
                };
                let area = frame.area();
                let hints = self.component.key_hints(self.input_mode);
                if let Some(body) =
                    ui::render_chrome(area, frame.buffer_mut(), self.tab, hints, &context)
                {
                    self.component.render(body, frame.buffer_mut(), &context);
                }
            })?;

            if let Some(event) = tui.next().await {
                // `tui.next().await` blocks till next event
                self.handle_tui_event(event);
            };

            if !self.running {
                break;
            }
        }

        tui.exit()?; // stops event handler, exits raw mode, exits alternate screen
        Ok(())
    }

    pub fn handle_tui_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key_event) => self.on_key(key_event),
            TuiEvent::Tick => self.component.on_tick(),
            TuiEvent::Error => log::warn!("Failed to read a terminal event"),
            TuiEvent::Init | TuiEvent::Render | TuiEvent::Resize(_, _) => {}
        }
    }

    pub fn on_key(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.handle_action(Action::Quit);
            return;
        }

        // Global navigation is only available while no text field has focus.
        if self.input_mode == InputMode::Normal {
            let global = match key_event.code {
                KeyCode::Tab => Some(Action::SwitchTab(self.tab.next())),
                KeyCode::BackTab => Some(Action::SwitchTab(self.tab.previous())),
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char(c) => c
                    .to_digit(10)
                    .and_then(|digit| Tab::from_index((digit as usize).checked_sub(1)?))
                    .map(Action::SwitchTab),
                _ => None,
            };
            if let Some(action) = global {
                self.handle_action(action);
                return;
            }
        }

        let action = self.component.on_key(
            key_event,
            &mut Context {
                settings: &mut self.settings,
                resources: &self.resources,
                input_mode: &self.input_mode,
                messages: &self.messages,
            },
        );
        if let Some(action) = action {
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::SwitchTab(tab) => self.switch_tab(tab),
            Action::SwitchInputMode(input_mode) => self.input_mode = input_mode,
            Action::SettingsChanged => self.apply_settings(),
            Action::Notify(message) => self.add_message(message),
        }
    }

    // Every activation builds a fresh screen; the previous one is dropped with its data.
    fn switch_tab(&mut self, tab: Tab) {
        log::debug!("Switching to {tab}");
        self.tab = tab;
        self.input_mode = InputMode::Normal;
        self.component = ui::component_for(
            tab,
            &mut Context {
                settings: &mut self.settings,
                resources: &self.resources,
                input_mode: &self.input_mode,
                messages: &self.messages,
            },
        );
    }

    fn apply_settings(&mut self) {
        self.resources = self.settings.resources();
        logging::set_level(self.settings.log_level());
        match self.settings.save() {
            Ok(()) => self.add_message(Message::info("Settings saved")),
            Err(e) => {
                log::error!("Failed to save settings: {e:#?}");
                self.add_message(Message::error(format!("Failed to save settings: {e}")));
            }
        }
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        if self.messages.len() > MESSAGE_HISTORY {
            let excess = self.messages.len() - MESSAGE_HISTORY;
            self.messages.drain(..excess);
        }
    }
}
