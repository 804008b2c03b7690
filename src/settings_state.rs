// settings_state.rs

use crate::{app_state::Tab, settings::Settings};

// Rows of the settings screen, in display order.
pub const SETTING_ROWS: usize = 3;

#[derive(Debug, Default)]
pub struct SettingsState {
    pub selected_setting: usize,
    pub selected_options: Vec<usize>,
}

impl SettingsState {
    pub fn from_settings(settings: &Settings) -> Self {
        SettingsState {
            selected_setting: 0,
            selected_options: vec![
                if settings.skip_invalid_records { 1 } else { 0 },
                if settings.debug_mode { 1 } else { 0 },
                settings.start_tab.index(),
            ],
        }
    }

    pub fn apply_to(&self, settings: &mut Settings) {
        settings.skip_invalid_records = self.selected_options[0] == 1;
        settings.debug_mode = self.selected_options[1] == 1;
        settings.start_tab = Tab::from_index(self.selected_options[2]).unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_mirrors_and_applies_settings() {
        let settings = Settings {
            skip_invalid_records: true,
            start_tab: Tab::Lore,
            ..Settings::default()
        };
        let mut state = SettingsState::from_settings(&settings);
        assert_eq!(state.selected_options, [1, 0, 4]);

        state.selected_options[1] = 1;
        let mut updated = settings.clone();
        state.apply_to(&mut updated);
        assert!(updated.debug_mode);
        assert_eq!(updated.start_tab, Tab::Lore);
    }
}
