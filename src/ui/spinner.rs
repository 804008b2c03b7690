const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    current_frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_frame(&mut self) {
        self.current_frame = (self.current_frame + 1) % SPINNER_CHARS.len();
    }

    pub fn get_frame(&self) -> char {
        SPINNER_CHARS[self.current_frame]
    }
}

pub fn spinner_frame(spinner: &Spinner, label: &str) -> String {
    format!("{} {label}", spinner.get_frame())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_wraps_around() {
        let mut spinner = Spinner::new();
        for _ in 0..SPINNER_CHARS.len() {
            spinner.next_frame();
        }
        assert_eq!(spinner.get_frame(), SPINNER_CHARS[0]);
        assert_eq!(spinner_frame(&spinner, "Loading perks..."), "⠋ Loading perks...");
    }
}
