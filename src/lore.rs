use crate::resources::{ResourceBundle, read_text};

pub const LORE_RESOURCE: &str = "lore.txt";

pub fn load_lore(bundle: &dyn ResourceBundle) -> String {
    match read_text(bundle, LORE_RESOURCE) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            log::warn!("{e}");
            String::new()
        }
    }
}

/// Wraps every paragraph of `text` to `width` columns, keeping blank lines between paragraphs.
pub fn wrap_lore(text: &str, width: usize) -> Vec<String> {
    let options = textwrap::Options::new(width.max(1))
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
    let mut lines = Vec::new();
    for (index, paragraph) in text.split("\n\n").enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(
            textwrap::wrap(paragraph.trim(), &options)
                .into_iter()
                .map(|line| line.into_owned()),
        );
    }
    lines
}
