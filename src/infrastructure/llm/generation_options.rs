use crate::presentation::config::Settings;

/// Request defaults shared by every LLM vendor client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub max_input_characters: usize,
    pub max_output_tokens: usize,
    pub temperature: f32,
}

impl GenerationOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            max_input_characters: settings.input_default_max_characters,
            max_output_tokens: settings.generation_default_max_tokens,
            temperature: settings.generation_default_temperature,
        }
    }

    /// Cuts `text` to the configured number of characters and trims it.
    pub fn process_text(&self, text: &str) -> String {
        let cut = match text.char_indices().nth(self.max_input_characters) {
            Some((idx, _)) => &text[..idx],
            None => text,
        };
        cut.trim().to_string()
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_input_characters: 1024,
            max_output_tokens: 200,
            temperature: 0.1,
        }
    }
}
