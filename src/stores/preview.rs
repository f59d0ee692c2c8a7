use crate::services::emoji_api::EmojiEntry;
use crate::utils::emoji_reference::{parse_emoji_reference, EmojiReference};

/// What a thumbnail click copies to the clipboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CopyMode {
    /// Synthetic key, e.g. `nature.smile`
    #[default]
    Key,
    /// Raw markup, e.g. `<:smile:123>`
    Markup,
}

impl CopyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyMode::Key => "key",
            CopyMode::Markup => "markup",
        }
    }

    pub const ALL: [CopyMode; 2] = [CopyMode::Key, CopyMode::Markup];

    /// Button label in the toggle
    pub fn label(&self) -> &'static str {
        match self {
            CopyMode::Key => "Name",
            CopyMode::Markup => "Markup",
        }
    }

    pub fn clipboard_text<'a>(&self, entry: &'a EmojiEntry) -> &'a str {
        match self {
            CopyMode::Key => &entry.key,
            CopyMode::Markup => &entry.markup,
        }
    }
}

/// Result of feeding the custom input into the preview
#[derive(Clone, Debug, PartialEq)]
pub enum InputOutcome {
    /// Input was empty; flag cleared, preview untouched
    Cleared,
    Recognized(EmojiReference),
    /// Nothing recognized; flag set, preview untouched
    Invalid,
}

/// Preview pane state, owned by the page view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewState {
    current: Option<String>,
    invalid: bool,
}

impl PreviewState {
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// URL the previews should show
    pub fn display_url<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.current.as_deref().unwrap_or(fallback)
    }

    /// Select an emoji from the catalog grid
    pub fn select(&mut self, url: impl Into<String>) {
        self.current = Some(url.into());
    }

    /// Apply the custom reference input
    ///
    /// A previously shown emoji is never blanked by empty or invalid input.
    pub fn apply_input(&mut self, input: &str) -> InputOutcome {
        if input.is_empty() {
            self.invalid = false;
            return InputOutcome::Cleared;
        }

        match parse_emoji_reference(input) {
            Some(reference) => {
                self.invalid = false;
                self.current = Some(reference.display_url());
                InputOutcome::Recognized(reference)
            }
            None => {
                self.invalid = true;
                InputOutcome::Invalid
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::emoji_reference::ImageFormat;

    const FALLBACK: &str = "https://cdn.crni.xyz/r/status.png";

    fn entry() -> EmojiEntry {
        EmojiEntry {
            key: "nature.smile".to_string(),
            name: "smile".to_string(),
            url: "https://cdn.discordapp.com/emojis/123.png".to_string(),
            markup: "<:smile:123>".to_string(),
        }
    }

    #[test]
    fn test_initial_state_shows_fallback() {
        let state = PreviewState::default();
        assert!(!state.is_invalid());
        assert_eq!(state.display_url(FALLBACK), FALLBACK);
    }

    #[test]
    fn test_recognized_input_replaces_selection() {
        let mut state = PreviewState::default();
        state.select("https://cdn.discordapp.com/emojis/1.png");

        let outcome = state.apply_input("855555555555555555");
        assert_eq!(
            outcome,
            InputOutcome::Recognized(EmojiReference::new("855555555555555555", ImageFormat::Gif))
        );
        assert_eq!(state.display_url(FALLBACK), "https://cdn.discordapp.com/emojis/855555555555555555.gif");
        assert!(!state.is_invalid());
    }

    #[test]
    fn test_invalid_input_keeps_selection() {
        let mut state = PreviewState::default();
        state.select("https://cdn.discordapp.com/emojis/1.png");

        assert_eq!(state.apply_input("not an emoji"), InputOutcome::Invalid);
        assert!(state.is_invalid());
        assert_eq!(state.display_url(FALLBACK), "https://cdn.discordapp.com/emojis/1.png");
    }

    #[test]
    fn test_invalid_input_without_selection_keeps_fallback() {
        let mut state = PreviewState::default();
        state.apply_input("nope");
        assert!(state.is_invalid());
        assert_eq!(state.display_url(FALLBACK), FALLBACK);
    }

    #[test]
    fn test_non_ascii_digit_id_keeps_selection() {
        let mut state = PreviewState::default();
        state.select("https://cdn.discordapp.com/emojis/1.png");

        assert_eq!(state.apply_input("١٢٣"), InputOutcome::Invalid);
        assert!(state.is_invalid());
        assert_eq!(state.display_url(FALLBACK), "https://cdn.discordapp.com/emojis/1.png");
    }

    #[test]
    fn test_empty_input_clears_flag_only() {
        let mut state = PreviewState::default();
        state.select("https://cdn.discordapp.com/emojis/1.png");
        state.apply_input("garbage");
        assert!(state.is_invalid());

        assert_eq!(state.apply_input(""), InputOutcome::Cleared);
        assert!(!state.is_invalid());
        assert_eq!(state.display_url(FALLBACK), "https://cdn.discordapp.com/emojis/1.png");
    }

    #[test]
    fn test_select_does_not_touch_flag() {
        let mut state = PreviewState::default();
        state.apply_input("garbage");
        state.select("https://cdn.discordapp.com/emojis/2.png");
        assert!(state.is_invalid());
        assert_eq!(state.display_url(FALLBACK), "https://cdn.discordapp.com/emojis/2.png");
    }

    #[test]
    fn test_copy_mode_text() {
        let entry = entry();
        assert_eq!(CopyMode::Key.clipboard_text(&entry), "nature.smile");
        assert_eq!(CopyMode::Markup.clipboard_text(&entry), "<:smile:123>");
    }

    #[test]
    fn test_copy_mode_defaults_to_key() {
        assert_eq!(CopyMode::default(), CopyMode::Key);
        assert_eq!(CopyMode::ALL[0], CopyMode::default());
        assert_eq!(CopyMode::Markup.as_str(), "markup");
    }
}
