//! Discord emoji reference parsing
//!
//! Users paste emoji in whatever form they have at hand: a CDN link, the
//! `<:name:id>` markup Discord uses in messages, or a bare numeric ID. All of
//! them resolve to the same canonical CDN image URL.

use once_cell::sync::Lazy;
use regex::Regex;

/// Base path of Discord's custom emoji CDN
pub const EMOJI_CDN_BASE: &str = "https://cdn.discordapp.com/emojis";

static CDN_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:cdn\.)?discord(?:app)?\.com/(?:emojis|assets)/([0-9]+)\.(png|gif|webp)")
        .expect("Failed to compile emoji CDN regex")
});

static MARKUP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(a)?:[a-zA-Z0-9_]+:([0-9]+)>").expect("Failed to compile emoji markup regex")
});

static EMOJI_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)$").expect("Failed to compile emoji ID regex")
});

/// Image formats served by the emoji CDN
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Gif,
    Webp,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::Webp => "webp",
        }
    }

    /// Parse a file extension, ignoring case
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }
}

/// A recognized emoji: numeric ID plus the format to request it in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiReference {
    pub id: String,
    pub format: ImageFormat,
}

impl EmojiReference {
    pub fn new(id: impl Into<String>, format: ImageFormat) -> Self {
        Self { id: id.into(), format }
    }

    pub fn display_url(&self) -> String {
        emoji_cdn_url(&self.id, self.format)
    }
}

/// Build a CDN image URL for an emoji ID
pub fn emoji_cdn_url(id: &str, format: ImageFormat) -> String {
    format!("{}/{}.{}", EMOJI_CDN_BASE, id, format.as_str())
}

/// Recognize an emoji reference in free-form text
///
/// Tried in order, first match wins:
/// 1. CDN URL (`cdn.discordapp.com/emojis/123.webp`), keeps its extension
/// 2. Message markup (`<:name:123>` or `<a:name:123>`), always `gif`
/// 3. Bare numeric ID (`123`), always `gif`
///
/// Returns `None` when nothing matches.
pub fn parse_emoji_reference(input: &str) -> Option<EmojiReference> {
    if let Some(caps) = CDN_URL_REGEX.captures(input) {
        let format = ImageFormat::from_extension(&caps[2])?;
        return Some(EmojiReference::new(&caps[1], format));
    }

    // The animation flag is not consulted: gif also serves static emoji
    if let Some(caps) = MARKUP_REGEX.captures(input) {
        return Some(EmojiReference::new(&caps[2], ImageFormat::Gif));
    }

    EMOJI_ID_REGEX
        .captures(input)
        .map(|caps| EmojiReference::new(&caps[1], ImageFormat::Gif))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdn_url_keeps_extension() {
        let reference = parse_emoji_reference("https://cdn.discordapp.com/emojis/123456.webp").unwrap();
        assert_eq!(reference.id, "123456");
        assert_eq!(reference.format, ImageFormat::Webp);

        let reference = parse_emoji_reference("https://cdn.discordapp.com/emojis/987.png").unwrap();
        assert_eq!(reference.format, ImageFormat::Png);

        let reference = parse_emoji_reference("https://cdn.discordapp.com/emojis/987.gif").unwrap();
        assert_eq!(reference.format, ImageFormat::Gif);
    }

    #[test]
    fn test_cdn_url_variants() {
        let inputs = [
            "discord.com/emojis/42.png",
            "http://discordapp.com/assets/42.png",
            "cdn.discord.com/emojis/42.png",
            "HTTPS://CDN.DISCORDAPP.COM/EMOJIS/42.PNG",
            "https://cdn.discordapp.com/emojis/42.png?size=96&quality=lossless",
        ];
        for input in inputs {
            let reference = parse_emoji_reference(input).unwrap();
            assert_eq!(reference.id, "42", "input: {}", input);
            assert_eq!(reference.format, ImageFormat::Png, "input: {}", input);
        }
    }

    #[test]
    fn test_cdn_url_unknown_extension_is_rejected() {
        assert!(parse_emoji_reference("https://cdn.discordapp.com/emojis/42.jpg").is_none());
    }

    #[test]
    fn test_markup_defaults_to_gif() {
        let reference = parse_emoji_reference("<:smile:123456789>").unwrap();
        assert_eq!(reference, EmojiReference::new("123456789", ImageFormat::Gif));

        let reference = parse_emoji_reference("<a:party_blob:555>").unwrap();
        assert_eq!(reference, EmojiReference::new("555", ImageFormat::Gif));
    }

    #[test]
    fn test_markup_inside_text() {
        let reference = parse_emoji_reference("look at this <:Kek_2:31337> lol").unwrap();
        assert_eq!(reference.id, "31337");
    }

    #[test]
    fn test_cdn_url_wins_over_markup() {
        let input = "<:smile:111> https://cdn.discordapp.com/emojis/222.webp";
        let reference = parse_emoji_reference(input).unwrap();
        assert_eq!(reference, EmojiReference::new("222", ImageFormat::Webp));
    }

    #[test]
    fn test_bare_id() {
        assert_eq!(
            parse_emoji_reference("855555555555555555").map(|r| r.display_url()).as_deref(),
            Some("https://cdn.discordapp.com/emojis/855555555555555555.gif")
        );
    }

    #[test]
    fn test_unrecognized_input() {
        for input in ["", "smile", "123abc", " 123", "<:smile:>", ":smile:123", "<:bad name:1>"] {
            assert!(parse_emoji_reference(input).is_none(), "input: {:?}", input);
        }
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        let inputs = [
            "١٢٣",
            "１２３",
            "<:a:١٢٣>",
            "<a:smile:１２３>",
            "https://cdn.discordapp.com/emojis/١٢٣.png",
        ];
        for input in inputs {
            assert!(parse_emoji_reference(input).is_none(), "input: {:?}", input);
        }
    }

    #[test]
    fn test_display_url() {
        let reference = EmojiReference::new("1", ImageFormat::Png);
        assert_eq!(reference.display_url(), "https://cdn.discordapp.com/emojis/1.png");
    }

    #[test]
    fn test_image_format_from_extension() {
        assert_eq!(ImageFormat::from_extension("WebP"), Some(ImageFormat::Webp));
        assert_eq!(ImageFormat::from_extension("jpeg"), None);
    }
}
