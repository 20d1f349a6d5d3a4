//! Avatar content selection.

use crate::ConfigError;

/// Icon shown when an avatar has neither an image nor a name to derive initials from.
pub const PLACEHOLDER_ICON: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
/// What an avatar frame displays.
pub enum AvatarContent {
    /// Image with alternative text.
    Image {
        /// Image URL.
        src: String,
        /// Alternative text.
        alt: String,
    },
    /// Up to two initials.
    Initials(String),
    /// Generic person icon.
    Placeholder,
}

/// Picks avatar content: the image when `src` is set, otherwise initials from `name`, otherwise
/// the placeholder icon.
///
/// # Errors
///
/// Returns [`ConfigError::MissingAlt`] when `alt` is blank.
pub fn avatar_content(
    src: Option<&str>,
    name: Option<&str>,
    alt: &str,
) -> Result<AvatarContent, ConfigError> {
    if alt.trim().is_empty() {
        return Err(ConfigError::MissingAlt);
    }
    if let Some(src) = src.map(str::trim).filter(|src| !src.is_empty()) {
        return Ok(AvatarContent::Image {
            src: src.to_string(),
            alt: alt.to_string(),
        });
    }
    let initials = name.map(initials).unwrap_or_default();
    if initials.is_empty() {
        Ok(AvatarContent::Placeholder)
    } else {
        Ok(AvatarContent::Initials(initials))
    }
}

/// Uppercased first letters of the first and last words of `name`.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut out: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
    if let Some(last) = words.last() {
        out.extend(last.chars().take(1).flat_map(char::to_uppercase));
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initials_use_first_and_last_words() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("Grace Brewster Murray Hopper"), "GH");
        assert_eq!(initials("  plato "), "P");
        assert_eq!(initials(""), "");
        assert_eq!(initials("émile zola"), "ÉZ");
    }

    #[test]
    fn image_wins_then_initials_then_placeholder() {
        assert_eq!(
            avatar_content(Some("/a.png"), Some("Ada"), "Ada"),
            Ok(AvatarContent::Image {
                src: "/a.png".to_string(),
                alt: "Ada".to_string()
            })
        );
        assert_eq!(
            avatar_content(Some("  "), Some("Ada Lovelace"), "Ada"),
            Ok(AvatarContent::Initials("AL".to_string()))
        );
        assert_eq!(
            avatar_content(None, None, "Guest"),
            Ok(AvatarContent::Placeholder)
        );
    }

    #[test]
    fn blank_alt_is_rejected() {
        assert_eq!(
            avatar_content(Some("/a.png"), None, " "),
            Err(ConfigError::MissingAlt)
        );
    }
}
