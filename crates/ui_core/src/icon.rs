//! Icon name forwarding. Glyphs are resolved by the stylesheet that owns the `hero-*` classes.

/// Prefix every icon class carries.
pub const ICON_PREFIX: &str = "hero-";

/// Returns the `hero-<name>` class for an icon name, leaving already-prefixed names untouched.
pub fn icon_class(name: &str) -> String {
    let name = name.trim();
    if name.starts_with(ICON_PREFIX) {
        name.to_string()
    } else {
        format!("{ICON_PREFIX}{name}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_names_gain_the_prefix_once() {
        assert_eq!(icon_class("home"), "hero-home");
        assert_eq!(icon_class("hero-home"), "hero-home");
        assert_eq!(icon_class(" x-mark "), "hero-x-mark");
    }
}
