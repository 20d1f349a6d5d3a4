//! Roving keyboard focus inside open menus.

/// Returns the index to focus after `key` is pressed inside a menu.
///
/// `enabled[i]` reports whether item `i` can take focus. Arrow keys wrap around and skip disabled
/// items; Home/End jump to the first/last enabled item. Other keys, and menus with no enabled
/// items, yield `None`.
pub fn roving_target(enabled: &[bool], current: Option<usize>, key: &str) -> Option<usize> {
    let focusable: Vec<usize> = enabled
        .iter()
        .enumerate()
        .filter_map(|(index, enabled)| enabled.then_some(index))
        .collect();
    let first = *focusable.first()?;
    let last = *focusable.last()?;

    match key {
        "Home" => Some(first),
        "End" => Some(last),
        "ArrowDown" => Some(match current {
            Some(current) => focusable
                .iter()
                .copied()
                .find(|index| *index > current)
                .unwrap_or(first),
            None => first,
        }),
        "ArrowUp" => Some(match current {
            Some(current) => focusable
                .iter()
                .rev()
                .copied()
                .find(|index| *index < current)
                .unwrap_or(last),
            None => last,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ITEMS: [bool; 4] = [true, false, true, true];

    #[test]
    fn arrows_skip_disabled_items_and_wrap() {
        assert_eq!(roving_target(&ITEMS, Some(0), "ArrowDown"), Some(2));
        assert_eq!(roving_target(&ITEMS, Some(3), "ArrowDown"), Some(0));
        assert_eq!(roving_target(&ITEMS, Some(2), "ArrowUp"), Some(0));
        assert_eq!(roving_target(&ITEMS, Some(0), "ArrowUp"), Some(3));
    }

    #[test]
    fn entering_without_focus_picks_an_edge() {
        assert_eq!(roving_target(&ITEMS, None, "ArrowDown"), Some(0));
        assert_eq!(roving_target(&ITEMS, None, "ArrowUp"), Some(3));
        assert_eq!(roving_target(&ITEMS, Some(2), "Home"), Some(0));
        assert_eq!(roving_target(&ITEMS, Some(0), "End"), Some(3));
    }

    #[test]
    fn unrelated_keys_and_fully_disabled_menus_do_nothing() {
        assert_eq!(roving_target(&ITEMS, Some(0), "Tab"), None);
        assert_eq!(roving_target(&[false, false], None, "ArrowDown"), None);
        assert_eq!(roving_target(&[], None, "Home"), None);
    }
}
