//! Built-in icon set used when no custom images are supplied.

use super::card::CardKey;

/// A bundled icon. Its id doubles as the card key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BuiltinIcon {
    pub id: u32,
    pub name: &'static str,
}

impl BuiltinIcon {
    const fn new(id: u32, name: &'static str) -> Self {
        Self { id, name }
    }

    /// Card key for this icon.
    #[must_use]
    pub const fn key(self) -> CardKey {
        CardKey::new(self.id)
    }
}

/// Default icons. Must hold at least as many entries as the largest board has pairs.
pub const DEFAULT_ICONS: [BuiltinIcon; 12] = [
    BuiltinIcon::new(1, "face"),
    BuiltinIcon::new(2, "flower"),
    BuiltinIcon::new(3, "gift"),
    BuiltinIcon::new(4, "heart"),
    BuiltinIcon::new(5, "home"),
    BuiltinIcon::new(6, "lightning"),
    BuiltinIcon::new(7, "moon"),
    BuiltinIcon::new(8, "plane"),
    BuiltinIcon::new(9, "school"),
    BuiltinIcon::new(10, "send"),
    BuiltinIcon::new(11, "star"),
    BuiltinIcon::new(12, "work"),
];

/// Look up the default icon a built-in card should render.
#[must_use]
pub fn icon_for(key: CardKey) -> Option<BuiltinIcon> {
    DEFAULT_ICONS.iter().copied().find(|icon| icon.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardSize;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_icons_cover_every_board() {
        for size in BoardSize::ALL {
            assert!(DEFAULT_ICONS.len() >= size.pair_count(), "{size} needs more icons");
        }
    }

    #[test]
    fn test_icon_ids_are_distinct() {
        let ids: FxHashSet<u32> = DEFAULT_ICONS.iter().map(|icon| icon.id).collect();
        assert_eq!(ids.len(), DEFAULT_ICONS.len());
    }

    #[test]
    fn test_icon_lookup() {
        assert_eq!(icon_for(CardKey::new(4)).map(|icon| icon.name), Some("heart"));
        assert!(icon_for(CardKey::new(99)).is_none());
    }
}
