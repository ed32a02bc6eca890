use content::ContentType;

// the accent palette tied to content types, used for borders and
// backgrounds everywhere a typed item is displayed
//
// this is the only copy of the type -> accent table; the stub, the detail
// title, and the detail date all resolve through it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccentColor {
    Blue,
    Yellow,
    Cyan,
    Green,
    Purple,
}

impl AccentColor {
    pub fn all() -> Vec<AccentColor> {
        vec![
            AccentColor::Blue,
            AccentColor::Yellow,
            AccentColor::Cyan,
            AccentColor::Green,
            AccentColor::Purple,
        ]
    }

    pub fn to_css_color(self) -> &'static str {
        match self {
            AccentColor::Blue => "#008EFF",
            AccentColor::Yellow => "#F3A900",
            AccentColor::Cyan => "#009C94",
            AccentColor::Green => "#009B00",
            AccentColor::Purple => "#BF2BFF",
        }
    }
}

impl From<ContentType> for AccentColor {
    fn from(kind: ContentType) -> AccentColor {
        match kind {
            ContentType::Essay => AccentColor::Blue,
            ContentType::Tutorial => AccentColor::Yellow,
            ContentType::Project => AccentColor::Cyan,
            ContentType::Other => AccentColor::Green,
            ContentType::Uncategorized => AccentColor::Purple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    fn resolve(tag: &str) -> AccentColor {
        AccentColor::from(ContentType::from_tag(tag))
    }

    #[test]
    fn palette_has_five_distinct_colors() {
        let all = AccentColor::all();
        assert_eq!(all.len(), 5);

        let css: HashSet<_> = all.iter().map(|color| color.to_css_color()).collect();
        assert_eq!(css.len(), 5);
    }

    #[test]
    fn known_tags_resolve_per_table() {
        assert_eq!(resolve("essay"), AccentColor::Blue);
        assert_eq!(resolve("tutorial"), AccentColor::Yellow);
        assert_eq!(resolve("project"), AccentColor::Cyan);
        assert_eq!(resolve("other"), AccentColor::Green);
    }

    #[test]
    fn named_accents_are_distinct() {
        assert_ne!(resolve("essay"), resolve("tutorial"));
    }

    #[test]
    fn unrecognized_tags_share_the_fallback() {
        assert_eq!(resolve(""), AccentColor::Purple);
        assert_eq!(resolve("unknown-tag"), resolve(""));
        assert_eq!(resolve("n0t-a-t@g"), AccentColor::Purple);

        // the fallback is not one of the named-tag accents
        assert_ne!(resolve("unknown-tag"), resolve("essay"));
        assert_ne!(resolve("unknown-tag"), resolve("tutorial"));
        assert_ne!(resolve("unknown-tag"), resolve("project"));
        assert_ne!(resolve("unknown-tag"), resolve("other"));
    }

    #[test]
    fn resolution_is_idempotent() {
        assert_eq!(resolve("essay"), resolve("essay"));
        assert_eq!(resolve("wibble"), resolve("wibble"));
    }
}
