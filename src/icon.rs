use gtk4 as gtk;
use gtk4::gdk;
use gtk4::prelude::*;

/// Icon name used when the caller supplies no icon of their own.
///
/// The embedding application is expected to ship an icon under this name in
/// its icon theme (an icon resource resolved by name, same as any other
/// themed icon).
pub const FALLBACK_ICON_NAME: &str = "mark";

/// The image shown above the placeholder message.
#[derive(Debug, Clone)]
pub enum Icon {
    /// A themed icon resolved by name.
    Named(String),
    /// A concrete image object, e.g. a `gdk::Texture`.
    Paintable(gdk::Paintable),
}

impl Icon {
    /// A themed icon.
    pub fn named(name: impl Into<String>) -> Self {
        Icon::Named(name.into())
    }

    /// Renders this icon onto `image`.
    pub fn apply_to(&self, image: &gtk::Image) {
        match self {
            Icon::Named(name) => image.set_icon_name(Some(name.as_str())),
            Icon::Paintable(paintable) => image.set_paintable(Some(paintable)),
        }
    }
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Named(FALLBACK_ICON_NAME.to_string())
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Icon::named(name)
    }
}

impl From<gdk::Paintable> for Icon {
    fn from(paintable: gdk::Paintable) -> Self {
        Icon::Paintable(paintable)
    }
}
