use gtk4 as gtk;
use gtk4::gdk;
use once_cell::sync::OnceCell;

/// Stylesheet applied to every placeholder unless the application overrides
/// the classes itself: a 15 px light-gray message under an unstyled icon.
pub const DEFAULT_CSS: &str = "\
.placeholder-message {
    font-size: 15px;
    color: #aaaaaa;
}
";

static CSS_INSTALLED: OnceCell<()> = OnceCell::new();

/// Installs [`DEFAULT_CSS`] on the default display, once per process.
///
/// Called automatically on construction; safe to call again. Applications
/// that want a different look can simply restyle the `placeholder-*` classes
/// at a higher priority.
pub fn install_default_css() {
    if CSS_INSTALLED.get().is_some() {
        return;
    }
    let Some(display) = gdk::Display::default() else {
        tracing::warn!("no default display, skipping placeholder CSS install");
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_data(DEFAULT_CSS);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
    let _ = CSS_INSTALLED.set(());
}
