use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use std::rc::Rc;

use crate::icon::Icon;
use crate::style;

/// Vertical position of the content block: its center sits at this fraction
/// of the distance between the overlay's top edge and its vertical center.
/// Kept as-is from the original design; it places the block visibly above
/// true center.
const CENTER_Y_RATIO: f64 = 0.3;

/// Gap between the icon and the message label, in pixels.
const MESSAGE_SPACING: i32 = 15;

/// Horizontal inset of the message label from the content edges, in pixels.
const MESSAGE_MARGIN: i32 = 10;

/// Handler invoked when the placeholder is tapped.
pub type TapHandler = Box<dyn Fn()>;

/// Configuration for a [`PlaceholderView`].
#[derive(Debug, Clone)]
pub struct PlaceholderConfig {
    /// Message shown below the icon. May be empty, which renders an empty
    /// label region.
    pub message: String,
    /// Icon shown above the message. `None` falls back to `fallback_icon`.
    pub icon: Option<Icon>,
    /// Icon used when `icon` is `None`.
    pub fallback_icon: Icon,
    /// Fixed pixel size for the icon; `None` keeps its natural size.
    pub icon_pixel_size: Option<i32>,
}

impl PlaceholderConfig {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            message: String::new(),
            icon: None,
            fallback_icon: Icon::default(),
            icon_pixel_size: None,
        }
    }
}

/// Overlay shown on top of a parent widget when there is no content to
/// display.
///
/// The view does not own its parent: it keeps a weak reference and attaches
/// or detaches itself as a child on [`show`](Self::show) /
/// [`removed`](Self::removed). A tap anywhere on the overlay detaches it
/// first and then fires the tap handler, so the handler never runs while the
/// placeholder is still visible and cannot fire twice for one appearance.
///
/// The parent should be a container whose layout allocates every child, such
/// as `gtk::Box`; the overlay expands to fill whatever space the parent
/// gives it.
pub struct PlaceholderView {
    parent: glib::WeakRef<gtk::Widget>,
    root: gtk::Box,
    container: gtk::Box,
    image: gtk::Image,
    label: gtk::Label,
    on_tap: Option<Rc<dyn Fn()>>,
}

impl PlaceholderView {
    /// Builds the placeholder for `parent`.
    ///
    /// Construction never fails: an empty message and a missing icon are
    /// both fine. The configuration is fixed for the lifetime of the view.
    pub fn new(
        parent: &impl IsA<gtk::Widget>,
        config: PlaceholderConfig,
        tap_handler: Option<TapHandler>,
    ) -> Self {
        let parent = parent.upcast_ref::<gtk::Widget>();

        style::install_default_css();

        // The overlay surface itself, sized by the parent.
        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
        root.set_hexpand(true);
        root.set_vexpand(true);
        root.add_css_class("placeholder-view");

        // Content block, icon above message, full overlay width.
        let container = gtk::Box::new(gtk::Orientation::Vertical, MESSAGE_SPACING);
        container.set_vexpand(true);
        container.set_valign(gtk::Align::Center);
        container.add_css_class("placeholder-content");

        // Icon, horizontally centered so it is never clipped.
        let image = gtk::Image::new();
        image.set_halign(gtk::Align::Center);
        image.add_css_class("placeholder-icon");
        config
            .icon
            .as_ref()
            .unwrap_or(&config.fallback_icon)
            .apply_to(&image);
        if let Some(size) = config.icon_pixel_size {
            image.set_pixel_size(size);
        }
        container.append(&image);

        // Message label, word-wrapped, unlimited lines, centered.
        let label = gtk::Label::new(Some(config.message.as_str()));
        label.set_wrap(true);
        label.set_wrap_mode(gtk::pango::WrapMode::Word);
        label.set_justify(gtk::Justification::Center);
        label.set_margin_start(MESSAGE_MARGIN);
        label.set_margin_end(MESSAGE_MARGIN);
        label.add_css_class("placeholder-message");
        container.append(&label);

        root.append(&container);

        // The parent may not be allocated yet (UI built but not presented);
        // allocation is valid by the first frame after mapping, so refine the
        // vertical offset once real geometry exists.
        let container_weak = container.downgrade();
        root.connect_map(move |root| {
            let container = container_weak.clone();
            root.add_tick_callback(move |root, _clock| {
                if !root.is_mapped() {
                    return glib::ControlFlow::Break;
                }
                if root.height() <= 0 {
                    return glib::ControlFlow::Continue;
                }
                if let Some(container) = container.upgrade() {
                    container.set_margin_bottom(content_offset(root.height()));
                }
                glib::ControlFlow::Break
            });
        });

        let view = Self {
            parent: parent.downgrade(),
            root,
            container,
            image,
            label,
            on_tap: tap_handler.map(Rc::from),
        };
        view.position_content(parent);

        // Tap recognizer over the whole overlay, any button.
        let gesture = gtk::GestureClick::new();
        gesture.set_button(0);
        let root = view.root.downgrade();
        let on_tap = view.on_tap.clone();
        gesture.connect_released(move |_, _, _, _| {
            if let Some(root) = root.upgrade() {
                dismiss_on_tap(&root, on_tap.as_ref());
            }
        });
        view.root.add_controller(gesture);

        view
    }

    /// Constructing the placeholder from a `GtkBuilder` UI definition is not
    /// supported and never will be: the view is code-constructed only.
    ///
    /// # Panics
    ///
    /// Always.
    pub fn from_builder(_builder: &gtk::Builder) -> Self {
        panic!("PlaceholderView cannot be built from a GtkBuilder definition; use PlaceholderView::new");
    }

    /// Attaches the overlay to its parent and makes it visible.
    ///
    /// Does nothing if the overlay is already shown, or if the parent has
    /// been dropped in the meantime.
    pub fn show(&self) {
        if self.root.parent().is_some() {
            return;
        }
        let Some(parent) = self.parent.upgrade() else {
            tracing::warn!("placeholder parent is gone, ignoring show()");
            return;
        };
        self.position_content(&parent);
        self.root.set_parent(&parent);
        tracing::debug!(message = %self.label.text(), "placeholder shown");
    }

    /// Detaches the overlay from its parent. Does nothing if it is already
    /// hidden.
    pub fn removed(&self) {
        if self.root.parent().is_some() {
            self.root.unparent();
            tracing::debug!("placeholder removed");
        }
    }

    /// Whether the overlay is currently attached to its parent.
    pub fn is_shown(&self) -> bool {
        self.root.parent().is_some()
    }

    /// The overlay widget, for styling or inspection.
    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    /// The message shown below the icon.
    pub fn message(&self) -> glib::GString {
        self.label.text()
    }

    /// The themed icon name currently rendered, if the icon is a named one.
    pub fn icon_name(&self) -> Option<glib::GString> {
        self.image.icon_name()
    }

    /// Pushes the content block above true center. Recomputed from the
    /// parent's bounds each time the overlay is shown, and refined on the
    /// first frame after mapping in case the parent was not allocated yet.
    fn position_content(&self, parent: &gtk::Widget) {
        self.container.set_margin_bottom(content_offset(parent.height()));
    }

    #[cfg(test)]
    fn trigger_tap(&self) {
        dismiss_on_tap(&self.root, self.on_tap.as_ref());
    }
}

/// Bottom margin that puts the center-valigned content block at
/// `CENTER_Y_RATIO` of the way from the overlay's top to its vertical
/// center: centering within `height - offset` leaves the block's center at
/// `CENTER_Y_RATIO * height / 2`. Zero while the overlay has no valid
/// allocation yet.
fn content_offset(height: i32) -> i32 {
    let offset = ((1.0 - CENTER_Y_RATIO) * f64::from(height)).round() as i32;
    offset.max(0)
}

/// Tap behavior: hide first, then fire the handler. A tap that arrives while
/// the overlay is already detached does nothing, so one appearance can fire
/// the handler at most once.
fn dismiss_on_tap(root: &gtk::Box, on_tap: Option<&Rc<dyn Fn()>>) {
    if root.parent().is_none() {
        return;
    }
    root.unparent();
    tracing::debug!("placeholder dismissed by tap");
    if let Some(handler) = on_tap {
        handler();
    }
}
