//! A reusable placeholder overlay for GTK4 applications.
//!
//! [`PlaceholderView`] covers a parent widget with an icon and a word-wrapped
//! message whenever content is absent, still loading, or failed to load (no
//! network, empty result set, ...). Tapping anywhere on the overlay hides it
//! and fires an optional handler, which makes tap-to-retry a one-liner for
//! the embedding application.
//!
//! ```no_run
//! use gtk4 as gtk;
//! use placeholder_view::{PlaceholderConfig, PlaceholderView};
//!
//! # fn build(content: &gtk::Box) {
//! let placeholder = PlaceholderView::new(
//!     content,
//!     PlaceholderConfig::new("No network"),
//!     Some(Box::new(|| println!("retry requested"))),
//! );
//! placeholder.show();
//! # }
//! ```

pub mod icon;
pub mod placeholder;
pub mod style;

pub use icon::Icon;
pub use placeholder::{PlaceholderConfig, PlaceholderView};

#[cfg(test)]
pub(crate) mod test_util;
