use gtk4 as gtk;
use std::sync::Mutex;

static GTK_LOCK: Mutex<()> = Mutex::new(());

/// Runs `body` with GTK initialized, one test at a time.
///
/// GTK needs a display; when none is available (headless CI) the body is
/// skipped instead of failing every widget test. Set `REQUIRE_DISPLAY=1`
/// (e.g. together with `xvfb-run`) to turn a missing display into a hard
/// failure so the skip cannot go unnoticed.
pub(crate) fn gtk_test(body: impl FnOnce()) {
    let _guard = GTK_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if gtk::init().is_err() {
        if std::env::var_os("REQUIRE_DISPLAY").is_some() {
            panic!("REQUIRE_DISPLAY is set but GTK could not initialize");
        }
        eprintln!("no display available, skipping GTK test");
        return;
    }
    body();
}
