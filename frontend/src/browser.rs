use chrono::Datelike;
use log::debug;
use web_sys::{window, ScrollBehavior, ScrollToOptions};

pub fn scroll_to_top() {
    let Some(window) = window() else {
        debug!("No window to scroll");
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
