use log::Level;

/// Formspree form that relays inquiries to the consultancy inbox.
pub const FORM_ID: &str = "mvzzoqwd";

/// How long a SENT or ERROR button stays up before the form is usable again.
pub const RESET_DELAY_MS: u32 = 4_000;

/// Scroll offset past which the navbar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const CONTACT_EMAIL: &str = "inquiries@baylconsults.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/bayl-consults/about/?viewAsMember=true";

pub fn get_relay_url() -> String {
    format!("https://formspree.io/f/{}", FORM_ID)
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
