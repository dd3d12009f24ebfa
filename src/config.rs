use log::Level;

pub const COMPANY_NAME: &str = "US CARGO SOLUTIONS LLC";
pub const TAGLINE: &str = "Professional carrier services with nationwide coverage. On-time delivery, competitive rates, and exceptional customer service.";

pub const CONTACT_PHONE: &str = "(555) 123-4567";
pub const CONTACT_EMAIL: &str = "info@uscargosolutions.com";
pub const CONTACT_ADDRESS: &str = "123 Logistics Way, Trucking City, TX 75001";

pub const HERO_VIDEO_URL: &str = "https://video.wixstatic.com/video/0f3452_ea3d07c6f3024c1c898f778b13e44ee3/1080p/mp4/file.mp4";
pub const HERO_POSTER_URL: &str = "/assets/hero-poster.svg";

pub const TESTIMONIAL_INTERVAL_MS: u32 = 5_000;
pub const PARTNER_INTERVAL_MS: u32 = 3_000;
pub const PARTNER_VISIBLE_SLIDES: usize = 4;

pub const QUOTE_SUBMIT_DELAY_MS: u32 = 1_500;
pub const QUOTE_SUCCESS_RESET_MS: u32 = 5_000;

/// How long a footer "Copied!" marker stays up.
pub const COPIED_MARKER_MS: u32 = 2_000;

/// Header switches to its solid style past this scroll offset.
pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn maps_url() -> String {
    format!(
        "https://maps.google.com?q={}",
        urlencoding::encode(CONTACT_ADDRESS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_url_encodes_the_address() {
        assert_eq!(
            maps_url(),
            "https://maps.google.com?q=123%20Logistics%20Way%2C%20Trucking%20City%2C%20TX%2075001"
        );
    }
}
