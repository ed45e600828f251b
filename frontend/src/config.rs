pub const SITE_NAME: &str = "Your Health Prof";

pub const WHATSAPP_NUMBER: &str = "27822137053";

/// Scroll offset (CSS px) past which the nav bar switches to its compact look.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of an element that must be on screen before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

pub const REVEAL_DURATION_MS: u32 = 1000;

pub const REVEAL_OFFSET_REM: f64 = 3.0;

pub const ASSET_BASE: &str = "/assets"; // trunk copies frontend/assets here

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", ASSET_BASE, file.trim_start_matches('/'))
}

pub fn whatsapp_url() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_without_double_slash() {
        assert_eq!(asset_url("monique-hero.jpg"), "/assets/monique-hero.jpg");
        assert_eq!(asset_url("/monique-hero.jpg"), "/assets/monique-hero.jpg");
    }

    #[test]
    fn whatsapp_url_points_at_number() {
        assert_eq!(whatsapp_url(), "https://wa.me/27822137053");
    }
}
