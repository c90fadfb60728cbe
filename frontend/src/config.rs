use log::Level;

pub const EVENT_NAME: &str = "Vibeathon";
pub const EVENT_DATE_LABEL: &str = "September 27, 2025";
pub const VENUE_NAME: &str = "SAP Labs, Whitefield";
pub const VENUE_MAP_URL: &str = "https://maps.app.goo.gl/63FmktWjyWJejNHG9";

// Doors open at 09:00 local time at the venue.
pub const EVENT_START_LOCAL: (i32, u32, u32, u32, u32) = (2025, 9, 27, 9, 0);
pub const VENUE_TIMEZONE: chrono_tz::Tz = chrono_tz::Asia::Kolkata;

pub const COUNTDOWN_TICK_MS: u32 = 1000;
pub const BOT_REPLY_DELAY_MS: u32 = 1000;
pub const ACK_DISMISS_MS: u32 = 5000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
