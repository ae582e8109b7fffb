pub mod app_time;

pub use app_time::{AppInstant, now, sleep_ms, with_timeout};
