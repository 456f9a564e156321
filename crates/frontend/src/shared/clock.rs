use chrono::{NaiveDate, Utc};
use contracts::shared::id::{generate_id, IdSource};

/// Current UTC date, as the date inputs expect it.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Ids from the browser clock and `Math.random`.
pub struct BrowserIds;

impl IdSource for BrowserIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let now = js_sys::Date::now() as i64;
        let roll = (js_sys::Math::random() * 100.0).floor() as u8;
        generate_id(prefix, now, roll)
    }
}
