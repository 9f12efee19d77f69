use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's local date as `YYYY-MM-DD`, the value a date control expects.
pub fn today_string() -> String {
    today().format(DATE_FORMAT).to_string()
}

/// `today` (any case) becomes today's date; anything else is kept verbatim.
pub fn expand_keyword(value: &str) -> String {
    if value.trim().eq_ignore_ascii_case("today") {
        today_string()
    } else {
        value.to_string()
    }
}
