pub mod colors;
pub mod style;
pub mod viewport;

use chrono::{TimeZone, Utc};

// render a publish timestamp in the DD/MM/YYYY form used across the site
pub fn publish_date(secs: u64) -> String {
    let convert = move || {
        let secs = secs.try_into()?;

        let dt = Utc
            .timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| anyhow::Error::msg(""))?;

        Result::<String, anyhow::Error>::Ok(dt.format("%d/%m/%Y").to_string())
    };
    match convert() {
        Ok(v) => v,
        Err(_) => String::from("error parsing timestamp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_day_month_year() {
        assert_eq!(publish_date(1577836800), "01/01/2020");
        assert_eq!(publish_date(1593561600), "01/07/2020");
    }

    #[test]
    fn unrepresentable_timestamps_fall_back() {
        assert_eq!(publish_date(u64::MAX), "error parsing timestamp");
    }
}
