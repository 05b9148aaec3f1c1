use chrono::{DateTime, SecondsFormat, Utc};

pub fn format_timestamp(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current UTC time as e.g. 2024-02-01T00:00:00Z.
pub fn get_timestamp() -> String {
    format_timestamp(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_timestamp_test() {
        let date_time = "2024-02-01T00:00:00.123456Z"
            .parse::<DateTime<Utc>>()
            .unwrap();
        assert_eq!(format_timestamp(&date_time), "2024-02-01T00:00:00Z");
    }

    #[test]
    fn get_timestamp_shape_test() {
        let timestamp = get_timestamp();
        assert_eq!(timestamp.len(), "2024-02-01T00:00:00Z".len());
        assert!(timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&timestamp).is_ok());
    }
}
