pub trait FormatDuration {
    /// Only the largest whole unit, e.g. `3 minutes`.
    fn format_largest(&self) -> String;
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

impl FormatDuration for chrono::Duration {
    fn format_largest(&self) -> String {
        let units = [
            (self.num_days(), "day"),
            (self.num_hours(), "hour"),
            (self.num_minutes(), "minute"),
            (self.num_seconds(), "second"),
        ];

        units
            .into_iter()
            .find(|(count, _)| *count > 0)
            .map_or_else(
                || "less than a second".to_owned(),
                |(count, unit)| plural(count, unit),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::FormatDuration;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_largest() {
        assert_eq!(Duration::hours(50).format_largest(), "2 days");
        assert_eq!(Duration::minutes(79).format_largest(), "1 hour");
        assert_eq!(Duration::seconds(19 * 60 + 5).format_largest(), "19 minutes");
        assert_eq!(Duration::seconds(1).format_largest(), "1 second");
        assert_eq!(Duration::milliseconds(300).format_largest(), "less than a second");
    }
}
