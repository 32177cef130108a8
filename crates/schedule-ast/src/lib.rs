use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

const CLOCK_FORMAT: &str = "%H:%M";

/// One scheduled occurrence of a group, e.g. `Monday 09:00-10:30`.
///
/// The fields hold the captured text verbatim. Nothing here checks that the
/// times are real clock times or that `start_time` comes before `end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl TimeSlot {
    pub fn new(day: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            day: day.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }

    /// `None` when the captured text is not a valid 24-hour clock time (`25:00`).
    pub fn start(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.start_time, CLOCK_FORMAT).ok()
    }

    pub fn end(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.end_time, CLOCK_FORMAT).ok()
    }

    pub fn is_inverted(&self) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => end < start,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_declaration_order() {
        let slot = TimeSlot::new("Monday", "09:00", "10:30");
        assert_eq!(
            serde_json::to_string(&slot).unwrap(),
            r#"{"day":"Monday","start_time":"09:00","end_time":"10:30"}"#
        );
    }

    #[test]
    fn clock_accessors() {
        let slot = TimeSlot::new("Friday", "14:15", "15:45");
        assert_eq!(slot.start(), NaiveTime::from_hms_opt(14, 15, 0));
        assert_eq!(slot.end(), NaiveTime::from_hms_opt(15, 45, 0));
        assert!(!slot.is_inverted());

        let out_of_range = TimeSlot::new("Friday", "99:99", "10:00");
        assert_eq!(out_of_range.start(), None);
        assert!(!out_of_range.is_inverted());
    }

    #[test]
    fn inverted_slot() {
        assert!(TimeSlot::new("Sunday", "18:00", "08:00").is_inverted());
    }
}
