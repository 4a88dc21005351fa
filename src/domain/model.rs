use crate::utils::error::{Result, RotaError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Day of the week as an index in 0..=6, with 0 = Sunday.
///
/// The index convention is fixed by the persisted configuration format;
/// construction validates the range so the scheduling core never sees an
/// out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Weekday(u8);

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> u8 {
        weekday.0
    }
}

impl TryFrom<u8> for Weekday {
    type Error = RotaError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl Default for Weekday {
    /// Wednesday, the conventional collection day.
    fn default() -> Self {
        Self(3)
    }
}

impl Weekday {
    pub fn new(index: u8) -> Result<Self> {
        if index > 6 {
            return Err(RotaError::InvalidWeekday {
                value: index as i64,
            });
        }
        Ok(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Whether `day` falls on this weekday.
    pub fn matches(self, day: NaiveDate) -> bool {
        day.weekday().num_days_from_sunday() == self.0 as u32
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            _ => "Saturday",
        }
    }
}

/// One scheduled duty slot: who takes the bins out on which date.
///
/// The date always falls on the configured weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub date: NaiveDate,
    pub name: String,
}

/// Output of the rotation engine for one reference date.
///
/// `current_index` is `None` when the roster is empty; that is a valid,
/// display-worthy state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationState {
    pub current_index: Option<usize>,
    /// The next date matching the configured weekday on or after "now".
    pub next_occurrence: NaiveDate,
    pub forecast: Vec<Assignment>,
}

/// Persisted scheduler settings: the roster, collection weekday, and the
/// pivot date anchoring occurrence #0 of the rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotaSettings {
    pub names: Vec<String>,
    pub weekday: Weekday,
    pub pivot: NaiveDate,
}

/// Per-person row of the presentation view: all forecast dates for that
/// roster seat, the earliest of them, and whether the seat is the one
/// currently on duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSchedule {
    pub name: String,
    pub original_index: usize,
    pub dates: Vec<NaiveDate>,
    pub next_date: Option<NaiveDate>,
    pub highlighted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_range() {
        assert!(Weekday::new(0).is_ok());
        assert!(Weekday::new(6).is_ok());
        assert!(matches!(
            Weekday::new(7),
            Err(RotaError::InvalidWeekday { value: 7 })
        ));
    }

    #[test]
    fn test_weekday_matches() {
        // 2024-01-03 is a Wednesday.
        let wed = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert!(Weekday::new(3).unwrap().matches(wed));
        assert!(!Weekday::new(0).unwrap().matches(wed));
        // 2024-01-07 is a Sunday.
        let sun = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert!(Weekday::new(0).unwrap().matches(sun));
    }

    #[test]
    fn test_weekday_serde_validates_range() {
        let weekday: Weekday = serde_json::from_value(serde_json::json!(3)).unwrap();
        assert_eq!(weekday.index(), 3);
        assert_eq!(serde_json::to_value(weekday).unwrap(), serde_json::json!(3));
        assert!(serde_json::from_value::<Weekday>(serde_json::json!(7)).is_err());
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(Weekday::new(3).unwrap().name(), "Wednesday");
        assert_eq!(Weekday::new(0).unwrap().name(), "Sunday");
        assert_eq!(Weekday::new(6).unwrap().name(), "Saturday");
    }
}
