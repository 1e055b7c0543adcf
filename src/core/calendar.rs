use crate::domain::model::{Day, DayType};

/// Partition of the closed `Day` enumeration. The match is exhaustive, so the
/// original "invalid day" fallback has no arm here; out-of-range input is
/// rejected earlier, by `Day::try_from`.
pub fn day_type(day: Day) -> DayType {
    match day {
        Day::Monday | Day::Tuesday | Day::Wednesday | Day::Thursday | Day::Friday => {
            DayType::Weekday
        }
        Day::Saturday | Day::Sunday => DayType::Weekend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekdays() {
        for day in [
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
        ] {
            assert_eq!(day_type(day), DayType::Weekday);
        }
    }

    #[test]
    fn test_weekend() {
        assert_eq!(day_type(Day::Saturday), DayType::Weekend);
        assert_eq!(day_type(Day::Sunday), DayType::Weekend);
    }

    #[test]
    fn test_day_from_raw_index() {
        assert_eq!(Day::try_from(0).unwrap(), Day::Monday);
        assert_eq!(Day::try_from(6).unwrap(), Day::Sunday);
        assert!(Day::try_from(7).is_err());
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(day_type(Day::Monday).to_string(), "Weekday");
        assert_eq!(day_type(Day::Sunday).to_string(), "Weekend");
    }
}
