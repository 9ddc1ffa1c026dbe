//! Age calculation against a reference calendar date.

use chrono::{Datelike, NaiveDate};

/// Minimum age, in whole years, a candidate must have reached.
pub const MINIMUM_AGE: u32 = 21;

/// Whole years elapsed between `date_of_birth` and `today`.
///
/// The year difference is reduced by one when `today` falls before the
/// birthday's month and day. Someone born on 29 February therefore turns a
/// year older on 1 March in common years. Dates of birth after `today` yield
/// zero.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use user_admission::domain::age_on;
///
/// let born = NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid date");
/// let before = NaiveDate::from_ymd_opt(2011, 6, 14).expect("valid date");
/// let on = NaiveDate::from_ymd_opt(2011, 6, 15).expect("valid date");
/// assert_eq!(age_on(born, before), 20);
/// assert_eq!(age_on(born, on), 21);
/// ```
#[must_use]
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    if date_of_birth >= today {
        return 0;
    }
    let years = today.year() - date_of_birth.year();
    let before_birthday = (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day());
    let age = if before_birthday { years - 1 } else { years };
    u32::try_from(age).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[rstest]
    #[case(date(1990, 1, 1), date(2024, 2, 1), 34)]
    #[case(date(1990, 3, 1), date(2024, 2, 1), 33)]
    #[case(date(1990, 2, 2), date(2024, 2, 1), 33)]
    #[case(date(1990, 2, 1), date(2024, 2, 1), 34)]
    #[case(date(2020, 1, 1), date(2024, 2, 1), 4)]
    fn counts_whole_years(#[case] born: NaiveDate, #[case] today: NaiveDate, #[case] age: u32) {
        assert_eq!(age_on(born, today), age);
    }

    #[rstest]
    fn twenty_first_birthday_reaches_minimum() {
        let born = date(2003, 2, 1);
        assert_eq!(age_on(born, date(2024, 2, 1)), MINIMUM_AGE);
        assert_eq!(age_on(born, date(2024, 1, 31)), MINIMUM_AGE - 1);
    }

    #[rstest]
    #[case(date(2023, 2, 28), 22)]
    #[case(date(2023, 3, 1), 23)]
    #[case(date(2024, 2, 29), 24)]
    fn leap_day_birthdays_roll_over_on_first_of_march(
        #[case] today: NaiveDate,
        #[case] age: u32,
    ) {
        assert_eq!(age_on(date(2000, 2, 29), today), age);
    }

    #[rstest]
    #[case(date(2030, 1, 1))]
    #[case(date(2024, 2, 1))]
    fn future_or_same_day_births_are_zero(#[case] born: NaiveDate) {
        assert_eq!(age_on(born, date(2024, 2, 1)), 0);
    }
}
