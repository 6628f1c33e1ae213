use chrono::NaiveDate;

/// Date du premier tirage Lotto 6/45 (tirage n°1), un tirage par semaine.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2002, 12, 7).expect("date d'ancrage valide")
}

/// Numéro de tirage correspondant à une date.
///
/// Fonction pure, croissante avec la date ; avancer de 7 jours exactement
/// incrémente le numéro de 1. Les dates antérieures à l'ancrage donnent un
/// numéro nul ou négatif, à la charge de l'appelant.
pub fn round_of(date: NaiveDate) -> i64 {
    let days = (date - epoch()).num_days();
    days.div_euclid(7) + 1
}

/// Bornes de tirages couvrant [1er janvier `start_year`, 31 décembre `end_year`].
pub fn round_bounds(start_year: i32, end_year: i32) -> (i64, i64) {
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1).expect("1er janvier valide");
    let end = NaiveDate::from_ymd_opt(end_year, 12, 31).expect("31 décembre valide");
    (round_of(start), round_of(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn test_round_of_epoch() {
        assert_eq!(round_of(epoch()), 1);
    }

    #[test]
    fn test_round_of_same_week() {
        let d = epoch() + Days::new(6);
        assert_eq!(round_of(d), 1);
    }

    #[test]
    fn test_round_of_plus_seven_days_increments() {
        let mut d = NaiveDate::from_ymd_opt(2019, 6, 15).unwrap();
        for _ in 0..10 {
            let next = d + Days::new(7);
            assert_eq!(round_of(next), round_of(d) + 1);
            d = next;
        }
    }

    #[test]
    fn test_round_of_before_epoch() {
        let d = NaiveDate::from_ymd_opt(2002, 11, 1).unwrap();
        assert!(round_of(d) <= 0);
    }

    #[test]
    fn test_round_bounds_2020_has_53_rounds() {
        let (start, end) = round_bounds(2020, 2020);
        assert_eq!(start, 891);
        assert_eq!(end, 943);
        assert_eq!(end - start + 1, 53);
    }

    #[test]
    fn test_round_bounds_span() {
        let (start, end) = round_bounds(2020, 2026);
        assert!(start < end);
        assert_eq!(start, round_of(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));
        assert_eq!(end, round_of(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()));
    }
}
