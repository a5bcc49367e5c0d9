// src/utils/date_formatter.rs

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike, Utc};

// America/Argentina/Buenos_Aires: UTC-03:00 fijo, sin horario de verano desde 2009.
const BUENOS_AIRES_OFFSET_SECS: i32 = 3 * 3600;

// Formatos "naive" que manda el backend (MySQL) sin zona; se asumen UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Interpreta un timestamp UTC en los formatos que maneja el backend:
/// RFC 3339, RFC 2822 (el que produce `jsonify`) o fecha-hora sin zona.
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Convierte un timestamp UTC a la hora civil de Buenos Aires, con el
/// formato `dd/mm/yyyy, hh:mm:ss a. m.` (reloj de 12 horas, es-AR).
///
/// Si el texto no se puede interpretar se devuelve tal cual.
pub fn to_buenos_aires_datetime(utc: &str) -> String {
    let Some(dt) = parse_utc(utc) else {
        return utc.to_string();
    };

    let Some(offset) = FixedOffset::west_opt(BUENOS_AIRES_OFFSET_SECS) else {
        return utc.to_string();
    };

    let local = dt.with_timezone(&offset);
    let meridiem = if local.hour() < 12 { "a. m." } else { "p. m." };

    format!("{} {}", local.format("%d/%m/%Y, %I:%M:%S"), meridiem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morning_in_buenos_aires() {
        assert_eq!(
            to_buenos_aires_datetime("2024-01-15T10:00:00Z"),
            "15/01/2024, 07:00:00 a. m."
        );
    }

    #[test]
    fn test_afternoon_uses_pm() {
        assert_eq!(
            to_buenos_aires_datetime("2024-06-01T18:30:05Z"),
            "01/06/2024, 03:30:05 p. m."
        );
    }

    #[test]
    fn test_noon_and_midnight_are_twelve() {
        assert_eq!(
            to_buenos_aires_datetime("2024-03-10T15:00:00Z"),
            "10/03/2024, 12:00:00 p. m."
        );
        assert_eq!(
            to_buenos_aires_datetime("2024-03-10T03:00:00Z"),
            "10/03/2024, 12:00:00 a. m."
        );
    }

    #[test]
    fn test_crosses_day_boundary() {
        assert_eq!(
            to_buenos_aires_datetime("2024-01-01T02:00:00Z"),
            "31/12/2023, 11:00:00 p. m."
        );
    }

    #[test]
    fn test_rfc2822_from_flask() {
        assert_eq!(
            to_buenos_aires_datetime("Mon, 15 Jan 2024 10:00:00 GMT"),
            "15/01/2024, 07:00:00 a. m."
        );
    }

    #[test]
    fn test_naive_mysql_timestamp_is_utc() {
        assert_eq!(
            to_buenos_aires_datetime("2024-01-15 10:00:00"),
            "15/01/2024, 07:00:00 a. m."
        );
    }

    #[test]
    fn test_invalid_input_is_returned_unchanged() {
        assert_eq!(to_buenos_aires_datetime("ayer"), "ayer");
        assert!(parse_utc("").is_none());
    }
}
