//! Date and time format strings.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::culture::{Culture, DateTimeFormatInfo};
use crate::error::FormatError;

const MAX_FRACTION_DIGITS: usize = 7;

const ROUND_TRIP: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffffK";
const RFC1123: &str = "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'";
const SORTABLE: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss";
const UNIVERSAL_SORTABLE: &str = "yyyy'-'MM'-'dd HH':'mm':'ss'Z'";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Day(usize),
    Month(usize),
    Year(usize),
    Hour12(usize),
    Hour24(usize),
    Minute(usize),
    Second(usize),
    Fraction { digits: usize, trim: bool },
    AmPm(usize),
    Era,
    Offset(usize),
    Kind,
    DateSeparator,
    TimeSeparator,
    Literal(String),
}

/// A parsed date/time pattern bound to a culture.
#[derive(Debug, Clone)]
pub struct DateTimeFormatter {
    culture: &'static Culture,
    tokens: Vec<Token>,
    genitive: bool,
}

impl DateTimeFormatter {
    /// Single-letter patterns are standard formats (`d`, `D`, `g`, `o`, …);
    /// an empty pattern is `G`.
    pub fn new(pattern: &str, culture: &'static Culture) -> Result<Self, FormatError> {
        let mut chars = pattern.chars();
        let (culture, expanded) = match (chars.next(), chars.next()) {
            (None, _) => (culture, standard_pattern('G', &culture.date_time, pattern)?),
            (Some(letter), None) => match letter {
                'o' | 'O' => (Culture::invariant(), ROUND_TRIP.to_string()),
                'r' | 'R' => (Culture::invariant(), RFC1123.to_string()),
                's' => (Culture::invariant(), SORTABLE.to_string()),
                'u' => (Culture::invariant(), UNIVERSAL_SORTABLE.to_string()),
                _ => (culture, standard_pattern(letter, &culture.date_time, pattern)?),
            },
            _ => (culture, pattern.to_string()),
        };
        let tokens = tokenize(&expanded, pattern)?;
        let genitive = culture.date_time.month_genitive_names.is_some()
            && tokens.iter().any(|t| matches!(t, Token::Day(1 | 2)));
        Ok(Self { culture, tokens, genitive })
    }

    pub fn format(&self, value: &NaiveDateTime) -> String {
        let dtfi = &self.culture.date_time;
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Day(n) => match n {
                    1 | 2 => push_padded(&mut out, value.day(), *n),
                    3 => out.push_str(dtfi.abbreviated_day_names[weekday(value)]),
                    _ => out.push_str(dtfi.day_names[weekday(value)]),
                },
                Token::Month(n) => {
                    let index = value.month0() as usize;
                    match n {
                        1 | 2 => push_padded(&mut out, value.month(), *n),
                        3 => out.push_str(dtfi.abbreviated_month_names[index]),
                        _ => match (self.genitive, dtfi.month_genitive_names) {
                            (true, Some(names)) => out.push_str(names[index]),
                            _ => out.push_str(dtfi.month_names[index]),
                        },
                    }
                }
                Token::Year(n) => {
                    let year = value.year();
                    let width = *n;
                    match width {
                        1 => out.push_str(&year.rem_euclid(100).to_string()),
                        2 => push_padded(&mut out, year.rem_euclid(100) as u32, 2),
                        _ => out.push_str(&format!("{year:0width$}")),
                    }
                }
                Token::Hour12(n) => {
                    let (_, hour) = value.hour12();
                    push_padded(&mut out, hour, *n);
                }
                Token::Hour24(n) => push_padded(&mut out, value.hour(), *n),
                Token::Minute(n) => push_padded(&mut out, value.minute(), *n),
                Token::Second(n) => push_padded(&mut out, value.second(), *n),
                Token::Fraction { digits, trim } => {
                    let ticks = value.nanosecond().min(999_999_999) / 100;
                    push_fraction(&mut out, ticks, *digits, *trim);
                }
                Token::AmPm(n) => {
                    let designator =
                        if value.hour() < 12 { dtfi.am_designator } else { dtfi.pm_designator };
                    if *n == 1 {
                        out.extend(designator.chars().next());
                    } else {
                        out.push_str(designator);
                    }
                }
                Token::Era => out.push_str(dtfi.era_name),
                // Values carry no offset; render UTC the way an unspecified kind does.
                Token::Offset(n) => out.push_str(match n {
                    1 => "+0",
                    2 => "+00",
                    _ => "+00:00",
                }),
                Token::Kind => {}
                Token::DateSeparator => out.push_str(dtfi.date_separator),
                Token::TimeSeparator => out.push_str(dtfi.time_separator),
                Token::Literal(text) => out.push_str(text),
            }
        }
        out
    }
}

fn weekday(value: &NaiveDateTime) -> usize {
    value.weekday().num_days_from_sunday() as usize
}

fn push_padded(out: &mut String, value: u32, width: usize) {
    let width = width.min(2);
    out.push_str(&format!("{value:0width$}"));
}

/// `ticks` is the fraction in 100ns units (7 digits).
pub(crate) fn push_fraction(out: &mut String, ticks: u32, digits: usize, trim: bool) {
    let value = ticks / 10u32.pow((MAX_FRACTION_DIGITS - digits) as u32);
    let text = format!("{value:0digits$}");
    if !trim {
        out.push_str(&text);
        return;
    }
    let trimmed = text.trim_end_matches('0');
    if trimmed.is_empty() {
        if out.ends_with('.') {
            out.pop();
        }
    } else {
        out.push_str(trimmed);
    }
}

fn standard_pattern(
    letter: char,
    dtfi: &DateTimeFormatInfo,
    pattern: &str,
) -> Result<String, FormatError> {
    let expanded = match letter {
        'd' => dtfi.short_date_pattern.to_string(),
        'D' => dtfi.long_date_pattern.to_string(),
        'f' => format!("{} {}", dtfi.long_date_pattern, dtfi.short_time_pattern),
        'F' | 'U' => dtfi.full_date_time_pattern.to_string(),
        'g' => format!("{} {}", dtfi.short_date_pattern, dtfi.short_time_pattern),
        'G' => format!("{} {}", dtfi.short_date_pattern, dtfi.long_time_pattern),
        'm' | 'M' => dtfi.month_day_pattern.to_string(),
        't' => dtfi.short_time_pattern.to_string(),
        'T' => dtfi.long_time_pattern.to_string(),
        'y' | 'Y' => dtfi.year_month_pattern.to_string(),
        _ => return Err(FormatError::UnknownSpecifier(pattern.to_string())),
    };
    Ok(expanded)
}

fn tokenize(expanded: &str, pattern: &str) -> Result<Vec<Token>, FormatError> {
    let chars: Vec<char> = expanded.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '\'' | '"' => {
                let end = chars[i + 1..]
                    .iter()
                    .position(|&c| c == ch)
                    .ok_or_else(|| FormatError::UnterminatedQuote(pattern.to_string()))?;
                push_literal(&mut tokens, chars[i + 1..i + 1 + end].iter().collect());
                i += end + 2;
            }
            '\\' => {
                let next = chars
                    .get(i + 1)
                    .ok_or_else(|| FormatError::DanglingEscape(pattern.to_string()))?;
                push_literal(&mut tokens, next.to_string());
                i += 2;
            }
            '%' => {
                // "%d": a one-letter custom pattern.
                match chars.get(i + 1) {
                    Some(&next) if next != '%' => {
                        tokens.push(field_token(next, 1, pattern)?);
                        i += 2;
                    }
                    _ => return Err(FormatError::invalid(pattern, "'%' must precede a specifier")),
                }
            }
            ':' => {
                tokens.push(Token::TimeSeparator);
                i += 1;
            }
            '/' => {
                tokens.push(Token::DateSeparator);
                i += 1;
            }
            _ if is_field(ch) => {
                let run = chars[i..].iter().take_while(|&&c| c == ch).count();
                tokens.push(field_token(ch, run, pattern)?);
                i += run;
            }
            _ => {
                push_literal(&mut tokens, ch.to_string());
                i += 1;
            }
        }
    }
    Ok(tokens)
}

fn is_field(ch: char) -> bool {
    matches!(ch, 'd' | 'M' | 'y' | 'h' | 'H' | 'm' | 's' | 'f' | 'F' | 't' | 'g' | 'z' | 'K')
}

fn field_token(ch: char, run: usize, pattern: &str) -> Result<Token, FormatError> {
    let token = match ch {
        'd' => Token::Day(run),
        'M' => Token::Month(run),
        'y' => Token::Year(run),
        'h' => Token::Hour12(run),
        'H' => Token::Hour24(run),
        'm' => Token::Minute(run),
        's' => Token::Second(run),
        'f' | 'F' => {
            if run > MAX_FRACTION_DIGITS {
                return Err(FormatError::invalid(pattern, "at most 7 fraction digits"));
            }
            Token::Fraction { digits: run, trim: ch == 'F' }
        }
        't' => Token::AmPm(run),
        'g' => Token::Era,
        'z' => Token::Offset(run),
        'K' => Token::Kind,
        other => Token::Literal(other.to_string()),
    };
    Ok(token)
}

fn push_literal(tokens: &mut Vec<Token>, text: String) {
    if let Some(Token::Literal(prev)) = tokens.last_mut() {
        prev.push_str(&text);
    } else {
        tokens.push(Token::Literal(text));
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::culture::{BuiltinCultures, CultureProvider};

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_nano_opt(14, 7, 9, 123_456_700)
            .unwrap()
    }

    fn fmt(pattern: &str, culture: &str, value: &NaiveDateTime) -> String {
        DateTimeFormatter::new(pattern, BuiltinCultures.resolve(culture))
            .unwrap()
            .format(value)
    }

    #[test]
    fn custom_patterns() {
        let v = sample();
        assert_eq!(fmt("yyyy/MM/dd", "en-US", &v), "2024/03/05");
        assert_eq!(fmt("yyyy/MM/dd", "de-DE", &v), "2024.03.05");
        assert_eq!(fmt("dddd, MMMM d", "en-US", &v), "Tuesday, March 5");
        assert_eq!(fmt("ddd MMM", "en-US", &v), "Tue Mar");
        assert_eq!(fmt("h:mm tt", "en-US", &v), "2:07 PM");
        assert_eq!(fmt("HH:mm:ss.fff", "en-US", &v), "14:07:09.123");
        assert_eq!(fmt("yy", "en-US", &v), "24");
        assert_eq!(fmt("'Day' d", "en-US", &v), "Day 5");
        assert_eq!(fmt("%d", "en-US", &v), "5");
        assert_eq!(fmt("\\d", "en-US", &v), "d");
        assert_eq!(fmt("tt", "ja-JP", &v), "午後");
        assert_eq!(fmt("zzz|K", "en-US", &v), "+00:00|");
    }

    #[test]
    fn short_year_and_trimmed_fraction() {
        let v = NaiveDate::from_ymd_opt(2005, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(fmt("%y", "", &v), "5");
        assert_eq!(fmt("HH:mm:ss.FFF", "", &v), "00:00:00");
        assert_eq!(fmt("hh tt", "en-US", &v), "12 AM");
    }

    #[test]
    fn standard_patterns_follow_culture() {
        let v = sample();
        assert_eq!(fmt("d", "en-US", &v), "3/5/2024");
        assert_eq!(fmt("D", "en-US", &v), "Tuesday, March 5, 2024");
        assert_eq!(fmt("d", "de-DE", &v), "05.03.2024");
        assert_eq!(fmt("g", "en-GB", &v), "05/03/2024 14:07");
        assert_eq!(fmt("", "", &v), "03/05/2024 14:07:09");
    }

    #[test]
    fn invariant_standard_patterns() {
        let v = sample();
        assert_eq!(fmt("o", "de-DE", &v), "2024-03-05T14:07:09.1234567");
        assert_eq!(fmt("s", "ru-RU", &v), "2024-03-05T14:07:09");
        assert_eq!(fmt("u", "en-US", &v), "2024-03-05 14:07:09Z");
        assert_eq!(fmt("r", "fr-FR", &v), "Tue, 05 Mar 2024 14:07:09 GMT");
    }

    #[test]
    fn genitive_month_names_next_to_a_day() {
        let v = sample();
        assert_eq!(fmt("d MMMM yyyy", "ru-RU", &v), "5 марта 2024");
        assert_eq!(fmt("MMMM yyyy", "ru-RU", &v), "март 2024");
    }

    #[test]
    fn rejects_invalid_patterns() {
        let c = Culture::invariant();
        assert!(matches!(
            DateTimeFormatter::new("h", c),
            Err(FormatError::UnknownSpecifier(_))
        ));
        assert!(matches!(
            DateTimeFormatter::new("ffffffff", c),
            Err(FormatError::Invalid { .. })
        ));
        assert!(matches!(
            DateTimeFormatter::new("'abc", c),
            Err(FormatError::UnterminatedQuote(_))
        ));
        assert!(matches!(
            DateTimeFormatter::new("HH\\", c),
            Err(FormatError::DanglingEscape(_))
        ));
        assert!(matches!(DateTimeFormatter::new("HH%", c), Err(FormatError::Invalid { .. })));
    }
}
