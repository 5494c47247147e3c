//! Time-span (duration) format strings.
//!
//! Standard formats: `c` (constant), `g` (short general) and `G` (long
//! general). Custom patterns only accept `d h m s f F` runs, quoted
//! literals and `\`-escapes; every other character must be escaped.

use chrono::TimeDelta;

use crate::culture::Culture;
use crate::datetime::push_fraction;
use crate::error::FormatError;

const MAX_DAY_DIGITS: usize = 8;
const MAX_FRACTION_DIGITS: usize = 7;
const TICKS_PER_SECOND: u32 = 10_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Style {
    Constant,
    ShortGeneral,
    LongGeneral,
    Custom(Vec<Token>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Days(usize),
    Hours(usize),
    Minutes(usize),
    Seconds(usize),
    Fraction { digits: usize, trim: bool },
    Literal(String),
}

/// Broken-down absolute value of a duration.
struct Parts {
    negative: bool,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    ticks: u32,
}

impl Parts {
    fn of(value: TimeDelta) -> Self {
        let negative = value < TimeDelta::zero();
        let abs = value.abs();
        let total = abs.num_seconds().unsigned_abs();
        Self {
            negative,
            days: total / 86_400,
            hours: total / 3_600 % 24,
            minutes: total / 60 % 60,
            seconds: total % 60,
            ticks: (abs.subsec_nanos().unsigned_abs() / 100).min(TICKS_PER_SECOND - 1),
        }
    }
}

/// A parsed time-span pattern bound to a culture.
#[derive(Debug, Clone)]
pub struct TimeSpanFormatter {
    culture: &'static Culture,
    style: Style,
}

impl TimeSpanFormatter {
    pub fn new(pattern: &str, culture: &'static Culture) -> Result<Self, FormatError> {
        let mut chars = pattern.chars();
        let style = match (chars.next(), chars.next()) {
            (None, _) => Style::Constant,
            (Some(letter), None) => match letter {
                'c' | 't' | 'T' => Style::Constant,
                'g' => Style::ShortGeneral,
                'G' => Style::LongGeneral,
                _ => return Err(FormatError::UnknownSpecifier(pattern.to_string())),
            },
            _ => Style::Custom(tokenize(pattern)?),
        };
        Ok(Self { culture, style })
    }

    pub fn format(&self, value: TimeDelta) -> String {
        let p = Parts::of(value);
        let sign = if p.negative { "-" } else { "" };
        let decimal = self.culture.number.decimal_separator;
        match &self.style {
            Style::Constant => {
                let mut out = String::from(sign);
                if p.days > 0 {
                    out.push_str(&format!("{}.", p.days));
                }
                out.push_str(&format!("{:02}:{:02}:{:02}", p.hours, p.minutes, p.seconds));
                if p.ticks > 0 {
                    out.push_str(&format!(".{:07}", p.ticks));
                }
                out
            }
            Style::ShortGeneral => {
                let mut out = String::from(sign);
                if p.days > 0 {
                    out.push_str(&format!("{}:", p.days));
                }
                out.push_str(&format!("{}:{:02}:{:02}", p.hours, p.minutes, p.seconds));
                if p.ticks > 0 {
                    out.push_str(decimal);
                    push_fraction(&mut out, p.ticks, MAX_FRACTION_DIGITS, true);
                }
                out
            }
            Style::LongGeneral => format!(
                "{sign}{}:{:02}:{:02}:{:02}{decimal}{:07}",
                p.days, p.hours, p.minutes, p.seconds, p.ticks
            ),
            Style::Custom(tokens) => {
                let mut out = String::new();
                for token in tokens {
                    match token {
                        Token::Days(n) => out.push_str(&format!("{:0n$}", p.days, n = *n)),
                        Token::Hours(n) => out.push_str(&format!("{:0n$}", p.hours, n = *n)),
                        Token::Minutes(n) => out.push_str(&format!("{:0n$}", p.minutes, n = *n)),
                        Token::Seconds(n) => out.push_str(&format!("{:0n$}", p.seconds, n = *n)),
                        Token::Fraction { digits, trim } => {
                            push_fraction(&mut out, p.ticks, *digits, *trim)
                        }
                        Token::Literal(text) => out.push_str(text),
                    }
                }
                out
            }
        }
    }
}

fn tokenize(pattern: &str) -> Result<Vec<Token>, FormatError> {
    let chars: Vec<char> = pattern.chars().collect();
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
            '%' => match chars.get(i + 1) {
                Some(&next) if next != '%' => {
                    tokens.push(field_token(next, 1, pattern)?);
                    i += 2;
                }
                _ => return Err(FormatError::invalid(pattern, "'%' must precede a specifier")),
            },
            _ => {
                let run = chars[i..].iter().take_while(|&&c| c == ch).count();
                tokens.push(field_token(ch, run, pattern)?);
                i += run;
            }
        }
    }
    Ok(tokens)
}

fn field_token(ch: char, run: usize, pattern: &str) -> Result<Token, FormatError> {
    let too_long = |what: &str| FormatError::invalid(pattern, format!("too many '{what}' characters"));
    match ch {
        'd' if run <= MAX_DAY_DIGITS => Ok(Token::Days(run)),
        'h' if run <= 2 => Ok(Token::Hours(run)),
        'm' if run <= 2 => Ok(Token::Minutes(run)),
        's' if run <= 2 => Ok(Token::Seconds(run)),
        'f' | 'F' if run <= MAX_FRACTION_DIGITS => {
            Ok(Token::Fraction { digits: run, trim: ch == 'F' })
        }
        'd' | 'h' | 'm' | 's' | 'f' | 'F' => Err(too_long(&ch.to_string())),
        other => Err(FormatError::invalid(
            pattern,
            format!("'{other}' must be quoted or escaped"),
        )),
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: String) {
    if let Some(Token::Literal(prev)) = tokens.last_mut() {
        prev.push_str(&text);
    } else {
        tokens.push(Token::Literal(text));
    }
}
