//! Numeric format strings.
//!
//! Standard formats are a letter plus an optional precision (`"N0"`,
//! `"P2"`, `"X8"`); anything else is a custom pattern (`"#,##0.00"`,
//! `"0.0%;(0.0%);-"`).

use std::fmt::Write as _;

use crate::culture::{Culture, NumberFormatInfo};
use crate::error::FormatError;
use crate::number::Digits;

const MAX_PRECISION: u32 = 999;

/// Significant digits a floating value keeps before a custom pattern rounds it.
const CUSTOM_FLOAT_DIGITS: usize = 15;

pub(crate) const CURRENCY_POSITIVE: [&str; 4] = ["$n", "n$", "$ n", "n $"];
pub(crate) const CURRENCY_NEGATIVE: [&str; 17] = [
    "($n)", "-$n", "$-n", "$n-", "(n$)", "-n$", "n-$", "n$-", "-n $", "-$ n", "n $-", "$ n-",
    "$ -n", "n- $", "($ n)", "(n $)", "$- n",
];
pub(crate) const PERCENT_POSITIVE: [&str; 4] = ["n %", "n%", "%n", "% n"];
pub(crate) const PERCENT_NEGATIVE: [&str; 12] = [
    "-n %", "-n%", "-%n", "%-n", "%n-", "n-%", "n%-", "-% n", "n %-", "% n-", "% -n", "n- %",
];
pub(crate) const NUMBER_NEGATIVE: [&str; 5] = ["(n)", "-n", "- n", "n-", "n -"];

/// Which values a pattern will be applied to. Some standard formats
/// (`D`, `X`, `B`) only exist for integral values, `R` only for floating ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Integral,
    Floating,
}

/// A parsed numeric pattern bound to a culture.
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    culture: &'static Culture,
    layout: Layout,
}

#[derive(Debug, Clone)]
enum Layout {
    Standard { letter: char, precision: Option<u32> },
    Custom(Vec<Section>),
}

#[derive(Debug, Clone, Copy)]
enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    fn fixed(self, frac: u32) -> Digits {
        match self {
            Num::Int(v) => Digits::from_i64(v),
            Num::Float(v) => Digits::from_f64_fixed(v, frac as i32),
        }
    }

    fn significant(self, sig: u32) -> Digits {
        match self {
            Num::Int(v) => {
                let mut d = Digits::from_i64(v);
                d.round(sig as i32);
                d
            }
            Num::Float(v) => Digits::from_f64_significant(v, sig as usize),
        }
    }

    fn as_i64(self) -> i64 {
        match self {
            Num::Int(v) => v,
            Num::Float(v) => v as i64,
        }
    }
}

impl NumberFormatter {
    pub fn new(
        pattern: &str,
        kind: NumericKind,
        culture: &'static Culture,
    ) -> Result<Self, FormatError> {
        let layout = match standard_specifier(pattern)? {
            Some((letter, precision)) => {
                let upper = letter.to_ascii_uppercase();
                match (upper, kind) {
                    ('C' | 'E' | 'F' | 'G' | 'N' | 'P', _) => {}
                    ('D' | 'X' | 'B', NumericKind::Integral) => {}
                    ('R', NumericKind::Floating) => {}
                    ('D' | 'X' | 'B', NumericKind::Floating) => {
                        return Err(FormatError::IntegralOnly(pattern.to_string()));
                    }
                    _ => return Err(FormatError::UnknownSpecifier(pattern.to_string())),
                }
                Layout::Standard { letter, precision }
            }
            None if pattern.is_empty() => Layout::Standard { letter: 'G', precision: None },
            None => Layout::Custom(parse_sections(pattern)?),
        };
        Ok(Self { culture, layout })
    }

    pub fn format_i64(&self, value: i64) -> String {
        self.format(Num::Int(value))
    }

    pub fn format_f64(&self, value: f64) -> String {
        let nfi = &self.culture.number;
        if value.is_nan() {
            return nfi.nan_symbol.to_string();
        }
        if value.is_infinite() {
            let symbol = if value > 0.0 {
                nfi.positive_infinity_symbol
            } else {
                nfi.negative_infinity_symbol
            };
            return symbol.to_string();
        }
        self.format(Num::Float(value))
    }

    fn format(&self, value: Num) -> String {
        match &self.layout {
            Layout::Standard { letter, precision } => self.standard(value, *letter, *precision),
            Layout::Custom(sections) => self.custom(value, sections),
        }
    }

    fn standard(&self, value: Num, letter: char, precision: Option<u32>) -> String {
        let nfi = &self.culture.number;
        let upper = letter.is_ascii_uppercase();
        match letter.to_ascii_uppercase() {
            'C' => {
                let p = precision.unwrap_or(nfi.currency_decimal_digits);
                let d = value.fixed(p);
                let text = fixed_text(&d, p, Some(nfi), nfi);
                let pattern = if d.negative {
                    pick(&CURRENCY_NEGATIVE, nfi.currency_negative_pattern)
                } else {
                    pick(&CURRENCY_POSITIVE, nfi.currency_positive_pattern)
                };
                apply_pattern(pattern, &text, nfi.currency_symbol, nfi.negative_sign)
            }
            'F' => {
                let p = precision.unwrap_or(nfi.number_decimal_digits);
                let d = value.fixed(p);
                signed(&d, fixed_text(&d, p, None, nfi), nfi)
            }
            'N' => {
                let p = precision.unwrap_or(nfi.number_decimal_digits);
                let d = value.fixed(p);
                let text = fixed_text(&d, p, Some(nfi), nfi);
                if d.negative {
                    let pattern = pick(&NUMBER_NEGATIVE, nfi.number_negative_pattern);
                    apply_pattern(pattern, &text, "", nfi.negative_sign)
                } else {
                    text
                }
            }
            'P' => {
                let p = precision.unwrap_or(nfi.percent_decimal_digits);
                let mut d = value.fixed(p + 2);
                d.shift(2);
                let text = fixed_text(&d, p, Some(nfi), nfi);
                let pattern = if d.negative {
                    pick(&PERCENT_NEGATIVE, nfi.percent_negative_pattern)
                } else {
                    pick(&PERCENT_POSITIVE, nfi.percent_positive_pattern)
                };
                apply_pattern(pattern, &text, nfi.percent_symbol, nfi.negative_sign)
            }
            'E' => {
                let p = precision.unwrap_or(6);
                let d = value.significant(p + 1);
                signed(&d, scientific_text(&d, p, upper, 3, nfi), nfi)
            }
            'G' | 'R' => {
                let (d, max_digits) = match (value, precision) {
                    (_, Some(p)) if p > 0 && letter.to_ascii_uppercase() == 'G' => {
                        (value.significant(p), p as i32)
                    }
                    (Num::Int(v), _) => {
                        let d = Digits::from_i64(v);
                        let max = d.scale.max(1);
                        (d, max)
                    }
                    (Num::Float(v), _) => {
                        let d = Digits::from_f64_shortest(v);
                        let max = (d.digits.len() as i32).max(15);
                        (d, max)
                    }
                };
                signed(&d, general_text(&d, max_digits, upper, nfi), nfi)
            }
            'D' => {
                let v = value.as_i64();
                let digits = v.unsigned_abs().to_string();
                let width = precision.unwrap_or(0) as usize;
                let sign = if v < 0 { nfi.negative_sign } else { "" };
                format!("{sign}{digits:0>width$}")
            }
            'X' => {
                let bits = value.as_i64() as u64;
                let width = precision.unwrap_or(0) as usize;
                if upper {
                    format!("{bits:0width$X}")
                } else {
                    format!("{bits:0width$x}")
                }
            }
            'B' => {
                let bits = value.as_i64() as u64;
                let width = precision.unwrap_or(0) as usize;
                format!("{bits:0width$b}")
            }
            // Rejected by `new`.
            _ => String::new(),
        }
    }

    fn custom(&self, value: Num, sections: &[Section]) -> String {
        let nfi = &self.culture.number;
        let digits = match value {
            Num::Int(v) => Digits::from_i64(v),
            Num::Float(v) => Digits::from_f64_significant(v, CUSTOM_FLOAT_DIGITS),
        };
        let usable = |i: usize| sections.get(i).filter(|s| !s.tokens.is_empty());
        let zero_section = usable(2);

        let (section, with_sign, is_zero_section) = if digits.is_zero() {
            match zero_section {
                Some(s) => (s, false, true),
                None => (&sections[0], false, false),
            }
        } else if digits.negative {
            match usable(1) {
                Some(s) => (s, false, false),
                None => (&sections[0], true, false),
            }
        } else {
            (&sections[0], false, false)
        };

        let (text, rounded_to_zero) = section.render(digits.clone(), with_sign, nfi);
        if rounded_to_zero && !is_zero_section {
            // Rounded to zero: zero section, else the first section unsigned.
            return zero_section.unwrap_or(&sections[0]).render(digits, false, nfi).0;
        }
        text
    }
}

/// `Some((letter, precision))` when `pattern` is a standard format.
fn standard_specifier(pattern: &str) -> Result<Option<(char, Option<u32>)>, FormatError> {
    let mut chars = pattern.chars();
    let Some(letter) = chars.next() else {
        return Ok(None);
    };
    let rest = chars.as_str();
    if !letter.is_ascii_alphabetic() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    if rest.is_empty() {
        return Ok(Some((letter, None)));
    }
    match rest.parse::<u32>() {
        Ok(p) if p <= MAX_PRECISION => Ok(Some((letter, Some(p)))),
        _ => Err(FormatError::Precision(pattern.to_string())),
    }
}

fn pick(table: &[&'static str], index: usize) -> &'static str {
    table.get(index).copied().unwrap_or(table[0])
}

/// Substitute `n` (number), `$`/`%` (symbol) and `-` (negative sign).
fn apply_pattern(pattern: &str, number: &str, symbol: &str, negative_sign: &str) -> String {
    let mut out = String::with_capacity(number.len() + pattern.len() + symbol.len());
    for ch in pattern.chars() {
        match ch {
            'n' => out.push_str(number),
            '$' | '%' => out.push_str(symbol),
            '-' => out.push_str(negative_sign),
            other => out.push(other),
        }
    }
    out
}

fn signed(d: &Digits, text: String, nfi: &NumberFormatInfo) -> String {
    if d.negative { format!("{}{text}", nfi.negative_sign) } else { text }
}

fn digit_char(d: u8) -> char {
    char::from(b'0' + d)
}

/// Whether a group separator goes after a digit with `remaining` digits to its right.
fn group_boundary(remaining: usize, sizes: &[usize]) -> bool {
    let mut pos = 0;
    let mut i = 0;
    loop {
        let size = sizes.get(i).or(sizes.last()).copied().unwrap_or(0);
        if size == 0 {
            return false;
        }
        pos += size;
        if pos >= remaining {
            return pos == remaining;
        }
        i += 1;
    }
}

fn push_integer(out: &mut String, int: &[u8], grouping: Option<&NumberFormatInfo>) {
    for (k, &digit) in int.iter().enumerate() {
        out.push(digit_char(digit));
        push_group_separator(out, int.len() - 1 - k, grouping);
    }
}

fn push_group_separator(out: &mut String, remaining: usize, grouping: Option<&NumberFormatInfo>) {
    if let Some(nfi) = grouping {
        if remaining > 0 && group_boundary(remaining, nfi.group_sizes) {
            out.push_str(nfi.group_separator);
        }
    }
}

fn fixed_text(
    d: &Digits,
    frac: u32,
    grouping: Option<&NumberFormatInfo>,
    nfi: &NumberFormatInfo,
) -> String {
    let mut out = String::new();
    let int = d.integer_digits();
    if int.is_empty() {
        out.push('0');
    } else {
        push_integer(&mut out, &int, grouping);
    }
    if frac > 0 {
        out.push_str(nfi.decimal_separator);
        let digits = d.fraction_digits();
        for k in 0..frac as usize {
            out.push(digits.get(k).copied().map_or('0', digit_char));
        }
    }
    out
}

fn push_exponent(out: &mut String, exp: i32, upper: bool, min_digits: usize, nfi: &NumberFormatInfo) {
    out.push(if upper { 'E' } else { 'e' });
    out.push_str(if exp < 0 { nfi.negative_sign } else { nfi.positive_sign });
    let _ = write!(out, "{:0min_digits$}", exp.unsigned_abs());
}

fn scientific_text(d: &Digits, precision: u32, upper: bool, min_exp: usize, nfi: &NumberFormatInfo) -> String {
    let mut out = String::new();
    out.push(d.digits.first().copied().map_or('0', digit_char));
    if precision > 0 {
        out.push_str(nfi.decimal_separator);
        for k in 1..=precision as usize {
            out.push(d.digits.get(k).copied().map_or('0', digit_char));
        }
    }
    let exp = if d.is_zero() { 0 } else { d.scale - 1 };
    push_exponent(&mut out, exp, upper, min_exp, nfi);
    out
}

fn general_text(d: &Digits, max_digits: i32, upper: bool, nfi: &NumberFormatInfo) -> String {
    let scientific = !d.is_zero() && (d.scale > max_digits || d.scale < -3);
    let point = if scientific { 1 } else { d.scale };

    let mut out = String::new();
    if point > 0 {
        for k in 0..point as usize {
            out.push(d.digits.get(k).copied().map_or('0', digit_char));
        }
    } else {
        out.push('0');
    }

    let consumed = point.max(0) as usize;
    if d.digits.len() > consumed {
        out.push_str(nfi.decimal_separator);
        for _ in point..0 {
            out.push('0');
        }
        out.extend(d.digits[consumed..].iter().map(|&x| digit_char(x)));
    }

    if scientific {
        push_exponent(&mut out, d.scale - 1, upper, 2, nfi);
    }
    out
}

// ---------------------------------------------------------------------------
// Custom patterns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Token {
    IntDigit,
    FracDigit,
    Point,
    Percent,
    PerMille,
    Exponent { upper: bool, plus: bool, min_digits: usize },
    Literal(String),
}

/// One `;`-separated part of a custom pattern.
#[derive(Debug, Clone)]
struct Section {
    tokens: Vec<Token>,
    int_places: usize,
    min_int: usize,
    frac_max: usize,
    frac_min: usize,
    grouping: bool,
    /// Power of ten applied before rounding (`%`, `‰`, scaling commas).
    shift: i32,
    scientific: bool,
}

fn parse_sections(pattern: &str) -> Result<Vec<Section>, FormatError> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = pattern.chars();
    let mut quote: Option<char> = None;
    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (Some(q), c) if c == q => {
                quote = None;
                current.push(c);
            }
            (None, '\'' | '"') => {
                quote = Some(ch);
                current.push(ch);
            }
            (_, '\\') => {
                current.push(ch);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            (None, ';') => parts.push(std::mem::take(&mut current)),
            (_, c) => current.push(c),
        }
    }
    parts.push(current);
    parts.truncate(3);
    parts.iter().map(|p| parse_section(p, pattern)).collect()
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(prev)) = tokens.last_mut() {
        prev.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

fn parse_section(section: &str, pattern: &str) -> Result<Section, FormatError> {
    let chars: Vec<char> = section.chars().collect();
    let mut tokens = Vec::new();
    let mut digit_count = 0usize;
    let mut decimal_pos: Option<usize> = None;
    let mut first_zero: Option<usize> = None;
    let mut last_zero = 0usize;
    let mut thousand_pos: Option<usize> = None;
    let mut thousand_count = 0i32;
    let mut grouping = false;
    let mut shift = 0i32;
    let mut scientific = false;

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        i += 1;
        match ch {
            '#' | '0' if !scientific => {
                if ch == '0' {
                    first_zero.get_or_insert(digit_count);
                    last_zero = digit_count + 1;
                }
                tokens.push(if decimal_pos.is_some() { Token::FracDigit } else { Token::IntDigit });
                digit_count += 1;
            }
            '.' if !scientific => {
                if decimal_pos.is_none() {
                    decimal_pos = Some(digit_count);
                    tokens.push(Token::Point);
                }
            }
            ',' => {
                if digit_count > 0 && decimal_pos.is_none() {
                    if let Some(pos) = thousand_pos {
                        if pos == digit_count {
                            thousand_count += 1;
                            continue;
                        }
                        grouping = true;
                    }
                    thousand_pos = Some(digit_count);
                    thousand_count = 1;
                }
            }
            '%' => {
                shift += 2;
                tokens.push(Token::Percent);
            }
            '‰' => {
                shift += 3;
                tokens.push(Token::PerMille);
            }
            '\'' | '"' => {
                let end = chars[i..]
                    .iter()
                    .position(|&c| c == ch)
                    .ok_or_else(|| FormatError::UnterminatedQuote(pattern.to_string()))?;
                let literal: String = chars[i..i + end].iter().collect();
                push_literal(&mut tokens, &literal);
                i += end + 1;
            }
            '\\' => {
                let next = chars
                    .get(i)
                    .ok_or_else(|| FormatError::DanglingEscape(pattern.to_string()))?;
                push_literal(&mut tokens, &next.to_string());
                i += 1;
            }
            'E' | 'e' if !scientific => {
                let sign = chars.get(i).copied();
                let (plus, skip) = match sign {
                    Some('+') => (true, 1),
                    Some('-') => (false, 1),
                    _ => (false, 0),
                };
                let zeros = chars[(i + skip).min(chars.len())..]
                    .iter()
                    .take_while(|&&c| c == '0')
                    .count();
                if zeros == 0 {
                    push_literal(&mut tokens, &ch.to_string());
                    continue;
                }
                scientific = true;
                tokens.push(Token::Exponent { upper: ch == 'E', plus, min_digits: zeros });
                i += skip + zeros;
            }
            other => push_literal(&mut tokens, &other.to_string()),
        }
    }

    let int_places = decimal_pos.unwrap_or(digit_count);
    if let Some(pos) = thousand_pos {
        if pos == int_places {
            shift -= 3 * thousand_count;
        } else {
            grouping = true;
        }
    }
    let min_int = match first_zero {
        Some(f) if f < int_places => int_places - f,
        _ => 0,
    };
    let frac_min = last_zero.saturating_sub(int_places);

    Ok(Section {
        tokens,
        int_places,
        min_int,
        frac_max: digit_count - int_places,
        frac_min,
        grouping,
        shift,
        scientific,
    })
}

impl Section {
    /// Render `d` (sign handled by `with_sign`). Also reports whether the
    /// value rounded to zero.
    fn render(&self, mut d: Digits, with_sign: bool, nfi: &NumberFormatInfo) -> (String, bool) {
        d.shift(self.shift);
        let mut exponent = 0;
        if self.scientific {
            d.round((self.int_places + self.frac_max) as i32);
            if !d.is_zero() {
                exponent = d.scale - self.int_places as i32;
                d.scale = self.int_places as i32;
            }
        } else {
            d.round_fixed(self.frac_max as i32);
        }
        let zero = d.is_zero();

        let mut int = d.integer_digits();
        if int.len() < self.min_int {
            let mut padded = vec![0; self.min_int - int.len()];
            padded.extend_from_slice(&int);
            int = padded;
        }
        let mut frac = d.fraction_digits();
        frac.truncate(self.frac_max);
        if frac.len() < self.frac_min {
            frac.resize(self.frac_min, 0);
        }

        let grouping = self.grouping.then_some(nfi);
        let mut out = String::new();
        if with_sign && !zero {
            out.push_str(nfi.negative_sign);
        }

        let overflow = int.len().saturating_sub(self.int_places);
        let offset = self.int_places as isize - int.len() as isize;
        let mut int_seen = 0usize;
        let mut frac_seen = 0usize;
        for token in &self.tokens {
            match token {
                Token::IntDigit => {
                    let slot = int_seen as isize - offset;
                    if int_seen == 0 && overflow > 0 {
                        for k in 0..=overflow {
                            out.push(digit_char(int[k]));
                            push_group_separator(&mut out, int.len() - 1 - k, grouping);
                        }
                    } else if slot >= 0 {
                        let k = slot as usize;
                        out.push(digit_char(int[k]));
                        push_group_separator(&mut out, int.len() - 1 - k, grouping);
                    }
                    int_seen += 1;
                }
                Token::FracDigit => {
                    if let Some(&digit) = frac.get(frac_seen) {
                        out.push(digit_char(digit));
                    }
                    frac_seen += 1;
                }
                Token::Point => {
                    if self.int_places == 0 {
                        push_integer(&mut out, &int, grouping);
                    }
                    if !frac.is_empty() {
                        out.push_str(nfi.decimal_separator);
                    }
                }
                Token::Percent => out.push_str(nfi.percent_symbol),
                Token::PerMille => out.push_str(nfi.per_mille_symbol),
                Token::Exponent { upper, plus, min_digits } => {
                    out.push(if *upper { 'E' } else { 'e' });
                    if exponent < 0 {
                        out.push_str(nfi.negative_sign);
                    } else if *plus {
                        out.push_str(nfi.positive_sign);
                    }
                    let _ = write!(out, "{:0min_digits$}", exponent.unsigned_abs());
                }
                Token::Literal(text) => out.push_str(text),
            }
        }
        (out, zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::culture::{BuiltinCultures, CultureProvider};

    fn culture(name: &str) -> &'static Culture {
        BuiltinCultures.resolve(name)
    }

    fn int(pattern: &str, name: &str, v: i64) -> String {
        NumberFormatter::new(pattern, NumericKind::Integral, culture(name))
            .unwrap()
            .format_i64(v)
    }

    fn float(pattern: &str, name: &str, v: f64) -> String {
        NumberFormatter::new(pattern, NumericKind::Floating, culture(name))
            .unwrap()
            .format_f64(v)
    }

    #[test]
    fn number_format_groups_thousands() {
        assert_eq!(int("N0", "en-US", 1234), "1,234");
        assert_eq!(int("N0", "en-US", -1234567), "-1,234,567");
        assert_eq!(int("N", "en-US", 1234), "1,234.00");
        assert_eq!(int("N0", "de-DE", 1234), "1.234");
        assert_eq!(float("N2", "de-DE", 1234.5), "1.234,50");
        assert_eq!(float("N1", "fr-FR", 1234567.25), "1\u{202f}234\u{202f}567,3");
        assert_eq!(int("n0", "", 999), "999");
    }

    #[test]
    fn fixed_and_rounding() {
        assert_eq!(float("F2", "en-US", 3.14159), "3.14");
        assert_eq!(float("F0", "en-US", 2.5), "3");
        assert_eq!(float("F0", "en-US", -2.5), "-3");
        assert_eq!(float("F2", "en-US", 0.125), "0.13");
        assert_eq!(float("F3", "en-US", 1e-10), "0.000");
        assert_eq!(int("F2", "en-US", -7), "-7.00");
    }

    #[test]
    fn currency_and_percent() {
        assert_eq!(float("C", "en-US", 1234.5), "$1,234.50");
        assert_eq!(float("C", "en-US", -1234.5), "-$1,234.50");
        assert_eq!(float("C0", "en-GB", 99.5), "£100");
        assert_eq!(float("C", "de-DE", 1234.5), "1.234,50 €");
        assert_eq!(float("C", "de-DE", -3.0), "-3,00 €");
        assert_eq!(float("C", "", -3.0), "(¤3.00)");
        assert_eq!(float("P1", "en-US", 0.1234), "12.3%");
        assert_eq!(float("P0", "", 0.5), "50 %");
        assert_eq!(float("P", "en-US", -0.05), "-5.00%");
        assert_eq!(int("P0", "en-US", 3), "300%");
    }

    #[test]
    fn scientific_and_general() {
        assert_eq!(float("E", "en-US", 1234.5678), "1.234568E+003");
        assert_eq!(float("e2", "en-US", 0.000123), "1.23e-004");
        assert_eq!(int("E1", "en-US", 0), "0.0E+000");
        assert_eq!(float("G", "en-US", 1234.5678), "1234.5678");
        assert_eq!(float("G", "en-US", 1e15), "1E+15");
        assert_eq!(float("G", "en-US", 1e14), "100000000000000");
        assert_eq!(float("G", "en-US", 0.0001), "0.0001");
        assert_eq!(float("G", "en-US", 0.00001), "1E-05");
        assert_eq!(float("G3", "en-US", 1234.5678), "1.23E+03");
        assert_eq!(float("g4", "de-DE", 3.14159), "3,142");
        assert_eq!(float("R", "en-US", 0.1 + 0.2), "0.30000000000000004");
        assert_eq!(int("G", "en-US", i64::MAX), "9223372036854775807");
        assert_eq!(int("G2", "en-US", 123456), "1.2E+05");
        assert_eq!(float("G", "en-US", -0.0), "-0");
    }

    #[test]
    fn integral_only_formats() {
        assert_eq!(int("D5", "en-US", -42), "-00042");
        assert_eq!(int("D", "en-US", 42), "42");
        assert_eq!(int("X", "en-US", 255), "FF");
        assert_eq!(int("x4", "en-US", 255), "00ff");
        assert_eq!(int("X", "en-US", -1), "FFFFFFFFFFFFFFFF");
        assert_eq!(int("B8", "en-US", 5), "00000101");
    }

    #[test]
    fn custom_patterns() {
        assert_eq!(float("#,##0.00", "en-US", 1234567.891), "1,234,567.89");
        assert_eq!(float("#,##0.00", "de-DE", 1234567.891), "1.234.567,89");
        assert_eq!(float("0.###", "en-US", 2.5), "2.5");
        assert_eq!(float("00.00", "en-US", 3.14159), "03.14");
        assert_eq!(float("#.##", "en-US", 0.0), "");
        assert_eq!(float("0.0%", "en-US", 0.256), "25.6%");
        assert_eq!(float("#,##0,,", "en-US", 1234567890.0), "1,235");
        assert_eq!(int("000-00-0000", "en-US", 123456789), "123-45-6789");
        assert_eq!(int("#'#'", "en-US", 7), "7#");
        assert_eq!(int("\\##", "en-US", 7), "#7");
        assert_eq!(float(".00", "en-US", 12.5), "12.50");
        assert_eq!(float("0.00E+00", "en-US", 12345.0), "1.23E+04");
        assert_eq!(float("0.0e0", "en-US", 0.00042), "4.2e-4");
        assert_eq!(int("[0]", "en-US", 12), "[12]");
    }

    #[test]
    fn custom_sections() {
        let pattern = "#,##0.00;(#,##0.00);Zero";
        assert_eq!(float(pattern, "en-US", 1234.5), "1,234.50");
        assert_eq!(float(pattern, "en-US", -1234.5), "(1,234.50)");
        assert_eq!(float(pattern, "en-US", 0.0), "Zero");
        assert_eq!(float(pattern, "en-US", 0.001), "Zero");
        assert_eq!(float("0;;'none'", "en-US", -5.0), "-5");
        assert_eq!(float("0.0", "en-US", -0.01), "0.0");
        assert_eq!(int("0", "en-US", -5), "-5");
        assert_eq!(float("0;(0)", "en-US", -0.4), "0");
        assert_eq!(float("#,##0.00;(#,##0.00)", "en-US", -0.001), "0.00");
        assert_eq!(float("0;(0)", "en-US", -0.6), "(1)");
    }

    #[test]
    fn non_finite_values_use_culture_symbols() {
        assert_eq!(float("N2", "en-US", f64::NAN), "NaN");
        assert_eq!(float("#,##0", "en-US", f64::INFINITY), "∞");
        assert_eq!(float("F2", "", f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn rejects_invalid_patterns() {
        let c = culture("en-US");
        assert!(matches!(
            NumberFormatter::new("Q", NumericKind::Integral, c),
            Err(FormatError::UnknownSpecifier(_))
        ));
        assert!(matches!(
            NumberFormatter::new("X2", NumericKind::Floating, c),
            Err(FormatError::IntegralOnly(_))
        ));
        assert!(matches!(
            NumberFormatter::new("R", NumericKind::Integral, c),
            Err(FormatError::UnknownSpecifier(_))
        ));
        assert!(matches!(
            NumberFormatter::new("N1000", NumericKind::Integral, c),
            Err(FormatError::Precision(_))
        ));
        assert!(matches!(
            NumberFormatter::new("0'abc", NumericKind::Integral, c),
            Err(FormatError::UnterminatedQuote(_))
        ));
        assert!(matches!(
            NumberFormatter::new("0\\", NumericKind::Integral, c),
            Err(FormatError::DanglingEscape(_))
        ));
    }
}
