//! Decimal digit buffer shared by the numeric formatters.

/// Guard digits requested beyond the rounding position so that rounding
/// half away from zero sees the exact tail of the binary value.
const GUARD_DIGITS: i32 = 20;

/// Upper bound on digits requested from the float printer.
const MAX_DIGITS: i32 = 1100;

/// `0.d₁d₂d₃… × 10^scale`, digits without leading or trailing zeros.
///
/// Zero has no digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Digits {
    pub negative: bool,
    pub digits: Vec<u8>,
    pub scale: i32,
}

impl Digits {
    pub fn from_i64(v: i64) -> Self {
        let digits: Vec<u8> = v.unsigned_abs().to_string().bytes().map(|b| b - b'0').collect();
        let mut d = Self { negative: v < 0, scale: digits.len() as i32, digits };
        d.normalize();
        d
    }

    /// Shortest digits that round-trip to `v`. `v` must be finite.
    pub fn from_f64_shortest(v: f64) -> Self {
        Self::parse_exp(v.is_sign_negative(), &format!("{:e}", v.abs()))
    }

    /// Exact digits of `v` cut at `frac` digits after the decimal point,
    /// rounded half away from zero.
    pub fn from_f64_fixed(v: f64, frac: i32) -> Self {
        let estimate = Self::from_f64_shortest(v);
        if estimate.is_zero() {
            return estimate;
        }
        let keep = estimate.scale.saturating_add(frac);
        if keep < -1 {
            return Self { negative: v.is_sign_negative(), digits: Vec::new(), scale: 0 };
        }
        let mut d = Self::exact(v, keep + GUARD_DIGITS);
        d.round(d.scale.saturating_add(frac));
        d
    }

    /// `sig` significant digits of `v`, rounded half away from zero.
    pub fn from_f64_significant(v: f64, sig: usize) -> Self {
        if v == 0.0 {
            return Self { negative: v.is_sign_negative(), digits: Vec::new(), scale: 0 };
        }
        let mut d = Self::exact(v, sig as i32 + GUARD_DIGITS);
        d.round(sig as i32);
        d
    }

    fn exact(v: f64, sig: i32) -> Self {
        let precision = sig.clamp(1, MAX_DIGITS) as usize - 1;
        Self::parse_exp(v.is_sign_negative(), &format!("{:.*e}", precision, v.abs()))
    }

    /// Parse Rust's `{:e}` output (`"1.2345e3"`, `"5e-324"`).
    fn parse_exp(negative: bool, s: &str) -> Self {
        let (mantissa, exp) = s.split_once('e').unwrap_or((s, "0"));
        let exp: i32 = exp.parse().unwrap_or(0);
        let digits = mantissa.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();
        let mut d = Self { negative, digits, scale: exp + 1 };
        d.normalize();
        d
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Keep `pos` leading digits, rounding half away from zero.
    pub fn round(&mut self, pos: i32) {
        if pos < 0 {
            self.digits.clear();
            self.scale = 0;
            return;
        }
        let pos = pos as usize;
        if pos >= self.digits.len() {
            return;
        }
        let up = self.digits[pos] >= 5;
        self.digits.truncate(pos);
        if up {
            let mut i = pos;
            loop {
                if i == 0 {
                    self.digits.insert(0, 1);
                    self.scale += 1;
                    break;
                }
                i -= 1;
                if self.digits[i] == 9 {
                    self.digits[i] = 0;
                } else {
                    self.digits[i] += 1;
                    break;
                }
            }
        }
        self.normalize();
    }

    /// Round to `frac` digits after the decimal point.
    pub fn round_fixed(&mut self, frac: i32) {
        let pos = self.scale.saturating_add(frac);
        self.round(pos);
    }

    /// Multiply by `10^n`.
    pub fn shift(&mut self, n: i32) {
        if !self.is_zero() {
            self.scale += n;
        }
    }

    /// Digits left of the decimal point; empty for `|x| < 1`.
    pub fn integer_digits(&self) -> Vec<u8> {
        if self.scale <= 0 {
            return Vec::new();
        }
        let n = self.scale as usize;
        let mut out: Vec<u8> = self.digits.iter().copied().take(n).collect();
        out.resize(n, 0);
        out
    }

    /// Digits right of the decimal point, without trailing zeros.
    pub fn fraction_digits(&self) -> Vec<u8> {
        if self.scale >= 0 {
            return self.digits.iter().copied().skip(self.scale as usize).collect();
        }
        let mut out = vec![0; self.scale.unsigned_abs() as usize];
        out.extend_from_slice(&self.digits);
        out
    }

    fn normalize(&mut self) {
        let lead = self.digits.iter().take_while(|&&d| d == 0).count();
        if lead > 0 {
            self.digits.drain(..lead);
            self.scale -= lead as i32;
        }
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.scale = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(d: &Digits) -> String {
        let s: String = d.digits.iter().map(|d| char::from(b'0' + d)).collect();
        format!("{}0.{s}e{}", if d.negative { "-" } else { "" }, d.scale)
    }

    #[test]
    fn integers() {
        assert_eq!(text(&Digits::from_i64(1200)), "0.12e4");
        assert_eq!(text(&Digits::from_i64(-7)), "-0.7e1");
        assert_eq!(text(&Digits::from_i64(0)), "0.e0");
        assert_eq!(text(&Digits::from_i64(i64::MIN)), "-0.9223372036854775808e19");
    }

    #[test]
    fn shortest_floats() {
        assert_eq!(text(&Digits::from_f64_shortest(1234.5)), "0.12345e4");
        assert_eq!(text(&Digits::from_f64_shortest(0.001)), "0.1e-2");
        assert_eq!(text(&Digits::from_f64_shortest(-0.0)), "-0.e0");
    }

    #[test]
    fn fixed_rounds_half_away_from_zero() {
        assert_eq!(text(&Digits::from_f64_fixed(2.5, 0)), "0.3e1");
        assert_eq!(text(&Digits::from_f64_fixed(0.125, 2)), "0.13e0");
        // 1.005 is 1.00499999999999989… in binary.
        assert_eq!(text(&Digits::from_f64_fixed(1.005, 2)), "0.1e1");
        assert_eq!(text(&Digits::from_f64_fixed(9.996, 2)), "0.1e2");
        assert_eq!(text(&Digits::from_f64_fixed(0.004, 2)), "0.e0");
        assert_eq!(text(&Digits::from_f64_fixed(1e-300, 2)), "0.e0");
    }

    #[test]
    fn significant_digits() {
        assert_eq!(text(&Digits::from_f64_significant(123456.0, 3)), "0.123e6");
        assert_eq!(text(&Digits::from_f64_significant(0.1 + 0.2, 15)), "0.3e0");
    }

    #[test]
    fn integer_and_fraction_parts() {
        let d = Digits::from_f64_shortest(12.034);
        assert_eq!(d.integer_digits(), vec![1, 2]);
        assert_eq!(d.fraction_digits(), vec![0, 3, 4]);

        let small = Digits::from_f64_shortest(0.05);
        assert!(small.integer_digits().is_empty());
        assert_eq!(small.fraction_digits(), vec![0, 5]);

        let big = Digits::from_i64(1200);
        assert_eq!(big.integer_digits(), vec![1, 2, 0, 0]);
        assert!(big.fraction_digits().is_empty());
    }
}
