use crate::data;

/// Number rendering rules of a culture.
///
/// Pattern fields are indexes into the .NET pattern tables (see
/// `numeric::CURRENCY_POSITIVE` and friends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatInfo {
    pub decimal_separator: &'static str,
    pub group_separator: &'static str,
    /// Digits per group, right to left; the last size repeats, 0 stops grouping.
    pub group_sizes: &'static [usize],
    pub negative_sign: &'static str,
    pub positive_sign: &'static str,
    pub nan_symbol: &'static str,
    pub positive_infinity_symbol: &'static str,
    pub negative_infinity_symbol: &'static str,
    pub number_decimal_digits: u32,
    pub number_negative_pattern: usize,
    pub currency_symbol: &'static str,
    pub currency_decimal_digits: u32,
    pub currency_positive_pattern: usize,
    pub currency_negative_pattern: usize,
    pub percent_symbol: &'static str,
    pub per_mille_symbol: &'static str,
    pub percent_decimal_digits: u32,
    pub percent_positive_pattern: usize,
    pub percent_negative_pattern: usize,
}

/// Date and time rendering rules of a culture.
///
/// Day name arrays start on Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormatInfo {
    pub month_names: [&'static str; 12],
    pub abbreviated_month_names: [&'static str; 12],
    /// Month names used next to a day number ("5 марта"), when the
    /// language inflects them.
    pub month_genitive_names: Option<[&'static str; 12]>,
    pub day_names: [&'static str; 7],
    pub abbreviated_day_names: [&'static str; 7],
    pub am_designator: &'static str,
    pub pm_designator: &'static str,
    pub date_separator: &'static str,
    pub time_separator: &'static str,
    pub short_date_pattern: &'static str,
    pub long_date_pattern: &'static str,
    pub short_time_pattern: &'static str,
    pub long_time_pattern: &'static str,
    pub full_date_time_pattern: &'static str,
    pub month_day_pattern: &'static str,
    pub year_month_pattern: &'static str,
    pub era_name: &'static str,
}

/// A named set of culture-specific rendering rules.
#[derive(Debug, PartialEq, Eq)]
pub struct Culture {
    /// BCP-47 name, `""` for the invariant culture.
    pub name: &'static str,
    pub display_name: &'static str,
    pub number: NumberFormatInfo,
    pub date_time: DateTimeFormatInfo,
    pub true_string: &'static str,
    pub false_string: &'static str,
}

impl Culture {
    /// The culture-independent rules used as fallback.
    pub fn invariant() -> &'static Culture {
        &data::INVARIANT
    }

    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }

    pub fn format_bool(&self, value: bool) -> &'static str {
        if value { self.true_string } else { self.false_string }
    }
}

/// Maps culture identifiers to culture data.
pub trait CultureProvider: Send + Sync {
    /// `None` when the identifier is unknown.
    fn lookup(&self, id: &str) -> Option<&'static Culture>;

    /// Like [`lookup`](Self::lookup) but never fails: empty and unknown
    /// identifiers give the invariant culture.
    fn resolve(&self, id: &str) -> &'static Culture {
        let id = id.trim();
        if id.is_empty() {
            return Culture::invariant();
        }
        match self.lookup(id) {
            Some(culture) => culture,
            None => {
                tracing::debug!(culture = %id, "unknown culture, using invariant");
                Culture::invariant()
            }
        }
    }
}

/// The cultures compiled into this crate.
///
/// Accepts `en-US`, `en_us`, neutral `en`, display names such as
/// `"German (Germany)"`, `invariant`, and `current` (taken from the
/// `LC_ALL` / `LANG` environment variables).
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCultures;

impl BuiltinCultures {
    pub fn all(&self) -> &'static [&'static Culture] {
        data::ALL
    }

    fn find(&self, id: &str) -> Option<&'static Culture> {
        let id = id.replace('_', "-");
        if id.eq_ignore_ascii_case("invariant") {
            return Some(Culture::invariant());
        }
        let all = self.all();
        all.iter()
            .find(|c| !c.is_invariant() && c.name.eq_ignore_ascii_case(&id))
            .or_else(|| all.iter().find(|c| c.display_name.eq_ignore_ascii_case(&id)))
            .or_else(|| {
                // Neutral name or unknown region: first culture of the language.
                let lang = id.split('-').next().unwrap_or_default();
                all.iter().find(|c| {
                    c.name
                        .split('-')
                        .next()
                        .is_some_and(|l| !l.is_empty() && l.eq_ignore_ascii_case(lang))
                })
            })
            .copied()
    }
}

impl CultureProvider for BuiltinCultures {
    fn lookup(&self, id: &str) -> Option<&'static Culture> {
        if id.eq_ignore_ascii_case("current") {
            let env = ["LC_ALL", "LANG"]
                .iter()
                .filter_map(|k| std::env::var(k).ok())
                .find(|v| !v.is_empty())?;
            // "de_DE.UTF-8" → "de_DE"
            let name = env.split(['.', '@']).next().unwrap_or_default();
            return self.find(name);
        }
        self.find(id.trim())
    }
}
