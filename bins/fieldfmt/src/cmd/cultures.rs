use chrono::NaiveDate;
use fieldfmt_culture::{BuiltinCultures, DateTimeFormatter, NumberFormatter, NumericKind};

use crate::error::CliError;

/// One line per built-in culture with sample renderings.
pub fn run() -> Result<(), CliError> {
    let sample_date = NaiveDate::from_ymd_opt(2024, 3, 5).and_then(|d| d.and_hms_opt(14, 7, 9));
    for &culture in BuiltinCultures.all() {
        let name = if culture.is_invariant() { "invariant" } else { culture.name };
        let number = NumberFormatter::new("N2", NumericKind::Floating, culture)
            .map(|f| f.format_f64(1_234_567.891))
            .unwrap_or_default();
        let date = match (DateTimeFormatter::new("g", culture), sample_date) {
            (Ok(f), Some(v)) => f.format(&v),
            _ => String::new(),
        };
        println!("{name:<10} {:<28} {number:<16} {date}", culture.display_name);
    }
    Ok(())
}
