//! Built-in culture tables.

use crate::culture::{Culture, DateTimeFormatInfo, NumberFormatInfo};

pub(crate) static ALL: &[&Culture] = &[
    &INVARIANT, &EN_US, &EN_GB, &DE_DE, &FR_FR, &ES_ES, &IT_IT, &RU_RU, &JA_JP,
];

const GROUP_3: &[usize] = &[3];

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const EN_MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_DAYS: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];
const EN_DAYS_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number rules shared by the cultures writing `1.234,5` with a trailing currency.
const fn euro_numbers(group_separator: &'static str) -> NumberFormatInfo {
    NumberFormatInfo {
        decimal_separator: ",",
        group_separator,
        group_sizes: GROUP_3,
        negative_sign: "-",
        positive_sign: "+",
        nan_symbol: "NaN",
        positive_infinity_symbol: "∞",
        negative_infinity_symbol: "-∞",
        number_decimal_digits: 2,
        number_negative_pattern: 1,
        currency_symbol: "€",
        currency_decimal_digits: 2,
        currency_positive_pattern: 3,
        currency_negative_pattern: 8,
        percent_symbol: "%",
        per_mille_symbol: "‰",
        percent_decimal_digits: 2,
        percent_positive_pattern: 0,
        percent_negative_pattern: 0,
    }
}

const fn english_numbers(currency_symbol: &'static str) -> NumberFormatInfo {
    NumberFormatInfo {
        decimal_separator: ".",
        group_separator: ",",
        group_sizes: GROUP_3,
        negative_sign: "-",
        positive_sign: "+",
        nan_symbol: "NaN",
        positive_infinity_symbol: "∞",
        negative_infinity_symbol: "-∞",
        number_decimal_digits: 2,
        number_negative_pattern: 1,
        currency_symbol,
        currency_decimal_digits: 2,
        currency_positive_pattern: 0,
        currency_negative_pattern: 1,
        percent_symbol: "%",
        per_mille_symbol: "‰",
        percent_decimal_digits: 2,
        percent_positive_pattern: 1,
        percent_negative_pattern: 1,
    }
}

pub(crate) static INVARIANT: Culture = Culture {
    name: "",
    display_name: "Invariant Language (Invariant Country)",
    number: NumberFormatInfo {
        decimal_separator: ".",
        group_separator: ",",
        group_sizes: GROUP_3,
        negative_sign: "-",
        positive_sign: "+",
        nan_symbol: "NaN",
        positive_infinity_symbol: "Infinity",
        negative_infinity_symbol: "-Infinity",
        number_decimal_digits: 2,
        number_negative_pattern: 1,
        currency_symbol: "¤",
        currency_decimal_digits: 2,
        currency_positive_pattern: 0,
        currency_negative_pattern: 0,
        percent_symbol: "%",
        per_mille_symbol: "‰",
        percent_decimal_digits: 2,
        percent_positive_pattern: 0,
        percent_negative_pattern: 0,
    },
    date_time: DateTimeFormatInfo {
        month_names: EN_MONTHS,
        abbreviated_month_names: EN_MONTHS_ABBR,
        month_genitive_names: None,
        day_names: EN_DAYS,
        abbreviated_day_names: EN_DAYS_ABBR,
        am_designator: "AM",
        pm_designator: "PM",
        date_separator: "/",
        time_separator: ":",
        short_date_pattern: "MM/dd/yyyy",
        long_date_pattern: "dddd, dd MMMM yyyy",
        short_time_pattern: "HH:mm",
        long_time_pattern: "HH:mm:ss",
        full_date_time_pattern: "dddd, dd MMMM yyyy HH:mm:ss",
        month_day_pattern: "MMMM dd",
        year_month_pattern: "yyyy MMMM",
        era_name: "A.D.",
    },
    true_string: "True",
    false_string: "False",
};

pub(crate) static EN_US: Culture = Culture {
    name: "en-US",
    display_name: "English (United States)",
    number: english_numbers("$"),
    date_time: DateTimeFormatInfo {
        month_names: EN_MONTHS,
        abbreviated_month_names: EN_MONTHS_ABBR,
        month_genitive_names: None,
        day_names: EN_DAYS,
        abbreviated_day_names: EN_DAYS_ABBR,
        am_designator: "AM",
        pm_designator: "PM",
        date_separator: "/",
        time_separator: ":",
        short_date_pattern: "M/d/yyyy",
        long_date_pattern: "dddd, MMMM d, yyyy",
        short_time_pattern: "h:mm tt",
        long_time_pattern: "h:mm:ss tt",
        full_date_time_pattern: "dddd, MMMM d, yyyy h:mm:ss tt",
        month_day_pattern: "MMMM d",
        year_month_pattern: "MMMM yyyy",
        era_name: "A.D.",
    },
    true_string: "True",
    false_string: "False",
};

pub(crate) static EN_GB: Culture = Culture {
    name: "en-GB",
    display_name: "English (United Kingdom)",
    number: english_numbers("£"),
    date_time: DateTimeFormatInfo {
        month_names: EN_MONTHS,
        abbreviated_month_names: EN_MONTHS_ABBR,
        month_genitive_names: None,
        day_names: EN_DAYS,
        abbreviated_day_names: EN_DAYS_ABBR,
        am_designator: "am",
        pm_designator: "pm",
        date_separator: "/",
        time_separator: ":",
        short_date_pattern: "dd/MM/yyyy",
        long_date_pattern: "dd MMMM yyyy",
        short_time_pattern: "HH:mm",
        long_time_pattern: "HH:mm:ss",
        full_date_time_pattern: "dd MMMM yyyy HH:mm:ss",
        month_day_pattern: "d MMMM",
        year_month_pattern: "MMMM yyyy",
        era_name: "AD",
    },
    true_string: "True",
    false_string: "False",
};

pub(crate) static DE_DE: Culture = Culture {
    name: "de-DE",
    display_name: "German (Germany)",
    number: euro_numbers("."),
    date_time: DateTimeFormatInfo {
        month_names: [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ],
        abbreviated_month_names: [
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
            "Nov.", "Dez.",
        ],
        month_genitive_names: None,
        day_names: [
            "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
        ],
        abbreviated_day_names: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
        am_designator: "AM",
        pm_designator: "PM",
        date_separator: ".",
        time_separator: ":",
        short_date_pattern: "dd.MM.yyyy",
        long_date_pattern: "dddd, d. MMMM yyyy",
        short_time_pattern: "HH:mm",
        long_time_pattern: "HH:mm:ss",
        full_date_time_pattern: "dddd, d. MMMM yyyy HH:mm:ss",
        month_day_pattern: "d. MMMM",
        year_month_pattern: "MMMM yyyy",
        era_name: "n. Chr.",
    },
    true_string: "True",
    false_string: "False",
};

pub(crate) static FR_FR: Culture = Culture {
    name: "fr-FR",
    display_name: "French (France)",
    number: euro_numbers("\u{202f}"),
    date_time: DateTimeFormatInfo {
        month_names: [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ],
        abbreviated_month_names: [
            "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
            "nov.", "déc.",
        ],
        month_genitive_names: None,
        day_names: ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"],
        abbreviated_day_names: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
        am_designator: "AM",
        pm_designator: "PM",
        date_separator: "/",
        time_separator: ":",
        short_date_pattern: "dd/MM/yyyy",
        long_date_pattern: "dddd d MMMM yyyy",
        short_time_pattern: "HH:mm",
        long_time_pattern: "HH:mm:ss",
        full_date_time_pattern: "dddd d MMMM yyyy HH:mm:ss",
        month_day_pattern: "d MMMM",
        year_month_pattern: "MMMM yyyy",
        era_name: "ap. J.-C.",
    },
    true_string: "True",
    false_string: "False",
};

pub(crate) static ES_ES: Culture = Culture {
    name: "es-ES",
    display_name: "Spanish (Spain)",
    number: euro_numbers("."),
    date_time: DateTimeFormatInfo {
        month_names: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
        abbreviated_month_names: [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
        ],
        month_genitive_names: None,
        day_names: ["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"],
        abbreviated_day_names: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
        am_designator: "a. m.",
        pm_designator: "p. m.",
        date_separator: "/",
        time_separator: ":",
        short_date_pattern: "dd/MM/yyyy",
        long_date_pattern: "dddd, d 'de' MMMM 'de' yyyy",
        short_time_pattern: "H:mm",
        long_time_pattern: "H:mm:ss",
        full_date_time_pattern: "dddd, d 'de' MMMM 'de' yyyy H:mm:ss",
        month_day_pattern: "d 'de' MMMM",
        year_month_pattern: "MMMM 'de' yyyy",
        era_name: "d. C.",
    },
    true_string: "True",
    false_string: "False",
};

pub(crate) static IT_IT: Culture = Culture {
    name: "it-IT",
    display_name: "Italian (Italy)",
    number: NumberFormatInfo {
        percent_positive_pattern: 1,
        percent_negative_pattern: 1,
        ..euro_numbers(".")
    },
    date_time: DateTimeFormatInfo {
        month_names: [
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
            "settembre", "ottobre", "novembre", "dicembre",
        ],
        abbreviated_month_names: [
            "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
        ],
        month_genitive_names: None,
        day_names: [
            "domenica", "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato",
        ],
        abbreviated_day_names: ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
        am_designator: "AM",
        pm_designator: "PM",
        date_separator: "/",
        time_separator: ":",
        short_date_pattern: "dd/MM/yyyy",
        long_date_pattern: "dddd d MMMM yyyy",
        short_time_pattern: "HH:mm",
        long_time_pattern: "HH:mm:ss",
        full_date_time_pattern: "dddd d MMMM yyyy HH:mm:ss",
        month_day_pattern: "d MMMM",
        year_month_pattern: "MMMM yyyy",
        era_name: "d.C.",
    },
    true_string: "True",
    false_string: "False",
};

pub(crate) static RU_RU: Culture = Culture {
    name: "ru-RU",
    display_name: "Russian (Russia)",
    number: NumberFormatInfo {
        currency_symbol: "₽",
        ..euro_numbers("\u{a0}")
    },
    date_time: DateTimeFormatInfo {
        month_names: [
            "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
            "октябрь", "ноябрь", "декабрь",
        ],
        abbreviated_month_names: [
            "янв.", "февр.", "март", "апр.", "май", "июнь", "июль", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ],
        month_genitive_names: Some([
            "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа",
            "сентября", "октября", "ноября", "декабря",
        ]),
        day_names: [
            "воскресенье", "понедельник", "вторник", "среда", "четверг", "пятница", "суббота",
        ],
        abbreviated_day_names: ["вс", "пн", "вт", "ср", "чт", "пт", "сб"],
        am_designator: "AM",
        pm_designator: "PM",
        date_separator: ".",
        time_separator: ":",
        short_date_pattern: "dd.MM.yyyy",
        long_date_pattern: "dddd, d MMMM yyyy 'г.'",
        short_time_pattern: "HH:mm",
        long_time_pattern: "HH:mm:ss",
        full_date_time_pattern: "dddd, d MMMM yyyy 'г.' HH:mm:ss",
        month_day_pattern: "d MMMM",
        year_month_pattern: "MMMM yyyy",
        era_name: "н. э.",
    },
    true_string: "True",
    false_string: "False",
};

pub(crate) static JA_JP: Culture = Culture {
    name: "ja-JP",
    display_name: "Japanese (Japan)",
    number: english_numbers("￥"),
    date_time: DateTimeFormatInfo {
        month_names: [
            "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
        ],
        abbreviated_month_names: [
            "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
        ],
        month_genitive_names: None,
        day_names: ["日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日"],
        abbreviated_day_names: ["日", "月", "火", "水", "木", "金", "土"],
        am_designator: "午前",
        pm_designator: "午後",
        date_separator: "/",
        time_separator: ":",
        short_date_pattern: "yyyy/MM/dd",
        long_date_pattern: "yyyy'年'M'月'd'日'",
        short_time_pattern: "H:mm",
        long_time_pattern: "H:mm:ss",
        full_date_time_pattern: "yyyy'年'M'月'd'日' H:mm:ss",
        month_day_pattern: "M'月'd'日'",
        year_month_pattern: "yyyy'年'M'月'",
        era_name: "西暦",
    },
    true_string: "True",
    false_string: "False",
};
