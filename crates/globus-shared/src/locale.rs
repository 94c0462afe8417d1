//! User-facing text and locale-aware formatting.
//!
//! Every string the UI shows lives in a [`Messages`] catalog so the client
//! can switch language with a single setting. Russian is the default.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Static text for one locale.
#[derive(Debug)]
pub struct Messages {
    pub ready: &'static str,
    pub loading: &'static str,
    pub fetch_failed: &'static str,
    pub already_favorited: &'static str,
    pub no_name: &'static str,
    pub no_capital: &'static str,
    pub get_country: &'static str,
    pub add_to_favorites: &'static str,
    pub remove: &'static str,
    pub capital_label: &'static str,
    pub population_label: &'static str,
    pub unknown: &'static str,
    pub empty: &'static str,
    pub added_label: &'static str,
    added_prefix: &'static str,
    removed_prefix: &'static str,
    flag_prefix: &'static str,
    thousands_separator: char,
    datetime_format: &'static str,
}

impl Messages {
    /// Confirmation after a country was saved.
    pub fn added(&self, name: &str) -> String {
        format!("{}: {}", self.added_prefix, name)
    }

    /// Confirmation after a country was removed.
    pub fn removed(&self, name: &str) -> String {
        format!("{}: {}", self.removed_prefix, name)
    }

    /// Alt text for a flag image.
    pub fn flag_alt(&self, name: &str) -> String {
        format!("{} {}", self.flag_prefix, name)
    }
}

static RU: Messages = Messages {
    ready: "Готово. Нажмите \"Получить страну\".",
    loading: "Загрузка данных стран...",
    fetch_failed: "Не удалось загрузить страну. Проверьте соединение.",
    already_favorited: "Эта страна уже в избранном.",
    no_name: "Нет названия",
    no_capital: "Нет столицы",
    get_country: "Получить страну",
    add_to_favorites: "Добавить в избранное",
    remove: "Удалить",
    capital_label: "Столица",
    population_label: "Население",
    unknown: "неизвестно",
    empty: "Пусто",
    added_label: "Добавлено",
    added_prefix: "Добавлено в избранное",
    removed_prefix: "Удалено из избранного",
    flag_prefix: "Флаг",
    thousands_separator: '\u{a0}',
    datetime_format: "%d.%m.%Y, %H:%M:%S",
};

static EN: Messages = Messages {
    ready: "Ready. Press \"Get country\".",
    loading: "Loading country data...",
    fetch_failed: "Could not load a country. Check your connection.",
    already_favorited: "This country is already in favorites.",
    no_name: "No name",
    no_capital: "No capital",
    get_country: "Get country",
    add_to_favorites: "Add to favorites",
    remove: "Remove",
    capital_label: "Capital",
    population_label: "Population",
    unknown: "unknown",
    empty: "Empty",
    added_label: "Added",
    added_prefix: "Added to favorites",
    removed_prefix: "Removed from favorites",
    flag_prefix: "Flag of",
    thousands_separator: ',',
    datetime_format: "%-m/%-d/%Y, %-I:%M:%S %p",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    /// Group the digits of `n` in threes with the locale's separator.
    pub fn format_number(self, n: u64) -> String {
        let digits = n.to_string();
        let sep = self.messages().thousands_separator;
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(ch);
        }
        out
    }

    /// Render an ISO-8601 timestamp in local time.
    pub fn format_timestamp(self, iso: &str) -> String {
        self.format_timestamp_in(iso, &Local)
    }

    /// Render an ISO-8601 timestamp in the given zone. Unparseable input is
    /// returned verbatim.
    pub fn format_timestamp_in<Tz>(self, iso: &str, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match DateTime::parse_from_rfc3339(iso) {
            Ok(dt) => dt
                .with_timezone(tz)
                .format(self.messages().datetime_format)
                .to_string(),
            Err(_) => iso.to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ru => write!(f, "ru"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" => Ok(Locale::Ru),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}
