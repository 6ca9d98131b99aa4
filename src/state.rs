//! Enumerated UI state, one value per navigation group. Exactly one page and
//! one tab are active at a time; the active element is derived from these
//! enums instead of toggling CSS classes by hand.

/// Top-level pages reachable from the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Earn,
    Balance,
    Reviews,
    Help,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Главная",
            Page::Earn => "Заработок",
            Page::Balance => "Баланс",
            Page::Reviews => "Отзывы",
            Page::Help => "Помощь",
        }
    }
}

/// Tabs inside the earn page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarnTab {
    Offers,
    Tasks,
}

/// Persisted color theme. Stored under the `theme` local-storage key as the
/// literal strings "light" / "dark".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than the exact "dark" literal reads as light, so a
    /// corrupted value falls back rather than erroring.
    pub fn parse(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Color scheme reported by the host chrome. Distinct from [`Theme`]:
/// the host scheme is only the initial hint, the persisted theme wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn parse(value: &str) -> Self {
        if value == "dark" {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn as_theme(&self) -> Theme {
        match self {
            ColorScheme::Light => Theme::Light,
            ColorScheme::Dark => Theme::Dark,
        }
    }
}

/// Sort orders offered by the reviews page select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSort {
    #[default]
    Newest,
    Highest,
    Lowest,
}

impl ReviewSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSort::Newest => "newest",
            ReviewSort::Highest => "highest",
            ReviewSort::Lowest => "lowest",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "highest" => ReviewSort::Highest,
            "lowest" => ReviewSort::Lowest,
            _ => ReviewSort::Newest,
        }
    }
}

/// Destination kind in the withdrawal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WithdrawMethod {
    #[default]
    Card,
    YooMoney,
    Qiwi,
}

impl WithdrawMethod {
    pub fn label(&self) -> &'static str {
        match self {
            WithdrawMethod::Card => "Банковская карта",
            WithdrawMethod::YooMoney => "ЮMoney",
            WithdrawMethod::Qiwi => "QIWI Кошелек",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_str() {
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::parse(Theme::Light.as_str()), Theme::Light);
    }

    #[test]
    fn unknown_theme_value_reads_as_light() {
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn review_sort_parse_defaults_to_newest() {
        assert_eq!(ReviewSort::parse("highest"), ReviewSort::Highest);
        assert_eq!(ReviewSort::parse("lowest"), ReviewSort::Lowest);
        assert_eq!(ReviewSort::parse("whatever"), ReviewSort::Newest);
    }
}
