//! Size and theme tiers and the class tables they select.
//!
//! ## Usage
//!
//! Pick a size and theme per picker through its args, or provide a
//! [`PickerStyle`] for a whole subtree with
//! [`provide_context`](kalend_ui::provide_context).

use std::{fmt, str::FromStr};

use crate::error::CalendarError;

/// Size tier of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerSize {
    /// Compact.
    Sm,
    /// Regular.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl PickerSize {
    /// Classes for the calendar at this size.
    pub fn calendar(self) -> CalendarSizeClasses {
        match self {
            Self::Sm => CalendarSizeClasses {
                container: "p-2 text-sm",
                header: "text-sm mb-2",
                nav_button: "px-2 py-1 text-sm",
                day_button: "py-1 px-2 text-xs",
                day_name: "text-xs py-1",
            },
            Self::Md => CalendarSizeClasses {
                container: "p-4 text-base",
                header: "text-lg mb-4",
                nav_button: "px-3 py-1",
                day_button: "py-2 px-3",
                day_name: "text-sm py-2",
            },
            Self::Lg => CalendarSizeClasses {
                container: "p-6 text-lg",
                header: "text-xl mb-6",
                nav_button: "px-4 py-2 text-lg",
                day_button: "py-3 px-4 text-lg",
                day_name: "text-base py-3",
            },
        }
    }

    /// Classes for the time selector at this size.
    pub fn clock(self) -> ClockSizeClasses {
        match self {
            Self::Sm => ClockSizeClasses {
                container: "space-x-1",
                select: "px-1 py-0.5 text-xs",
                separator: "text-xs",
            },
            Self::Md => ClockSizeClasses {
                container: "space-x-2",
                select: "px-2 py-1",
                separator: "text-sm",
            },
            Self::Lg => ClockSizeClasses {
                container: "space-x-3",
                select: "px-3 py-2 text-lg",
                separator: "text-lg",
            },
        }
    }
}

impl fmt::Display for PickerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        })
    }
}

impl FromStr for PickerSize {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            _ => Err(CalendarError::UnknownSize(s.to_string())),
        }
    }
}

/// Theme tier of a picker.
///
/// [`PickerTheme::Custom`] turns every built-in visual class off and leaves
/// styling to the caller's overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerTheme {
    /// Light surfaces.
    #[default]
    Light,
    /// Dark surfaces.
    Dark,
    /// No built-in colors.
    Custom,
}

impl PickerTheme {
    /// Returns true for [`PickerTheme::Custom`].
    pub fn is_custom(self) -> bool {
        self == Self::Custom
    }

    /// Calendar classes for this theme.
    pub fn calendar(self) -> CalendarThemeClasses {
        match self {
            Self::Light => CalendarThemeClasses {
                container: "bg-white border-gray-300",
                header: "text-gray-800",
                nav_button: "text-gray-600 hover:text-gray-800 hover:bg-gray-100",
                day_button: "text-gray-700 hover:bg-blue-50",
                selected_day: "bg-blue-500 text-white",
                today: "bg-blue-100 text-blue-800",
                disabled_day: "text-gray-400",
                day_name: "text-gray-500",
            },
            Self::Dark => CalendarThemeClasses {
                container: "bg-gray-800 border-gray-600",
                header: "text-gray-100",
                nav_button: "text-gray-400 hover:text-gray-200 hover:bg-gray-700",
                day_button: "text-gray-300 hover:bg-gray-700",
                selected_day: "bg-blue-600 text-white",
                today: "bg-blue-900 text-blue-200",
                disabled_day: "text-gray-600",
                day_name: "text-gray-400",
            },
            Self::Custom => CalendarThemeClasses::default(),
        }
    }

    /// Select class for the time selector in this theme.
    pub fn clock_select(self) -> &'static str {
        match self {
            Self::Light => "border border-gray-300 rounded bg-white text-gray-700 disabled:opacity-50",
            Self::Dark => "border border-gray-600 rounded bg-gray-800 text-gray-300 disabled:opacity-50",
            Self::Custom => "",
        }
    }
}

impl fmt::Display for PickerTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Custom => "custom",
        })
    }
}

impl FromStr for PickerTheme {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "custom" => Ok(Self::Custom),
            _ => Err(CalendarError::UnknownTheme(s.to_string())),
        }
    }
}

/// Size-dependent calendar classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSizeClasses {
    /// Outer container.
    pub container: &'static str,
    /// Month heading.
    pub header: &'static str,
    /// Previous/next buttons.
    pub nav_button: &'static str,
    /// Day cells.
    pub day_button: &'static str,
    /// Weekday column headers.
    pub day_name: &'static str,
}

/// Theme-dependent calendar classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarThemeClasses {
    /// Outer container.
    pub container: &'static str,
    /// Month heading.
    pub header: &'static str,
    /// Previous/next buttons.
    pub nav_button: &'static str,
    /// Plain day cells.
    pub day_button: &'static str,
    /// The selected day.
    pub selected_day: &'static str,
    /// The current day.
    pub today: &'static str,
    /// Days outside the bounds, and blank cells.
    pub disabled_day: &'static str,
    /// Weekday column headers.
    pub day_name: &'static str,
}

/// Size-dependent time selector classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSizeClasses {
    /// Row container.
    pub container: &'static str,
    /// Each select.
    pub select: &'static str,
    /// The `:` separator.
    pub separator: &'static str,
}

/// Ambient size and theme for pickers that do not set their own.
///
/// # Examples
///
/// ```
/// use kalend_components::theme::{PickerSize, PickerStyle, PickerTheme};
///
/// let style = PickerStyle::default();
/// assert_eq!(style.size, PickerSize::Md);
/// assert_eq!(style.theme, PickerTheme::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerStyle {
    /// Default size tier.
    pub size: PickerSize,
    /// Default theme tier.
    pub theme: PickerTheme,
}

impl PickerStyle {
    /// Creates a style.
    pub fn new(size: PickerSize, theme: PickerTheme) -> Self {
        Self { size, theme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("LG".parse::<PickerSize>(), Ok(PickerSize::Lg));
        assert_eq!(" dark ".parse::<PickerTheme>(), Ok(PickerTheme::Dark));
        assert_eq!(
            "xl".parse::<PickerSize>(),
            Err(CalendarError::UnknownSize("xl".to_string()))
        );
        assert!("neon".parse::<PickerTheme>().is_err());
        for size in [PickerSize::Sm, PickerSize::Md, PickerSize::Lg] {
            assert_eq!(size.to_string().parse::<PickerSize>(), Ok(size));
        }
    }

    #[test]
    fn custom_theme_has_no_built_in_classes() {
        assert_eq!(PickerTheme::Custom.calendar(), CalendarThemeClasses::default());
        assert_eq!(PickerTheme::Custom.clock_select(), "");
        assert!(PickerTheme::Custom.is_custom());
        assert!(!PickerTheme::Dark.is_custom());
    }
}
