//! Caller-supplied class overrides keyed by picker sub-element.

use std::{fmt, str::FromStr};

use smallvec::SmallVec;

use crate::error::CalendarError;

/// A styled sub-element of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerElement {
    /// Outer container of a picker.
    Container,
    /// Calendar month heading.
    Header,
    /// Calendar previous/next buttons.
    NavButton,
    /// Plain calendar day cells.
    DayButton,
    /// The selected day cell.
    SelectedDay,
    /// The current day cell.
    Today,
    /// Disabled and blank day cells.
    DisabledDay,
    /// Weekday column headers.
    DayName,
    /// Time selector selects.
    Select,
    /// Time selector `:` separator.
    Separator,
}

impl PickerElement {
    /// Every element, in declaration order.
    pub const ALL: [PickerElement; 10] = [
        Self::Container,
        Self::Header,
        Self::NavButton,
        Self::DayButton,
        Self::SelectedDay,
        Self::Today,
        Self::DisabledDay,
        Self::DayName,
        Self::Select,
        Self::Separator,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Header => "header",
            Self::NavButton => "nav-button",
            Self::DayButton => "day-button",
            Self::SelectedDay => "selected-day",
            Self::Today => "today",
            Self::DisabledDay => "disabled-day",
            Self::DayName => "day-name",
            Self::Select => "select",
            Self::Separator => "separator",
        }
    }
}

impl fmt::Display for PickerElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PickerElement {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|element| element.name() == wanted)
            .ok_or_else(|| CalendarError::InvalidOption {
                field: "element",
                value: s.to_string(),
            })
    }
}

/// Extra classes appended to the built-in classes of each sub-element.
///
/// # Examples
///
/// ```
/// use kalend_components::style::{ClassOverrides, PickerElement};
///
/// let overrides = ClassOverrides::new()
///     .with(PickerElement::SelectedDay, "ring-2")
///     .with(PickerElement::SelectedDay, "ring-4");
/// assert_eq!(overrides.get(PickerElement::SelectedDay), "ring-4");
/// assert_eq!(overrides.get(PickerElement::Header), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassOverrides {
    entries: SmallVec<[(PickerElement, String); 4]>,
}

impl ClassOverrides {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with `class` set for `element`.
    pub fn with(mut self, element: PickerElement, class: impl Into<String>) -> Self {
        self.set(element, class);
        self
    }

    /// Sets the class for `element`, replacing any previous one.
    pub fn set(&mut self, element: PickerElement, class: impl Into<String>) {
        let class = class.into();
        match self.entries.iter_mut().find(|(key, _)| *key == element) {
            Some((_, existing)) => *existing = class,
            None => self.entries.push((element, class)),
        }
    }

    /// The class for `element`, or an empty string.
    pub fn get(&self, element: PickerElement) -> &str {
        self.entries
            .iter()
            .find(|(key, _)| *key == element)
            .map_or("", |(_, class)| class.as_str())
    }

    /// Returns true when no override is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(PickerElement, S)> for ClassOverrides {
    fn from_iter<I: IntoIterator<Item = (PickerElement, S)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (element, class) in iter {
            overrides.set(element, class);
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_names_round_trip() {
        for element in PickerElement::ALL {
            assert_eq!(element.to_string().parse::<PickerElement>(), Ok(element));
        }
        assert!("footer".parse::<PickerElement>().is_err());
    }

    #[test]
    fn collecting_keeps_the_last_class_per_element() {
        let overrides: ClassOverrides = [
            (PickerElement::Select, "a"),
            (PickerElement::Separator, "b"),
            (PickerElement::Select, "c"),
        ]
        .into_iter()
        .collect();
        assert_eq!(overrides.get(PickerElement::Select), "c");
        assert_eq!(overrides.get(PickerElement::Separator), "b");
        assert!(!overrides.is_empty());
        assert!(ClassOverrides::new().is_empty());
    }
}
