//! Class-name composition.

use std::fmt;

use smallvec::SmallVec;

/// Accumulates class-name fragments and joins the non-empty ones.
///
/// # Examples
///
/// ```
/// use kalend_ui::ClassList;
///
/// let class = ClassList::new()
///     .push("rounded")
///     .push("")
///     .push_if(true, " p-4 ")
///     .push_if(false, "hidden")
///     .build();
/// assert_eq!(class, "rounded p-4");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassList<'a> {
    parts: SmallVec<[&'a str; 8]>,
}

impl<'a> ClassList<'a> {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment; blank fragments are ignored.
    pub fn push(mut self, fragment: &'a str) -> Self {
        let fragment = fragment.trim();
        if !fragment.is_empty() {
            self.parts.push(fragment);
        }
        self
    }

    /// Appends a fragment only when `condition` holds.
    pub fn push_if(self, condition: bool, fragment: &'a str) -> Self {
        if condition { self.push(fragment) } else { self }
    }

    /// Returns true when no fragment has been kept.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Joins the fragments with single spaces.
    pub fn build(&self) -> String {
        self.parts.join(" ")
    }
}

impl fmt::Display for ClassList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
