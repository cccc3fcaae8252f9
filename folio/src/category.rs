use core::fmt;
use core::str::FromStr;

use alloc::string::String;

/// A project grouping on the page.
///
/// The set is closed: every category has exactly one section, one scrollable list and one
/// indicator control in the document contract (any of which may be absent at runtime).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    #[default]
    Frontend,
    Backend,
    Data,
}

impl Category {
    /// All categories, in page order.
    pub const ALL: [Category; 3] = [Category::Frontend, Category::Backend, Category::Data];

    /// The stable name used for element ids and the indicator attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an indicator attribute does not name a known category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown project category `{name}`")]
pub struct ParseCategoryError {
    pub name: String,
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError { name: s.into() })
    }
}
