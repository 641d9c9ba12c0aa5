//! CalorieOrder - How a calorie listing should be arranged

use super::recipe::Recipe;

/// Ordering requested for a calorie listing.
///
/// Parsed from the public tokens `"ascendent"` and `"descendent"`.
/// Anything else means "keep collection order".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieOrder {
    Ascending,
    Descending,
    Unsorted,
}

impl CalorieOrder {
    pub const ASCENDING_TOKEN: &'static str = "ascendent";
    pub const DESCENDING_TOKEN: &'static str = "descendent";

    /// Never fails; unknown tokens map to `Unsorted`.
    pub fn from_token(token: &str) -> Self {
        match token {
            Self::ASCENDING_TOKEN => Self::Ascending,
            Self::DESCENDING_TOKEN => Self::Descending,
            _ => Self::Unsorted,
        }
    }

    /// Sort in place. Stable, so ties keep their relative order.
    pub fn arrange(&self, recipes: &mut [Recipe]) {
        match self {
            Self::Ascending => recipes.sort_by_key(|r| r.calories_per_serving()),
            Self::Descending => {
                recipes.sort_by(|a, b| b.calories_per_serving().cmp(&a.calories_per_serving()))
            }
            Self::Unsorted => {}
        }
    }
}

impl core::fmt::Display for CalorieOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ascending => write!(f, "{}", Self::ASCENDING_TOKEN),
            Self::Descending => write!(f, "{}", Self::DESCENDING_TOKEN),
            Self::Unsorted => write!(f, "unsorted"),
        }
    }
}
