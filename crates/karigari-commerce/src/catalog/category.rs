//! Craft category classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Craft categories carried by the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CraftCategory {
    /// Woven and embroidered textiles (sarees, shawls).
    Textiles,
    /// Terracotta and ceramic work.
    Pottery,
    /// Silver and traditional ornament work.
    Jewelry,
    /// Folk painting and canvas art.
    Art,
    /// Carved wooden craft.
    Woodwork,
    /// Forged and engraved metal craft.
    Metalwork,
}

impl CraftCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CraftCategory::Textiles => "textiles",
            CraftCategory::Pottery => "pottery",
            CraftCategory::Jewelry => "jewelry",
            CraftCategory::Art => "art",
            CraftCategory::Woodwork => "woodwork",
            CraftCategory::Metalwork => "metalwork",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CraftCategory::Textiles => "Textiles",
            CraftCategory::Pottery => "Pottery",
            CraftCategory::Jewelry => "Jewelry",
            CraftCategory::Art => "Art",
            CraftCategory::Woodwork => "Woodwork",
            CraftCategory::Metalwork => "Metalwork",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "textiles" => Some(CraftCategory::Textiles),
            "pottery" => Some(CraftCategory::Pottery),
            "jewelry" => Some(CraftCategory::Jewelry),
            "art" => Some(CraftCategory::Art),
            "woodwork" => Some(CraftCategory::Woodwork),
            "metalwork" => Some(CraftCategory::Metalwork),
            _ => None,
        }
    }

    /// All categories, in the order the marketplace lists them.
    pub fn all() -> [CraftCategory; 6] {
        [
            CraftCategory::Textiles,
            CraftCategory::Pottery,
            CraftCategory::Jewelry,
            CraftCategory::Art,
            CraftCategory::Woodwork,
            CraftCategory::Metalwork,
        ]
    }
}

impl fmt::Display for CraftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in CraftCategory::all() {
            assert_eq!(CraftCategory::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_from_mixed_case() {
        assert_eq!(
            CraftCategory::from_str("Textiles"),
            Some(CraftCategory::Textiles)
        );
        assert_eq!(CraftCategory::from_str("basketry"), None);
    }
}
