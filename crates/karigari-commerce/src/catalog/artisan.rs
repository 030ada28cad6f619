//! Artisan profile types.

use crate::ids::ArtisanId;
use serde::{Deserialize, Serialize};

/// Denormalized seller snapshot attached to a product.
///
/// This is the view of an artisan captured at listing time, not a live
/// reference: cart line items and orders carry it unchanged even if the
/// profile is later edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtisanRef {
    /// Display name.
    pub name: String,
    /// Home town and state (e.g., "Varanasi, UP").
    pub location: String,
}

impl ArtisanRef {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// A full artisan profile as shown on the artisans directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtisanProfile {
    /// Unique artisan identifier.
    pub id: ArtisanId,
    /// Display name.
    pub name: String,
    /// Home town and state.
    pub location: String,
    /// Average customer rating (0.0 - 5.0).
    pub rating: f64,
    /// Profile image reference (may be a placeholder).
    pub image: String,
}

impl ArtisanProfile {
    /// Create a new profile with no rating history.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: ArtisanId::generate(),
            name: name.into(),
            location: location.into(),
            rating: 0.0,
            image: "/placeholder.svg".to_string(),
        }
    }

    /// The snapshot attached to this artisan's listings.
    pub fn to_ref(&self) -> ArtisanRef {
        ArtisanRef::new(self.name.clone(), self.location.clone())
    }
}
