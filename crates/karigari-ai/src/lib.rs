//! AI enhancement capabilities for Karigari Crafts.
//!
//! Each capability is a trait so the marketplace depends on an interface,
//! not a vendor: production wires in cloud speech/vision/LLM backends,
//! tests and demos wire in the [`mock`] implementations, which return
//! canned payloads behind a configurable artificial delay.

pub mod error;
pub mod mock;
pub mod types;

pub use error::AiError;
pub use types::{CulturalAnalysis, Enhancement, Transcript};

use async_trait::async_trait;
use karigari_commerce::catalog::CraftCategory;
use karigari_commerce::ids::{ProductId, UserId};

/// Converts recorded artisan narration to text.
#[async_trait]
pub trait VoiceTranscriber: Send + Sync {
    /// Transcribe an audio recording.
    async fn transcribe(&self, audio: &[u8]) -> Result<Transcript, AiError>;
}

/// Generates marketing content from an artisan's raw description.
#[async_trait]
pub trait ContentEnhancer: Send + Sync {
    /// Enhance a product description into listing copy.
    async fn enhance(
        &self,
        description: &str,
        category: CraftCategory,
        artisan_location: &str,
    ) -> Result<Enhancement, AiError>;
}

/// Scores a craft image for cultural authenticity.
#[async_trait]
pub trait CulturalAnalyzer: Send + Sync {
    /// Analyze a craft image.
    async fn analyze(&self, image: &[u8]) -> Result<CulturalAnalysis, AiError>;
}

/// Produces personalized product recommendations.
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Recommend products for a user, excluding already-viewed ones.
    async fn recommend(
        &self,
        user: &UserId,
        viewed: &[ProductId],
        preferences: &[String],
    ) -> Result<Vec<ProductId>, AiError>;
}
