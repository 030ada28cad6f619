//! Result payloads for the AI capabilities.

use serde::{Deserialize, Serialize};

/// A voice-to-text transcription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    /// Transcribed text.
    pub text: String,
    /// Transcription confidence (0.0 - 1.0).
    pub confidence: f64,
}

/// Generated marketing content for a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enhancement {
    /// Expanded product description.
    pub enhanced_description: String,
    /// Long-form heritage story.
    pub heritage_story: String,
    /// Short marketing copy.
    pub marketing_copy: String,
    /// Suggested discovery tags.
    pub suggested_tags: Vec<String>,
}

/// Cultural heritage analysis of a craft image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CulturalAnalysis {
    /// Authenticity score (0-100).
    pub authenticity_score: u8,
    /// Historical timeline entries, oldest first.
    pub cultural_timeline: Vec<String>,
    /// Traditional techniques identified.
    pub traditional_techniques: Vec<String>,
    /// Region the craft style originates from.
    pub regional_origin: String,
    /// Why the craft matters culturally.
    pub heritage_significance: String,
}
