//! Mock implementations of the AI capabilities.
//!
//! These return canned payloads after an artificial delay that imitates a
//! real network call. Payload selection is a round-robin over the canned
//! set, so repeated calls cycle deterministically. Tests construct mocks
//! with `Duration::ZERO`.

use crate::error::AiError;
use crate::types::{CulturalAnalysis, Enhancement, Transcript};
use crate::{ContentEnhancer, CulturalAnalyzer, Recommender, VoiceTranscriber};
use async_trait::async_trait;
use karigari_commerce::catalog::CraftCategory;
use karigari_commerce::ids::{ProductId, UserId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Default artificial latencies, matching what the real services feel
/// like.
pub const TRANSCRIBE_DELAY: Duration = Duration::from_secs(2);
pub const ENHANCE_DELAY: Duration = Duration::from_secs(3);
pub const ANALYZE_DELAY: Duration = Duration::from_secs(4);
pub const RECOMMEND_DELAY: Duration = Duration::from_secs(1);

/// Mock speech-to-text service.
#[derive(Debug)]
pub struct MockTranscriber {
    delay: Duration,
    cursor: AtomicUsize,
}

impl MockTranscriber {
    pub fn new() -> Self {
        Self::with_delay(TRANSCRIBE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl Default for MockTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoiceTranscriber for MockTranscriber {
    async fn transcribe(&self, audio: &[u8]) -> Result<Transcript, AiError> {
        if audio.is_empty() {
            return Err(AiError::InvalidInput("empty audio recording".to_string()));
        }
        tracing::debug!(bytes = audio.len(), "mock transcription");
        tokio::time::sleep(self.delay).await;

        let canned = [
            (
                "This beautiful handwoven saree represents centuries of traditional \
                 craftsmanship from Varanasi. Made with pure silk threads and intricate \
                 gold zari work, each piece takes 3-4 weeks to complete using \
                 traditional pit looms. The paisley motifs symbolize fertility and \
                 abundance in Indian culture.",
                0.95,
            ),
            (
                "This terracotta vase is hand-thrown using clay from the banks of the \
                 Ganges river. The traditional firing techniques have been passed down \
                 through five generations of our family. Each piece is unique and \
                 reflects the ancient pottery traditions of Khurja.",
                0.92,
            ),
            (
                "These silver jhumka earrings showcase the intricate metalwork \
                 traditions of Rajasthan. Using techniques perfected by royal court \
                 jewelers, each piece is hand-forged and features traditional motifs \
                 that have adorned Indian women for centuries.",
                0.97,
            ),
        ];
        let (text, confidence) = canned[self.cursor.fetch_add(1, Ordering::Relaxed) % canned.len()];

        Ok(Transcript {
            text: text.to_string(),
            confidence,
        })
    }
}

/// Mock listing-copy generator.
#[derive(Debug)]
pub struct MockEnhancer {
    delay: Duration,
}

impl MockEnhancer {
    pub fn new() -> Self {
        Self::with_delay(ENHANCE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentEnhancer for MockEnhancer {
    async fn enhance(
        &self,
        description: &str,
        category: CraftCategory,
        artisan_location: &str,
    ) -> Result<Enhancement, AiError> {
        if description.trim().is_empty() {
            return Err(AiError::InvalidInput("empty description".to_string()));
        }
        tracing::debug!(category = category.as_str(), "mock enhancement");
        tokio::time::sleep(self.delay).await;

        let craft = category.display_name().to_lowercase();
        let enhanced_description = format!(
            "{description} This exceptional piece represents the pinnacle of {craft} \
             craftsmanship, showcasing techniques that have been refined over \
             generations. The intricate details and cultural significance make this \
             not just a product, but a piece of living heritage that connects modern \
             consumers with India's rich artistic traditions."
        );
        let heritage_story = format!(
            "The cultural significance of this {craft} extends far beyond its \
             aesthetic appeal. Rooted in the traditions of {artisan_location}, this \
             craft form has been a cornerstone of local culture for centuries. Each \
             technique used in its creation has been passed down through generations, \
             preserving not just the method, but the stories, beliefs, and cultural \
             values embedded within. This piece serves as a bridge between past and \
             present, carrying forward the legacy of master craftspeople who have \
             dedicated their lives to preserving these ancient arts."
        );
        let marketing_copy = format!(
            "Discover the authentic beauty of traditional Indian {craft}. Handcrafted \
             with passion and precision, this piece embodies centuries of cultural \
             heritage. Perfect for those who appreciate genuine artistry and want to \
             support traditional craftspeople. Each purchase helps preserve ancient \
             techniques and supports artisan communities."
        );
        let suggested_tags = vec![
            "Handcrafted Heritage".to_string(),
            "Traditional Artistry".to_string(),
            "Cultural Authenticity".to_string(),
            format!("{artisan_location} Craft"),
            "Artisan Made".to_string(),
            "Heritage Collection".to_string(),
        ];

        Ok(Enhancement {
            enhanced_description,
            heritage_story,
            marketing_copy,
            suggested_tags,
        })
    }
}

/// Mock image-based heritage analyzer.
#[derive(Debug)]
pub struct MockAnalyzer {
    delay: Duration,
    cursor: AtomicUsize,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self::with_delay(ANALYZE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CulturalAnalyzer for MockAnalyzer {
    async fn analyze(&self, image: &[u8]) -> Result<CulturalAnalysis, AiError> {
        if image.is_empty() {
            return Err(AiError::InvalidInput("empty image".to_string()));
        }
        tracing::debug!(bytes = image.len(), "mock cultural analysis");
        tokio::time::sleep(self.delay).await;

        let canned = [
            CulturalAnalysis {
                authenticity_score: 95,
                cultural_timeline: vec![
                    "Mughal Era (1526-1857): Introduction of Persian motifs".to_string(),
                    "Colonial Period (1858-1947): Adaptation of traditional techniques"
                        .to_string(),
                    "Modern Era (1947-present): Revival and preservation efforts".to_string(),
                ],
                traditional_techniques: vec![
                    "Pit Loom Weaving".to_string(),
                    "Gold Zari Work".to_string(),
                    "Natural Dyeing".to_string(),
                    "Hand Spinning".to_string(),
                ],
                regional_origin: "Varanasi, Uttar Pradesh".to_string(),
                heritage_significance: "This craft represents the synthesis of Persian and \
                 Indian artistic traditions, developed under Mughal patronage and refined \
                 over centuries by master weavers."
                    .to_string(),
            },
            CulturalAnalysis {
                authenticity_score: 92,
                cultural_timeline: vec![
                    "Ancient Period (3000 BCE): Early pottery traditions".to_string(),
                    "Medieval Period (1000-1500 CE): Refinement of techniques".to_string(),
                    "Modern Era (1500-present): Continuous tradition".to_string(),
                ],
                traditional_techniques: vec![
                    "Hand Throwing".to_string(),
                    "Natural Clay Preparation".to_string(),
                    "Traditional Firing".to_string(),
                    "Glazing".to_string(),
                ],
                regional_origin: "Khurja, Uttar Pradesh".to_string(),
                heritage_significance: "Represents one of India's oldest continuous craft \
                 traditions, with techniques virtually unchanged for over 2000 years."
                    .to_string(),
            },
            CulturalAnalysis {
                authenticity_score: 98,
                cultural_timeline: vec![
                    "Rajput Era (6th-12th century): Development of royal jewelry traditions"
                        .to_string(),
                    "Mughal Period (1526-1857): Fusion of Islamic and Hindu designs"
                        .to_string(),
                    "Colonial Era (1858-1947): Adaptation and commercialization".to_string(),
                    "Modern Era (1947-present): Revival and global recognition".to_string(),
                ],
                traditional_techniques: vec![
                    "Hand Forging".to_string(),
                    "Repoussé Work".to_string(),
                    "Granulation".to_string(),
                    "Filigree".to_string(),
                ],
                regional_origin: "Jaipur, Rajasthan".to_string(),
                heritage_significance: "Embodies the sophisticated metalworking traditions \
                 of Rajasthani royal courts, representing centuries of artistic evolution."
                    .to_string(),
            },
        ];

        Ok(canned[self.cursor.fetch_add(1, Ordering::Relaxed) % canned.len()].clone())
    }
}

/// Mock recommendation engine over the demo catalog ids.
#[derive(Debug)]
pub struct MockRecommender {
    delay: Duration,
}

impl MockRecommender {
    pub fn new() -> Self {
        Self::with_delay(RECOMMEND_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockRecommender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Recommender for MockRecommender {
    async fn recommend(
        &self,
        user: &UserId,
        viewed: &[ProductId],
        _preferences: &[String],
    ) -> Result<Vec<ProductId>, AiError> {
        tracing::debug!(user = %user, viewed = viewed.len(), "mock recommendations");
        tokio::time::sleep(self.delay).await;

        let recommendations = ["1", "2", "3", "4", "5", "6"]
            .iter()
            .map(|id| ProductId::new(*id))
            .filter(|id| !viewed.contains(id))
            .take(4)
            .collect();

        Ok(recommendations)
    }
}
