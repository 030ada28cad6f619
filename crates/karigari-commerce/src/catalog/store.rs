//! In-memory product catalog.
//!
//! The marketplace and the artisan dashboard both operate on this
//! collection; persistence lives behind an external service boundary and
//! is out of scope here.

use crate::catalog::{ArtisanRef, CraftCategory, Product};
use crate::error::MarketError;
use crate::ids::ProductId;
use crate::money::Rupees;

/// The set of products currently listed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no listings.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All listings, in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a listing by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Add a listing, returning its id.
    pub fn add(&mut self, product: Product) -> ProductId {
        let id = product.id.clone();
        self.products.push(product);
        id
    }

    /// Replace a listing's mutable fields.
    pub fn update(
        &mut self,
        id: &ProductId,
        apply: impl FnOnce(&mut Product),
    ) -> Result<(), MarketError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| MarketError::ProductNotFound(id.to_string()))?;
        apply(product);
        product.updated_at = current_timestamp();
        Ok(())
    }

    /// Remove a listing. Returns whether it existed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.products.len();
        self.products.retain(|p| &p.id != id);
        self.products.len() < len_before
    }

    /// Toggle the favorite flag on a listing.
    pub fn toggle_favorite(&mut self, id: &ProductId) -> Result<bool, MarketError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| MarketError::ProductNotFound(id.to_string()))?;
        Ok(product.toggle_favorite())
    }

    /// Listings by a given artisan, matched on the denormalized name.
    pub fn by_artisan(&self, artisan_name: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.artisan.name == artisan_name)
            .collect()
    }

    /// Seed catalog with the demo listings used across the marketplace.
    pub fn demo() -> Self {
        let mut catalog = Catalog::new();

        catalog.add(demo_product(
            "1",
            "Handwoven Banarasi Silk Saree",
            CraftCategory::Textiles,
            15000,
            "/indian-artisan-weaving-traditional-textiles.jpg",
            ("Priya Sharma", "Varanasi, UP"),
            "This exquisite Banarasi saree represents 200 years of family tradition, \
             woven with pure silk and gold zari using ancient pit loom techniques.",
            95,
            &["Traditional Weaving", "Silk Craft", "Varanasi Heritage"],
            4.8,
            127,
            false,
        ));
        catalog.add(demo_product(
            "2",
            "Traditional Terracotta Vase",
            CraftCategory::Pottery,
            2500,
            "/indian-pottery-artisan-creating-clay-vessels.jpg",
            ("Rajesh Kumar", "Khurja, UP"),
            "Hand-thrown terracotta vase using clay from the banks of Ganges, fired \
             in traditional kilns passed down through generations.",
            92,
            &["Terracotta Art", "Khurja Pottery", "River Clay"],
            4.6,
            89,
            true,
        ));
        catalog.add(demo_product(
            "3",
            "Silver Jhumka Earrings",
            CraftCategory::Jewelry,
            3200,
            "/indian-jewelry-artisan-crafting-silver-ornaments.jpg",
            ("Meera Devi", "Jaipur, RJ"),
            "Intricate Rajasthani silver jhumkas featuring traditional motifs, \
             crafted using age-old techniques of the royal jewelers.",
            98,
            &["Rajasthani Jewelry", "Silver Craft", "Royal Heritage"],
            4.9,
            156,
            false,
        ));
        catalog.add(demo_product(
            "4",
            "Madhubani Painting",
            CraftCategory::Art,
            4500,
            "/madhubani-painting-traditional-indian-art.jpg",
            ("Sunita Jha", "Madhubani, BR"),
            "Authentic Madhubani painting depicting ancient folklore, created using \
             natural pigments and traditional brush techniques.",
            96,
            &["Madhubani Art", "Folk Painting", "Bihar Heritage"],
            4.7,
            73,
            false,
        ));
        catalog.add(demo_product(
            "5",
            "Kashmiri Pashmina Shawl",
            CraftCategory::Textiles,
            8500,
            "/kashmiri-pashmina-shawl-traditional-weaving.jpg",
            ("Abdul Rahman", "Srinagar, JK"),
            "Pure Pashmina shawl hand-woven from the finest Changthangi goat wool, \
             featuring traditional Kashmiri patterns.",
            97,
            &["Pashmina Craft", "Kashmir Weaving", "Himalayan Heritage"],
            4.8,
            94,
            true,
        ));
        catalog.add(demo_product(
            "6",
            "Wooden Elephant Sculpture",
            CraftCategory::Woodwork,
            1800,
            "/wooden-elephant-sculpture-indian-handicraft.jpg",
            ("Ravi Shankar", "Mysore, KA"),
            "Hand-carved rosewood elephant showcasing the intricate woodworking \
             traditions of Mysore's master craftsmen.",
            89,
            &["Wood Carving", "Mysore Craft", "Rosewood Art"],
            4.5,
            62,
            false,
        ));

        catalog
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[allow(clippy::too_many_arguments)]
fn demo_product(
    id: &str,
    name: &str,
    category: CraftCategory,
    price: i64,
    image: &str,
    artisan: (&str, &str),
    story: &str,
    authenticity_score: u8,
    heritage_tags: &[&str],
    rating: f64,
    reviews: u32,
    is_favorite: bool,
) -> Product {
    let mut product = Product::new(
        name,
        category,
        Rupees::new(price),
        ArtisanRef::new(artisan.0, artisan.1),
    );
    product.id = ProductId::new(id);
    product.image = image.to_string();
    product.story = story.to_string();
    product.authenticity_score = authenticity_score;
    product.heritage_tags = heritage_tags.iter().map(|t| t.to_string()).collect();
    product.rating = rating;
    product.reviews = reviews;
    product.is_favorite = is_favorite;
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 6);
        let saree = catalog.get(&ProductId::new("1")).unwrap();
        assert_eq!(saree.price, Rupees::new(15000));
        assert_eq!(saree.artisan.location, "Varanasi, UP");
    }

    #[test]
    fn test_crud_round_trip() {
        let mut catalog = Catalog::new();
        let id = catalog.add(Product::new(
            "Brass Diya",
            CraftCategory::Metalwork,
            Rupees::new(650),
            ArtisanRef::new("Lakshmi Bai", "Moradabad, UP"),
        ));

        catalog
            .update(&id, |p| p.price = Rupees::new(700))
            .unwrap();
        assert_eq!(catalog.get(&id).unwrap().price, Rupees::new(700));

        assert!(catalog.remove(&id));
        assert!(!catalog.remove(&id));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_update_missing_product() {
        let mut catalog = Catalog::new();
        let err = catalog
            .update(&ProductId::new("missing"), |_| {})
            .unwrap_err();
        assert!(matches!(err, MarketError::ProductNotFound(_)));
    }

    #[test]
    fn test_by_artisan() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.by_artisan("Priya Sharma").len(), 1);
        assert!(catalog.by_artisan("Nobody").is_empty());
    }
}
