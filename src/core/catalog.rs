//! # Catalog
//!
//! The compiled-in plant catalog. Two ordered collections, both `'static`:
//! theme cards for the "Browse themes" row and flowers for the garden list.
//!
//! Order is presentation order. Titles are unique within each collection and
//! double as the key for selection state on the Home screen.

/// Opaque identifier for an image asset. Resolving it is the renderer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetRef(&'static str);

impl AssetRef {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn id(&self) -> &'static str {
        self.0
    }
}

/// A single display record: a title and the image shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub title: &'static str,
    pub image: AssetRef,
}

impl CatalogItem {
    const fn new(title: &'static str, image: &'static str) -> Self {
        Self {
            title,
            image: AssetRef::new(image),
        }
    }
}

static THEMES: [CatalogItem; 5] = [
    CatalogItem::new("Desert chic", "desert_chic"),
    CatalogItem::new("Tiny terrariums", "tiny_terrariums"),
    CatalogItem::new("Jungle vibes", "jungle_vibes"),
    CatalogItem::new("Easy care", "easy_care"),
    CatalogItem::new("Statements", "statements"),
];

static FLOWERS: [CatalogItem; 6] = [
    CatalogItem::new("Monstera", "monstera"),
    CatalogItem::new("Aglaonema", "aglaonema"),
    CatalogItem::new("Peace lily", "peace_lily"),
    CatalogItem::new("Fiddle leaf tree", "fiddle_leaf_tree"),
    CatalogItem::new("Snake plant", "snake_plant"),
    CatalogItem::new("Pothos", "pothos"),
];

/// Both catalog collections. Cheap to copy: it only holds static slices.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub themes: &'static [CatalogItem],
    pub flowers: &'static [CatalogItem],
}

impl Catalog {
    /// Look up a flower by its exact title.
    pub fn flower(&self, title: &str) -> Option<&'static CatalogItem> {
        self.flowers.iter().find(|item| item.title == title)
    }

    pub fn is_flower(&self, title: &str) -> bool {
        self.flower(title).is_some()
    }
}

/// Returns the catalog. Always the same five themes and six flowers.
pub fn load_catalog() -> Catalog {
    Catalog {
        themes: &THEMES,
        flowers: &FLOWERS,
    }
}
