use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use thiserror::Error;

use crate::core::filters::{apply_filters, evaluate_place};
use crate::models::{Coordinate, Evaluation, Facets, FilterSet, Place};

/// Errors that can occur while building a place catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate place id: {0}")]
    DuplicateId(String),
}

/// In-memory, read-only source of candidate places
#[derive(Debug, Clone)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(places.len());
        for place in &places {
            if !seen.insert(place.id.as_str()) {
                return Err(CatalogError::DuplicateId(place.id.clone()));
            }
        }

        Ok(Self { places })
    }

    /// Catalog of built-in demo venues around New York
    pub fn seeded() -> Self {
        Self {
            places: seed_places(),
        }
    }

    /// Load a catalog from a JSON array of places
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let places: Vec<Place> = serde_json::from_str(&raw)?;
        tracing::debug!("Loaded {} places from {}", places.len(), path.as_ref().display());
        Self::new(places)
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// List places, optionally filtered
    ///
    /// Without filters every place is returned in catalog order. With filters only passing
    /// places are returned, best rated first (unrated counts as 0, ties keep catalog order).
    pub fn list(&self, filters: Option<&FilterSet>) -> Vec<&Place> {
        let Some(filters) = filters else {
            return self.places.iter().collect();
        };

        let mut places: Vec<&Place> = apply_filters(&self.places, filters)
            .into_iter()
            .map(|evaluation| evaluation.place)
            .collect();

        places.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .partial_cmp(&a.rating.unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        places
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }

    /// Evaluate every place, passing or not
    pub fn evaluate(&self, filters: &FilterSet) -> Vec<Evaluation<'_>> {
        self.places
            .iter()
            .map(|place| evaluate_place(place, filters))
            .collect()
    }

    /// Distinct lowercase cuisine and theme tags, sorted
    pub fn facets(&self) -> Facets {
        let mut cuisines = BTreeSet::new();
        let mut themes = BTreeSet::new();

        for place in &self.places {
            cuisines.extend(place.cuisine.iter().map(|tag| tag.to_lowercase()));
            themes.extend(place.theme.iter().map(|tag| tag.to_lowercase()));
        }

        Facets {
            cuisines: cuisines.into_iter().collect(),
            themes: themes.into_iter().collect(),
        }
    }
}

impl Default for PlaceCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

struct SeedPlace {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    lat: f64,
    lng: f64,
    rating: f64,
    cuisine: &'static [&'static str],
    theme: &'static [&'static str],
    is_open_now: bool,
    price_level: u8,
    description: &'static str,
}

const SEED_PLACES: &[SeedPlace] = &[
    SeedPlace {
        id: "sunset-rooftop-lounge",
        name: "Sunset Rooftop Lounge",
        address: "123 Skyline Ave, New York, NY",
        lat: 40.7242,
        lng: -74.0018,
        rating: 4.6,
        cuisine: &["cocktails", "small plates"],
        theme: &["romantic", "rooftop"],
        is_open_now: true,
        price_level: 3,
        description: "Panoramic skyline views, live jazz on weekends, and a sparkling cocktail menu.",
    },
    SeedPlace {
        id: "brooklyn-noodle-bar",
        name: "Brooklyn Noodle Bar",
        address: "456 River St, Brooklyn, NY",
        lat: 40.7063,
        lng: -73.9903,
        rating: 4.4,
        cuisine: &["ramen", "asian"],
        theme: &["comfort food", "casual"],
        is_open_now: false,
        price_level: 2,
        description: "Steamy bowls, cozy booths, and an indie vinyl soundtrack for laid-back evenings.",
    },
    SeedPlace {
        id: "midnight-mini-golf",
        name: "Midnight Mini Golf",
        address: "89 Harbor Way, Jersey City, NJ",
        lat: 40.7124,
        lng: -74.0381,
        rating: 4.8,
        cuisine: &[],
        theme: &["playful", "adventure"],
        is_open_now: true,
        price_level: 2,
        description: "Glow-in-the-dark putting, neon murals, and mocktail flights until 1 AM.",
    },
    SeedPlace {
        id: "greenhouse-cafe",
        name: "Greenhouse Cafe & Conservatory",
        address: "301 Botanical Ln, Queens, NY",
        lat: 40.7412,
        lng: -73.8462,
        rating: 4.7,
        cuisine: &["vegetarian", "brunch"],
        theme: &["nature", "relaxed"],
        is_open_now: true,
        price_level: 2,
        description: "Lush indoor greenhouse with seasonal plates and fresh-pressed juices.",
    },
    SeedPlace {
        id: "art-house-cinema",
        name: "Art House Cinema & Lounge",
        address: "57 Mercer St, New York, NY",
        lat: 40.7204,
        lng: -74.0023,
        rating: 4.5,
        cuisine: &[],
        theme: &["artsy", "cozy"],
        is_open_now: true,
        price_level: 1,
        description: "Indie films, plush sofas, and curated snacks perfect for a quiet night out.",
    },
    SeedPlace {
        id: "latin-dance-lab",
        name: "Latin Dance Lab",
        address: "12 Grove St, Hoboken, NJ",
        lat: 40.7372,
        lng: -74.0307,
        rating: 4.9,
        cuisine: &[],
        theme: &["adventure", "music"],
        is_open_now: false,
        price_level: 2,
        description: "Beginner-friendly salsa and bachata classes with a post-lesson social hour.",
    },
    SeedPlace {
        id: "gelato-stroll",
        name: "Gelato & Gallery Stroll",
        address: "220 Water St, Brooklyn, NY",
        lat: 40.7038,
        lng: -73.9901,
        rating: 4.3,
        cuisine: &["dessert", "italian"],
        theme: &["artsy", "walkable"],
        is_open_now: true,
        price_level: 1,
        description: "Small-batch gelato next to a rotating local art gallery for sweet conversation starters.",
    },
];

fn to_tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

fn seed_places() -> Vec<Place> {
    SEED_PLACES
        .iter()
        .map(|seed| Place {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            address: seed.address.to_string(),
            coordinate: Coordinate::new(seed.lat, seed.lng),
            rating: Some(seed.rating),
            cuisine: to_tags(seed.cuisine),
            theme: to_tags(seed.theme),
            is_open_now: Some(seed.is_open_now),
            price_level: Some(seed.price_level),
            description: Some(seed.description.to_string()),
            website: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_seeded_catalog() {
        let catalog = PlaceCatalog::seeded();

        assert_eq!(catalog.len(), 7);
        assert!(PlaceCatalog::new(catalog.places().to_vec()).is_ok());
        assert_eq!(
            catalog.get_by_id("latin-dance-lab").map(|p| p.name.as_str()),
            Some("Latin Dance Lab")
        );
        assert!(catalog.get_by_id("nowhere").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut places = PlaceCatalog::seeded().places().to_vec();
        places.push(places[0].clone());

        let err = PlaceCatalog::new(places).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "sunset-rooftop-lounge"));
    }

    #[test]
    fn test_list_sorts_filtered_by_rating() {
        let catalog = PlaceCatalog::seeded();
        let filters = FilterSet {
            themes: vec!["artsy".to_string(), "adventure".to_string()],
            ..FilterSet::default()
        };

        let ids: Vec<&str> = catalog.list(Some(&filters)).iter().map(|p| p.id.as_str()).collect();

        assert_eq!(
            ids,
            vec!["latin-dance-lab", "midnight-mini-golf", "art-house-cinema", "gelato-stroll"]
        );
    }

    #[test]
    fn test_list_without_filters_keeps_catalog_order() {
        let catalog = PlaceCatalog::seeded();
        let listed = catalog.list(None);

        assert_eq!(listed.len(), catalog.len());
        assert_eq!(listed[0].id, "sunset-rooftop-lounge");
    }

    #[test]
    fn test_facets() {
        let facets = PlaceCatalog::seeded().facets();

        assert_eq!(facets.cuisines.first().map(String::as_str), Some("asian"));
        assert!(facets.cuisines.contains(&"italian".to_string()));
        assert_eq!(facets.themes.iter().filter(|t| *t == "artsy").count(), 1);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "a", "name": "A", "address": "1 A St", "lat": 1.0, "lng": 2.0}}]"#
        )
        .unwrap();

        let catalog = PlaceCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.places()[0].coordinate, Coordinate::new(1.0, 2.0));
    }

    #[test]
    fn test_from_json_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = PlaceCatalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
