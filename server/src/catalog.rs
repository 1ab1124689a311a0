use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {slug}")]
    ProductNotFound { slug: String },

    #[error("Product {id} has an empty slug")]
    EmptySlug { id: u32 },

    #[error("Duplicate product slug: {slug}")]
    DuplicateSlug { slug: String },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub description: String,
}

impl Product {
    pub fn new(id: u32, name: &str, slug: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            description: description.to_string(),
        }
    }
}

/// Fixed product list, seeded once and shared read-only across workers.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if product.slug.is_empty() {
                return Err(CatalogError::EmptySlug { id: product.id });
            }
            if !seen.insert(product.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug {
                    slug: product.slug.clone(),
                });
            }
        }

        Ok(Self {
            products: Arc::from(products),
        })
    }

    pub fn seeded() -> Self {
        Self {
            products: Arc::from(seed_products()),
        }
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_slug(&self, slug: &str) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|product| product.slug == slug)
            .ok_or_else(|| CatalogError::ProductNotFound {
                slug: slug.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Hover Shooters",
            "hover-shooters",
            "Shoot your way to the top on 14 different hoverboards",
        ),
        Product::new(
            2,
            "Ocean Explorer",
            "ocean-explorer",
            "Explore the depths of the sea in this one of a kind",
        ),
        Product::new(
            3,
            "Dinosaur Park",
            "dinosaur-park",
            "Go back 65 million years in the past and ride a T-Rex",
        ),
        Product::new(
            4,
            "Cars VR",
            "cars-vr",
            "Get behind the wheel of the fastest cars in the world.",
        ),
        Product::new(
            5,
            "Robin Hood",
            "robin-hood",
            "Pick up the bow and arrow and master the art of archery",
        ),
        Product::new(
            6,
            "Real World VR",
            "real-world-vr",
            "Explore the seven wonders of the world in VR",
        ),
    ]
}
