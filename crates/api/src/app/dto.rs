use serde::{Deserialize, Serialize};

use catalog_products::{NewProduct, Product, ShowcaseProduct};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub quantity: i64,
    pub price: f64,
}

impl From<AddProductRequest> for NewProduct {
    fn from(body: AddProductRequest) -> Self {
        NewProduct {
            title: body.title,
            description: body.description,
            thumbnail_url: body.thumbnail_url,
            quantity: body.quantity,
            price: body.price,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub quantity: i64,
    pub price: f64,
}

impl From<&Product> for ProductResponse {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id_typed().to_string(),
            title: p.title().to_string(),
            description: p.description().to_string(),
            thumbnail_url: p.thumbnail_url().to_string(),
            quantity: p.quantity(),
            price: p.price(),
        }
    }
}

impl From<ShowcaseProduct> for ProductResponse {
    fn from(p: ShowcaseProduct) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title.to_string(),
            description: p.description.to_string(),
            thumbnail_url: p.thumbnail_url.to_string(),
            quantity: p.quantity,
            price: p.price,
        }
    }
}
