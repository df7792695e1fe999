use catalog_core::{DomainError, DomainResult, Entity, ProductId};

/// Payload for creating a product.
///
/// `quantity` is signed; negative values are rejected by [`NewProduct::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub quantity: i64,
    pub price: f64,
}

impl NewProduct {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail_url: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            thumbnail_url: thumbnail_url.into(),
            quantity,
            price,
        }
    }

    /// Check the entity invariants, reporting the first violated field.
    ///
    /// The thumbnail URL is not checked.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }

        if self.quantity < 0 {
            return Err(DomainError::validation(format!(
                "quantity must be non-negative (got {})",
                self.quantity
            )));
        }

        if !self.price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }

        if self.price < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be non-negative (got {})",
                self.price
            )));
        }

        Ok(())
    }
}

/// A catalog product.
///
/// Immutable once created: there is no update path, only delete and re-create.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    title: String,
    description: String,
    thumbnail_url: String,
    quantity: i64,
    price: f64,
}

impl Product {
    /// Build a product from a store-assigned id and a create payload.
    ///
    /// Every construction path goes through validation, so a `Product` value
    /// always satisfies `quantity >= 0`, `price >= 0` and a non-empty title.
    /// A price of `-0.0` is stored as `0.0`.
    pub fn create(id: ProductId, payload: NewProduct) -> DomainResult<Self> {
        payload.validate()?;

        let price = if payload.price == 0.0 { 0.0 } else { payload.price };

        Ok(Self {
            id,
            title: payload.title,
            description: payload.description,
            thumbnail_url: payload.thumbnail_url,
            quantity: payload.quantity,
            price,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
