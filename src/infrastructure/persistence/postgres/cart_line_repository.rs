//! # PostgreSQL Cart Line Repository
//!
//! PostgreSQL implementation of [`CartLineRepository`] using sqlx.
//!
//! Reads the marketplace schema directly: `payments.cart_items` joined with
//! `shop.products` and `shop.artisan_shops`. Product dimensions live in a
//! JSONB column shaped `{length, width, height}`.

use crate::domain::entities::{CartLine, Dimensions};
use crate::domain::value_objects::{CartId, ProductId, ShopId};
use crate::infrastructure::persistence::traits::{
    CartLineRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

const CART_LINES_QUERY: &str = r#"
    SELECT
        ci.quantity::int4            AS quantity,
        ci.product_id::text          AS product_id,
        ci.seller_shop_id::text      AS seller_shop_id,
        ci.unit_price_minor::int8    AS unit_price_minor,
        ci.currency::text            AS currency,
        p.name::text                 AS product_name,
        p.weight::numeric            AS weight,
        p.price::numeric             AS price,
        p.dimensions::jsonb          AS dimensions,
        s.shop_name::text            AS shop_name,
        s.department::text           AS department,
        s.municipality::text         AS municipality
    FROM payments.cart_items ci
    INNER JOIN shop.products p ON ci.product_id = p.id
    INNER JOIN shop.artisan_shops s ON ci.seller_shop_id = s.id
    WHERE ci.cart_id = $1
"#;

/// PostgreSQL implementation of [`CartLineRepository`].
///
/// # Examples
///
/// ```ignore
/// use sqlx::PgPool;
/// use shipping_quote::infrastructure::persistence::postgres::PostgresCartLineRepository;
///
/// let pool = PgPool::connect("postgres://...").await?;
/// let repo = PostgresCartLineRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresCartLineRepository {
    pool: PgPool,
}

impl PostgresCartLineRepository {
    /// Creates a new repository over a connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartLineRepository for PostgresCartLineRepository {
    async fn find_by_cart(&self, cart_id: &CartId) -> RepositoryResult<Vec<CartLine>> {
        let rows: Vec<CartLineRow> = sqlx::query_as(CART_LINES_QUERY)
            .bind(*cart_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        debug!(%cart_id, rows = rows.len(), "loaded cart lines");

        rows.into_iter().map(CartLineRow::try_into_cart_line).collect()
    }
}

/// Row type for the cart lines join.
#[derive(Debug, sqlx::FromRow)]
struct CartLineRow {
    quantity: i32,
    product_id: String,
    seller_shop_id: Option<String>,
    unit_price_minor: Option<i64>,
    currency: Option<String>,
    product_name: Option<String>,
    weight: Option<Decimal>,
    price: Option<Decimal>,
    dimensions: Option<serde_json::Value>,
    shop_name: Option<String>,
    department: Option<String>,
    municipality: Option<String>,
}

impl CartLineRow {
    /// Converts the row into a CartLine.
    fn try_into_cart_line(self) -> RepositoryResult<CartLine> {
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            RepositoryError::serialization(format!(
                "negative quantity {} for product {}",
                self.quantity, self.product_id
            ))
        })?;

        Ok(CartLine {
            product_id: ProductId::new(self.product_id),
            product_name: self.product_name,
            shop_id: ShopId::or_fallback(self.seller_shop_id),
            shop_name: self.shop_name,
            quantity,
            unit_price_minor: self.unit_price_minor,
            currency: self.currency,
            list_price: self.price,
            weight_kg: self.weight,
            dimensions: self.dimensions.as_ref().and_then(Dimensions::from_json),
            department: self.department,
            municipality: self.municipality,
        })
    }
}
