use sea_orm::{
    entity::prelude::*,
    sea_query::{Expr, OnConflict},
    ConnectionTrait, EntityTrait, QueryFilter, Set, UpdateMany,
};
use serde::{Deserialize, Serialize};

use crate::{errors, slug};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text", unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Public catalog URL rebuilt from the stored slug.
    pub fn url(&self) -> String {
        slug::derive_url(&self.slug)
    }
}

/// Fields of a partial update. `None` keeps the stored value; `Some` always wins,
/// including `Some(0)` for price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub price: Option<i64>,
}

impl ProductPatch {
    /// Build a patch from client input; a present `url` becomes a slug.
    pub fn from_input(name: Option<String>, url: Option<&str>, price: Option<i64>) -> Self {
        Self { slug: url.map(slug::derive_slug), name, price }
    }

    pub fn is_empty(&self) -> bool {
        self.slug.is_none() && self.name.is_none() && self.price.is_none()
    }

    /// `UPDATE products SET <present fields> WHERE id = ?`.
    pub fn into_update(self, id: i64) -> UpdateMany<Entity> {
        let mut stmt = Entity::update_many().filter(Column::Id.eq(id));
        if let Some(s) = self.slug { stmt = stmt.col_expr(Column::Slug, Expr::value(s)); }
        if let Some(n) = self.name { stmt = stmt.col_expr(Column::Name, Expr::value(n)); }
        if let Some(p) = self.price { stmt = stmt.col_expr(Column::Price, Expr::value(p)); }
        stmt
    }
}

/// Insert a product or, when the slug already exists, overwrite its name and price.
/// Runs as a single `INSERT .. ON CONFLICT (slug) DO UPDATE .. RETURNING` statement.
pub async fn upsert<C: ConnectionTrait>(
    db: &C,
    slug: &str,
    name: &str,
    price: i64,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        slug: Set(slug.to_string()),
        name: Set(name.to_string()),
        price: Set(price),
        ..Default::default()
    };
    let saved = Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::Slug)
                .update_columns([Column::Name, Column::Price])
                .to_owned(),
        )
        .exec_with_returning(db)
        .await?;
    Ok(saved)
}

/// Apply a patch to the row with `id` in one `UPDATE .. RETURNING` statement.
/// `Ok(None)` when no row matched, including one deleted by a concurrent request.
/// An empty patch is a plain lookup.
pub async fn update_by_id<C: ConnectionTrait>(
    db: &C,
    id: i64,
    patch: ProductPatch,
) -> Result<Option<Model>, errors::ModelError> {
    if patch.is_empty() {
        return Ok(Entity::find_by_id(id).one(db).await?);
    }
    let updated = patch.into_update(id).exec_with_returning(db).await?;
    Ok(updated.into_iter().next())
}
