use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use models::product::{self, Entity as ProductEntity, ProductPatch};
use models::slug::derive_slug;
use crate::errors::ServiceError;

/// Create a product from its catalog URL, or refresh name and price when the slug exists.
pub async fn upsert_product(
    db: &DatabaseConnection,
    url: &str,
    name: &str,
    price: i64,
) -> Result<product::Model, ServiceError> {
    let slug = derive_slug(url);
    let saved = product::upsert(db, &slug, name, price).await?;
    Ok(saved)
}

/// All products ordered by name, ties broken by id.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>, ServiceError> {
    let rows = ProductEntity::find()
        .order_by_asc(product::Column::Name)
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get_product(db: &DatabaseConnection, id: i64) -> Result<Option<product::Model>, ServiceError> {
    let found = ProductEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Apply only the present fields. `Ok(None)` when the id is unknown.
pub async fn update_product(
    db: &DatabaseConnection,
    id: i64,
    patch: ProductPatch,
) -> Result<Option<product::Model>, ServiceError> {
    let updated = product::update_by_id(db, id, patch).await?;
    Ok(updated)
}

/// Delete a product; returns true if a row was removed.
pub async fn delete_product(db: &DatabaseConnection, id: i64) -> Result<bool, ServiceError> {
    let res = ProductEntity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// Delete every product; returns the number of rows removed.
pub async fn delete_all_products(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let res = ProductEntity::delete_many().exec(db).await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    const HAMMER: &str = "https://www.maxidom.ru/catalog/hammer/";

    #[tokio::test]
    async fn product_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = upsert_product(&db, HAMMER, "Hammer", 500).await?;
        assert_eq!(a.slug, "hammer");
        let found = get_product(&db, a.id).await?.unwrap();
        assert_eq!(found.name, "Hammer");
        assert_eq!(found.url(), HAMMER);

        let patch = ProductPatch { name: Some("Claw hammer".into()), ..Default::default() };
        let updated = update_product(&db, a.id, patch).await?.unwrap();
        assert_eq!(updated.name, "Claw hammer");
        assert_eq!(updated.price, 500);

        assert!(delete_product(&db, a.id).await?);
        assert!(get_product(&db, a.id).await?.is_none());
        assert!(!delete_product(&db, a.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn upsert_twice_latest_values_win() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let first = upsert_product(&db, HAMMER, "Hammer", 500).await?;
        let second = upsert_product(&db, HAMMER, "Hammer", 600).await?;
        assert_eq!(first.id, second.id);

        let all = list_products(&db).await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].price, 600);
        Ok(())
    }

    #[tokio::test]
    async fn list_is_sorted_by_name() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for (slug, name) in [("c", "Chisel"), ("a", "Axe"), ("s", "Saw"), ("b", "Bolt")] {
            upsert_product(&db, &format!("https://www.maxidom.ru/catalog/{slug}/"), name, 1).await?;
        }
        let names: Vec<String> = list_products(&db).await?.into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Axe", "Bolt", "Chisel", "Saw"]);
        Ok(())
    }

    #[tokio::test]
    async fn price_only_update_keeps_name_and_slug() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = upsert_product(&db, HAMMER, "Hammer", 500).await?;
        let patch = ProductPatch { price: Some(750), ..Default::default() };
        let updated = update_product(&db, a.id, patch).await?.unwrap();
        assert_eq!(updated.name, "Hammer");
        assert_eq!(updated.url(), HAMMER);
        assert_eq!(updated.price, 750);
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_are_not_errors() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(get_product(&db, 999).await?.is_none());
        assert!(update_product(&db, 999, ProductPatch::default()).await?.is_none());
        assert!(!delete_product(&db, 999).await?);
        Ok(())
    }

    #[tokio::test]
    async fn delete_all_empties_table() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        upsert_product(&db, HAMMER, "Hammer", 500).await?;
        upsert_product(&db, "https://www.maxidom.ru/catalog/saw/", "Saw", 700).await?;
        assert_eq!(delete_all_products(&db).await?, 2);
        assert!(list_products(&db).await?.is_empty());
        assert_eq!(delete_all_products(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn distinct_urls_get_distinct_ids() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = upsert_product(&db, HAMMER, "Hammer", 500).await?;
        let b = upsert_product(&db, "https://www.maxidom.ru/catalog/saw/", "Saw", 700).await?;
        assert_ne!(a.id, b.id);
        assert_eq!(list_products(&db).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn zero_price_and_new_url_are_applied() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = upsert_product(&db, HAMMER, "Hammer", 500).await?;
        let patch = ProductPatch::from_input(None, Some("https://www.maxidom.ru/catalog/mallet/"), Some(0));
        let updated = update_product(&db, a.id, patch).await?.unwrap();
        assert_eq!(updated.price, 0);
        assert_eq!(updated.slug, "mallet");
        assert_eq!(updated.name, "Hammer");
        Ok(())
    }

    #[tokio::test]
    async fn update_after_delete_matches_no_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = upsert_product(&db, HAMMER, "Hammer", 500).await?;
        assert!(delete_product(&db, a.id).await?);
        let patch = ProductPatch { name: Some("Mallet".into()), price: Some(1), ..Default::default() };
        assert!(update_product(&db, a.id, patch).await?.is_none());
        assert!(list_products(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn url_collision_on_update_is_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        upsert_product(&db, HAMMER, "Hammer", 500).await?;
        let saw = upsert_product(&db, "https://www.maxidom.ru/catalog/saw/", "Saw", 700).await?;
        let patch = ProductPatch::from_input(None, Some(HAMMER), None);
        let err = update_product(&db, saw.id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "{err:?}");
        assert_eq!(get_product(&db, saw.id).await?.unwrap().slug, "saw");
        Ok(())
    }
}
