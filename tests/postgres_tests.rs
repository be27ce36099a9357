//! Tests contra PostgreSQL real. Requieren DATABASE_URL:
//! `cargo test --test postgres_tests -- --ignored`

mod common;

use sqlx::PgPool;

use common::vehicle;
use zouggari_transport::models::{PriceRange, TOTAL_PAGE_PATH};
use zouggari_transport::repositories::{VehicleRepository, VehicleStore, ViewCountRepository, ViewCountStore};

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_insert_then_fetch_keeps_links_in_order(pool: PgPool) {
    let repository = VehicleRepository::new(pool);
    let mut touareg = vehicle(
        "v1",
        "Touareg",
        "Volkswagen",
        3000.0,
        &["Marrakech", "Casablanca", "Rabat"],
        &["GPS", "Sièges en cuir"],
    );
    touareg.translations.en.name = Some("Touareg R".to_string());
    touareg.translations.en.features = vec!["GPS".to_string(), "Leather seats".to_string()];

    repository.insert(&touareg).await.unwrap();

    let stored = repository.find_by_id("v1").await.unwrap().unwrap();
    assert_eq!(stored.cities, vec!["Marrakech", "Casablanca", "Rabat"]);
    assert_eq!(stored.features, vec!["GPS", "Sièges en cuir"]);
    assert_eq!(stored.translations.fr.features, stored.features);
    assert_eq!(stored.translations.en.features, vec!["GPS", "Leather seats"]);
    assert_eq!(stored.translations.en.name.as_deref(), Some("Touareg R"));
    assert_eq!(stored.translations.en.vehicle_type.as_deref(), Some("Sedan"));
    assert_eq!(stored.price_range, PriceRange::Over2000);
    assert_eq!(stored.price, 3000.0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_update_replaces_links(pool: PgPool) {
    let repository = VehicleRepository::new(pool);
    let mut clio = vehicle("v2", "Clio", "Renault", 250.0, &["Rabat"], &["GPS"]);
    repository.insert(&clio).await.unwrap();

    clio.price = 550.0;
    clio.price_range = PriceRange::from_price(clio.price);
    clio.cities = vec!["Agadir".to_string()];
    clio.features = vec!["Bluetooth".to_string(), "GPS".to_string()];
    clio.translations.en.class = None;
    assert!(repository.update(&clio).await.unwrap());

    let stored = repository.find_by_id("v2").await.unwrap().unwrap();
    assert_eq!(stored.cities, vec!["Agadir"]);
    assert_eq!(stored.features, vec!["Bluetooth", "GPS"]);
    assert_eq!(stored.price_range, PriceRange::From500To800);
    assert!(stored.translations.en.class.is_none());

    let mut ghost = clio.clone();
    ghost.id = "v404".to_string();
    assert!(!repository.update(&ghost).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_delete_cascades(pool: PgPool) {
    let repository = VehicleRepository::new(pool.clone());
    repository
        .insert(&vehicle("v3", "Logan", "Dacia", 200.0, &["Fès"], &["GPS"]))
        .await
        .unwrap();

    assert!(repository.delete("v3").await.unwrap());
    assert!(!repository.delete("v3").await.unwrap());

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicle_cities WHERE vehicle_id = 'v3'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(links, 0);
    assert!(repository.list().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_view_count_increments(pool: PgPool) {
    let repository = ViewCountRepository::new(pool);
    let before = repository.get(TOTAL_PAGE_PATH).await.unwrap();
    assert_eq!(before, 0);

    repository.increment(TOTAL_PAGE_PATH).await.unwrap();
    let count = repository.increment(TOTAL_PAGE_PATH).await.unwrap();
    assert_eq!(count, before + 2);
    assert_eq!(repository.get(TOTAL_PAGE_PATH).await.unwrap(), before + 2);
}
