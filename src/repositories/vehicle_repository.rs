//! Repositorio de vehículos
//!
//! Persistencia del catálogo en las tablas normalizadas `vehicles`, `cities`,
//! `features`, `translations` y sus tablas de unión. Cada escritura se ejecuta
//! dentro de una transacción.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashMap;
use tracing::debug;

use crate::models::{Language, Vehicle, VehicleRow, VehicleTranslations};
use crate::utils::errors::{validation_error, AppResult};

/// Almacén de vehículos usado por los controladores
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Todos los vehículos, del más reciente al más antiguo
    async fn list(&self) -> AppResult<Vec<Vehicle>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>>;

    async fn insert(&self, vehicle: &Vehicle) -> AppResult<()>;

    /// Devuelve `false` si el vehículo no existe
    async fn update(&self, vehicle: &Vehicle) -> AppResult<bool>;

    /// Devuelve `false` si el vehículo no existe
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load(&self, id: Option<&str>) -> AppResult<Vec<Vehicle>> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, name, brand, type, class, price, image_url, available, created_at
            FROM vehicles
            WHERE ($1::varchar IS NULL OR id = $1)
            ORDER BY created_at DESC, id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let city_rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT vc.vehicle_id, c.name
            FROM vehicle_cities vc
            JOIN cities c ON c.id = vc.city_id
            WHERE ($1::varchar IS NULL OR vc.vehicle_id = $1)
            ORDER BY vc.vehicle_id, vc.position
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let feature_rows: Vec<(String, String, String)> = sqlx::query_as(
            r#"
            SELECT vf.vehicle_id, f.name, f.language
            FROM vehicle_features vf
            JOIN features f ON f.id = vf.feature_id
            WHERE ($1::varchar IS NULL OR vf.vehicle_id = $1)
            ORDER BY vf.vehicle_id, f.language, vf.position
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let translation_rows: Vec<(String, String, String, String)> = sqlx::query_as(
            r#"
            SELECT vehicle_id, language, field_name, translated_value
            FROM translations
            WHERE ($1::varchar IS NULL OR vehicle_id = $1)
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let mut cities: HashMap<String, Vec<String>> = HashMap::new();
        for (vehicle_id, name) in city_rows {
            cities.entry(vehicle_id).or_default().push(name);
        }

        let mut features: HashMap<String, Vec<String>> = HashMap::new();
        let mut translations: HashMap<String, VehicleTranslations> = HashMap::new();
        for (vehicle_id, name, language) in feature_rows {
            match language.parse::<Language>() {
                Ok(Language::En) => translations.entry(vehicle_id).or_default().en.features.push(name),
                Ok(Language::Fr) => features.entry(vehicle_id).or_default().push(name),
                Err(_) => debug!("Característica '{}' con idioma desconocido '{}'", name, language),
            }
        }

        for (vehicle_id, language, field_name, value) in translation_rows {
            let Ok(language) = language.parse::<Language>() else {
                continue;
            };
            let entry = translations.entry(vehicle_id).or_default();
            let fields = match language {
                Language::Fr => &mut entry.fr,
                Language::En => &mut entry.en,
            };
            match field_name.as_str() {
                "name" => fields.name = Some(value),
                "type" => fields.vehicle_type = Some(value),
                "class" => fields.class = Some(value),
                _ => {}
            }
        }

        let vehicles = rows
            .into_iter()
            .map(|row| {
                let vehicle_cities = cities.remove(&row.id).unwrap_or_default();
                let vehicle_features = features.remove(&row.id).unwrap_or_default();
                let mut vehicle_translations = translations.remove(&row.id).unwrap_or_default();
                vehicle_translations.fr.features = vehicle_features.clone();
                row.into_vehicle(vehicle_cities, vehicle_features, vehicle_translations)
            })
            .collect();

        Ok(vehicles)
    }
}

#[async_trait]
impl VehicleStore for VehicleRepository {
    async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.load(None).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>> {
        Ok(self.load(Some(id)).await?.into_iter().next())
    }

    async fn insert(&self, vehicle: &Vehicle) -> AppResult<()> {
        let price = price_to_decimal(vehicle.price)?;
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO vehicles (id, name, brand, type, class, price, price_range, image_url, available)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&vehicle.id)
        .bind(&vehicle.name)
        .bind(&vehicle.brand)
        .bind(&vehicle.vehicle_type)
        .bind(&vehicle.class)
        .bind(price)
        .bind(vehicle.price_range.label())
        .bind(&vehicle.image)
        .bind(vehicle.available)
        .execute(&mut *tx)
        .await?;

        write_links(&mut tx, vehicle).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn update(&self, vehicle: &Vehicle) -> AppResult<bool> {
        let price = price_to_decimal(vehicle.price)?;
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE vehicles
            SET name = $2, brand = $3, type = $4, class = $5, price = $6,
                price_range = $7, image_url = $8, available = $9, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(&vehicle.id)
        .bind(&vehicle.name)
        .bind(&vehicle.brand)
        .bind(&vehicle.vehicle_type)
        .bind(&vehicle.class)
        .bind(price)
        .bind(vehicle.price_range.label())
        .bind(&vehicle.image)
        .bind(vehicle.available)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        for table in ["vehicle_cities", "vehicle_features", "translations"] {
            sqlx::query(&format!("DELETE FROM {} WHERE vehicle_id = $1", table))
                .bind(&vehicle.id)
                .execute(&mut *tx)
                .await?;
        }

        write_links(&mut tx, vehicle).await?;
        tx.commit().await?;
        Ok(true)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        // Ciudades, características y traducciones se borran en cascada
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn price_to_decimal(price: f64) -> AppResult<Decimal> {
    Decimal::from_f64_retain(price)
        .map(|value| value.round_dp(2))
        .ok_or_else(|| validation_error("price", "Valid price is required"))
}

/// Inserta los enlaces de ciudades, características y traducciones
async fn write_links(tx: &mut Transaction<'_, Postgres>, vehicle: &Vehicle) -> AppResult<()> {
    for (position, city) in vehicle.cities.iter().enumerate() {
        let city_id: i32 = sqlx::query_scalar(
            "INSERT INTO cities (name) VALUES ($1) ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name RETURNING id",
        )
        .bind(city)
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query("INSERT INTO vehicle_cities (vehicle_id, city_id, position) VALUES ($1, $2, $3)")
            .bind(&vehicle.id)
            .bind(city_id)
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
    }

    let features_by_language = [
        (Language::Fr, &vehicle.features),
        (Language::En, &vehicle.translations.en.features),
    ];
    for (language, features) in features_by_language {
        for (position, feature) in features.iter().enumerate() {
            let feature_id: i32 = sqlx::query_scalar(
                r#"
                INSERT INTO features (name, language) VALUES ($1, $2)
                ON CONFLICT (name, language) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                "#,
            )
            .bind(feature)
            .bind(language.code())
            .fetch_one(&mut **tx)
            .await?;

            sqlx::query(
                "INSERT INTO vehicle_features (vehicle_id, feature_id, position) VALUES ($1, $2, $3)",
            )
            .bind(&vehicle.id)
            .bind(feature_id)
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
        }
    }

    let en = &vehicle.translations.en;
    let fields = [
        ("name", en.name.as_deref()),
        ("type", en.vehicle_type.as_deref()),
        ("class", en.class.as_deref()),
    ];
    for (field_name, value) in fields {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        sqlx::query(
            r#"
            INSERT INTO translations (vehicle_id, language, field_name, translated_value)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&vehicle.id)
        .bind(Language::En.code())
        .bind(field_name)
        .bind(value)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}
