use std::sync::Arc;
use tracing::{error, info};

use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{VehicleIdResponse, VehicleRequest};
use crate::models::Vehicle;
use crate::repositories::VehicleStore;
use crate::services::CatalogFilter;
use crate::utils::errors::{internal_error, AppError, AppResult};

pub struct VehicleController {
    store: Arc<dyn VehicleStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    /// Catálogo público: un fallo de la base de datos devuelve una lista vacía
    pub async fn list_public(&self) -> Vec<Vehicle> {
        match self.store.list().await {
            Ok(vehicles) => vehicles,
            Err(e) => {
                error!("❌ Error obteniendo vehículos: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn search(&self, filter: &CatalogFilter) -> Vec<Vehicle> {
        filter.apply(self.list_public().await)
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.store.list().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Vehicle> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))
    }

    pub async fn add(&self, request: VehicleRequest) -> AppResult<ApiResponse<VehicleIdResponse>> {
        let vehicle = request.normalized()?.into_vehicle(None);

        self.store.insert(&vehicle).await.map_err(|e| {
            error!("❌ Error añadiendo vehículo {}: {}", vehicle.id, e);
            internal_error("Failed to add vehicle")
        })?;

        info!("🚗 Vehículo añadido: {} ({})", vehicle.name, vehicle.id);
        Ok(ApiResponse::success_with_message(
            VehicleIdResponse { id: vehicle.id },
            "Vehicle added successfully",
        ))
    }

    pub async fn update(&self, id: &str, request: VehicleRequest) -> AppResult<ApiResponse<VehicleIdResponse>> {
        let vehicle = request.normalized()?.into_vehicle(Some(id.to_string()));

        let updated = self.store.update(&vehicle).await.map_err(|e| {
            error!("❌ Error actualizando vehículo {}: {}", id, e);
            internal_error("Failed to update vehicle")
        })?;
        if !updated {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        info!("✏️ Vehículo actualizado: {}", id);
        Ok(ApiResponse::success_with_message(
            VehicleIdResponse { id: vehicle.id },
            "Vehicle updated successfully",
        ))
    }

    pub async fn delete(&self, id: &str) -> AppResult<ApiResponse<()>> {
        let deleted = self.store.delete(id).await.map_err(|e| {
            error!("❌ Error eliminando vehículo {}: {}", id, e);
            internal_error("Failed to delete vehicle")
        })?;
        if !deleted {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        info!("🗑️ Vehículo eliminado: {}", id);
        Ok(ApiResponse::message("Vehicle deleted successfully"))
    }
}
