use std::sync::Arc;

use crate::dto::vehicle_dto::DashboardOverview;
use crate::repositories::VehicleStore;
use crate::services::ViewCounter;
use crate::utils::errors::AppResult;

const RECENT_VEHICLES: usize = 5;

pub struct DashboardController {
    vehicles: Arc<dyn VehicleStore>,
    view_counter: ViewCounter,
}

impl DashboardController {
    pub fn new(vehicles: Arc<dyn VehicleStore>, view_counter: ViewCounter) -> Self {
        Self { vehicles, view_counter }
    }

    pub async fn overview(&self) -> AppResult<DashboardOverview> {
        let vehicles = self.vehicles.list().await?;
        let page_views = self.view_counter.get().await.count;

        Ok(DashboardOverview {
            page_views,
            total_vehicles: vehicles.len(),
            available_vehicles: vehicles.iter().filter(|v| v.available).count(),
            recent_vehicles: vehicles.into_iter().take(RECENT_VEHICLES).collect(),
        })
    }
}
