use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, dashboard::entities::DashboardStats};

pub trait DashboardService: Send + Sync {
    fn get_dashboard_stats(
        &self,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<DashboardStats, CoreError>> + Send;
}
