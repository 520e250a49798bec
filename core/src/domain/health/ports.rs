use crate::domain::{common::entities::app_errors::CoreError, health::entities::HealthStatus};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = Result<HealthStatus, CoreError>> + Send;
}
