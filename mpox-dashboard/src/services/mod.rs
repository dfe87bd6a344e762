pub mod opendatasus;

use crate::error::AppError;
use crate::models::PackageSearchResponse;
use async_trait::async_trait;

#[async_trait]
pub trait DataService: Clone + Send + Sync + 'static {
    async fn search_packages(&self) -> Result<PackageSearchResponse, AppError>;
}

#[derive(Clone, Copy)]
pub struct ProductionDataService;

#[async_trait]
impl DataService for ProductionDataService {
    async fn search_packages(&self) -> Result<PackageSearchResponse, AppError> {
        opendatasus::OpenDataSusService::shared()?
            .search_packages()
            .await
    }
}

#[async_trait]
impl DataService for opendatasus::OpenDataSusService {
    async fn search_packages(&self) -> Result<PackageSearchResponse, AppError> {
        opendatasus::OpenDataSusService::search_packages(self).await
    }
}
