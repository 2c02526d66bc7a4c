//! Business services. Handlers stay thin; everything that touches the
//! database or enforces a flow rule lives here.

pub mod lots;
pub mod production;
pub mod quality;
pub mod reports;
pub mod suppliers;

pub use lots::LotService;
pub use production::ProductionService;
pub use quality::QualityGateService;
pub use reports::ReportService;
pub use suppliers::SupplierService;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::topology::WarehouseTopology;

/// Bundle of all service instances, shared through `AppState`.
#[derive(Clone)]
pub struct AppServices {
    pub lots: LotService,
    pub quality: QualityGateService,
    pub production: ProductionService,
    pub reports: ReportService,
    pub suppliers: SupplierService,
}

impl AppServices {
    pub fn new(db: Arc<DatabaseConnection>, topology: Arc<WarehouseTopology>) -> Self {
        Self {
            lots: LotService::new(db.clone(), topology.clone()),
            quality: QualityGateService::new(db.clone(), topology.clone()),
            production: ProductionService::new(db.clone(), topology.clone()),
            reports: ReportService::new(db.clone()),
            suppliers: SupplierService::new(db),
        }
    }
}
