// Resource services, one per table
pub mod inventories;
pub mod warehouses;

pub use inventories::{InventoryService, InventorySummary, InventoryView};
pub use warehouses::WarehouseService;
