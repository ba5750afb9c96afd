pub mod common;
pub mod inventories;
pub mod warehouses;
