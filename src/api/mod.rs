// Backend API modules
pub mod client;
pub mod error;
pub mod scan_config;
pub mod sectors;
pub mod products;

// Re-export commonly used items
pub use client::{set_silent, ApiClient};
pub use error::ApiError;
pub use scan_config::{load_scan_config, save_scan_config};
pub use sectors::load_sectors;
pub use products::{load_promotions, search_products, submit_products, sync_product};
