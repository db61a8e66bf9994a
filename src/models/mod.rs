pub mod product;
pub mod promotion_page;
pub mod scan_config;
pub mod sector;

pub use product::{Product, ProductId};
pub use promotion_page::PromotionPage;
pub use scan_config::ScanConfig;
pub use sector::Sector;
