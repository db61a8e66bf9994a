//! Product selection session.
//!
//! Holds everything the operator is looking at (search results, the loaded
//! promotions page, its filtered view, the scan config) and the operations that
//! change it. Each backend operation follows the same shape: one request, then
//! either a state update or an error notification, then an unconditional
//! settle step that clears the loading indicator.

pub mod filter;
pub mod pagination;

use crate::api::{self, ApiClient};
use crate::models::{Product, ProductId, ScanConfig, Sector};
use crate::notify::{Notification, Notifications};
use crate::ui::spinner::LoadingIndicator;

pub use filter::filter_by_name;
pub use pagination::find_page;

pub const MSG_CONFIG_SAVED: &str = "Configuration saved successfully!";
pub const MSG_CONFIG_SAVE_FAILED: &str = "There was an error saving the configuration!";
pub const MSG_CONFIG_LOAD_FAILED: &str = "There was an error loading the configuration!";
pub const MSG_SECTORS_LOAD_FAILED: &str = "There was an error loading the sectors!";
pub const MSG_SYNC_SENT: &str = "Product sent for synchronization!";
pub const MSG_SYNC_FAILED: &str = "There was an error trying to synchronize the product!";
pub const MSG_PRODUCTS_SAVED: &str = "Products saved successfully!";
pub const MSG_PRODUCTS_SAVE_FAILED: &str = "There was an error saving the products!";
pub const MSG_NOTHING_SELECTED: &str = "Select at least one product to be sent.";
pub const MSG_SEARCH_FAILED: &str = "There was an error searching for products!";
pub const MSG_PROMOTIONS_FAILED: &str = "There was an error loading the promotional products!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Search,
    Promotions,
}

/// Transient presentation state.
#[derive(Debug, Default)]
pub struct ViewState {
    pub active_tab: Tab,
    /// Text currently typed in the search/filter box.
    pub search_input: String,
    /// Paginator offset of the promotions tab.
    pub promotions_first: u64,
    scroll_to_top: bool,
}

pub struct SelectionSession {
    api: ApiClient,
    rows_per_page: u32,
    products: Vec<Product>,
    promotions: Vec<Product>,
    promotions_view: Vec<Product>,
    total_pages: u32,
    total_records: u64,
    config: ScanConfig,
    sectors: Vec<Sector>,
    view: ViewState,
    loading: LoadingIndicator,
    notifications: Notifications,
}

impl SelectionSession {
    pub fn new(api: ApiClient, rows_per_page: u32) -> Self {
        Self {
            api,
            rows_per_page,
            products: Vec::new(),
            promotions: Vec::new(),
            promotions_view: Vec::new(),
            total_pages: 0,
            total_records: 0,
            config: ScanConfig::default(),
            sectors: Vec::new(),
            view: ViewState::default(),
            loading: LoadingIndicator::hidden(),
            notifications: Notifications::default(),
        }
    }

    pub fn with_loading(mut self, loading: LoadingIndicator) -> Self {
        self.loading = loading;
        self
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn promotions(&self) -> &[Product] {
        &self.promotions
    }

    /// The promotions page as currently filtered.
    pub fn promotions_view(&self) -> &[Product] {
        &self.promotions_view
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    pub fn pending_notifications(&self) -> &[Notification] {
        self.notifications.pending()
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    /// Returns whether a scroll-to-top was requested since the last call.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.view.scroll_to_top)
    }

    /// 1-based number of the promotions page the paginator points at.
    pub fn current_page_number(&self) -> u64 {
        self.view.promotions_first / u64::from(self.rows_per_page.max(1)) + 1
    }

    fn settle(&mut self, scroll_to_top: bool) {
        self.loading.end();
        if scroll_to_top {
            self.view.scroll_to_top = true;
        }
    }

    /// Load the scan configuration and the sector list.
    pub async fn init(&mut self) {
        self.load_config().await;
        self.load_sectors().await;
    }

    pub async fn load_config(&mut self) {
        self.loading.begin("Loading configuration");
        match api::load_scan_config(&self.api).await {
            Ok(config) => self.config = config,
            Err(e) => {
                tracing::error!(%e, "failed to load scan configuration");
                self.notifications.push(Notification::error(MSG_CONFIG_LOAD_FAILED));
            }
        }
        self.settle(false);
    }

    pub async fn load_sectors(&mut self) {
        self.loading.begin("Loading sectors");
        match api::load_sectors(&self.api).await {
            Ok(sectors) => self.sectors = sectors,
            Err(e) => {
                tracing::error!(%e, "failed to load sectors");
                self.notifications.push(Notification::error(MSG_SECTORS_LOAD_FAILED));
            }
        }
        self.settle(false);
    }

    pub fn set_config_value(&mut self, key: &str, raw: &str) {
        self.config.set_from_text(key, raw);
    }

    pub async fn save_config(&mut self) {
        self.loading.begin("Saving configuration");
        match api::save_scan_config(&self.api, &self.config).await {
            Ok(saved) => {
                self.config = saved;
                self.notifications.push(Notification::success(MSG_CONFIG_SAVED));
            }
            Err(e) => {
                tracing::error!(%e, "failed to save scan configuration");
                self.notifications.push(Notification::error(MSG_CONFIG_SAVE_FAILED));
            }
        }
        self.settle(true);
    }

    pub async fn sync_product(&mut self, id: &ProductId) {
        self.loading.begin("Requesting synchronization");
        match api::sync_product(&self.api, id).await {
            Ok(()) => {
                tracing::info!(%id, "product queued for synchronization");
                self.notifications.push(Notification::success(MSG_SYNC_SENT));
            }
            Err(e) => {
                tracing::error!(%e, %id, "failed to synchronize product");
                self.notifications.push(Notification::error(MSG_SYNC_FAILED));
            }
        }
        self.settle(true);
    }

    /// Submit every selected search result.
    ///
    /// With nothing selected a sticky warning is raised and no request is made.
    pub async fn submit_selected(&mut self) {
        let selected: Vec<Product> = self.products.iter().filter(|p| p.selected).cloned().collect();
        if selected.is_empty() {
            self.notifications.push(Notification::warn(MSG_NOTHING_SELECTED));
            return;
        }

        self.loading.begin("Sending products");
        match api::submit_products(&self.api, &selected).await {
            Ok(()) => {
                tracing::info!(count = selected.len(), "products submitted");
                self.notifications.push(Notification::success(MSG_PRODUCTS_SAVED));
                self.reset_product_lists();
                self.view.promotions_first = 0;
            }
            Err(e) => {
                tracing::error!(%e, count = selected.len(), "failed to submit products");
                self.notifications.push(Notification::error(MSG_PRODUCTS_SAVE_FAILED));
            }
        }
        self.settle(true);
    }

    pub fn reset_product_lists(&mut self) {
        self.products.clear();
        self.promotions.clear();
        self.promotions_view.clear();
    }

    /// Replace the search results with the backend's matches for `query`.
    ///
    /// Results are applied in the order responses arrive; there is no
    /// sequencing between consecutive searches.
    pub async fn search_products(&mut self, query: &str) {
        self.view.search_input = query.to_string();
        self.loading.begin("Searching products");
        match api::search_products(&self.api, query).await {
            Ok(found) => self.products = found,
            Err(e) => {
                tracing::error!(%e, query, "product search failed");
                self.notifications.push(Notification::error(MSG_SEARCH_FAILED));
            }
        }
        self.settle(false);
    }

    /// Mark a search result as selected or not. Returns false for unknown ids.
    pub fn set_selected(&mut self, id: &ProductId, selected: bool) -> bool {
        match self.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                product.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Flip the selection of a search result, returning the new state.
    pub fn toggle_selected(&mut self, id: &ProductId) -> Option<bool> {
        let product = self.products.iter_mut().find(|p| &p.id == id)?;
        product.selected = !product.selected;
        Some(product.selected)
    }

    pub async fn select_tab(&mut self, tab: Tab) {
        self.view.search_input.clear();
        self.view.active_tab = tab;
        if tab == Tab::Promotions {
            self.view.promotions_first = 0;
            self.load_promotions(0).await;
        }
    }

    /// React to the paginator moving to `first`. Offsets that do not line up
    /// with a known page are ignored.
    ///
    /// The offset is stored either way, so after an ignored offset the
    /// paginator position no longer matches the rows on screen.
    pub async fn paginate(&mut self, first: u64) -> Option<u32> {
        self.view.promotions_first = first;
        let page = find_page(first, self.total_pages, self.rows_per_page);
        match page {
            Some(p) => self.load_promotions(p).await,
            None => tracing::debug!(
                first,
                total_pages = self.total_pages,
                rows = self.rows_per_page,
                "paginator offset matches no page, skipping fetch"
            ),
        }
        page
    }

    pub async fn load_promotions(&mut self, page: u32) {
        self.loading.begin("Loading promotions");
        match api::load_promotions(&self.api, page, self.rows_per_page).await {
            Ok(loaded) => {
                self.total_pages = loaded.total_pages;
                self.total_records = loaded.total_elements;
                self.promotions_view = loaded.content.clone();
                self.promotions = loaded.content;
            }
            Err(e) => {
                tracing::error!(%e, page, "failed to load promotions");
                self.notifications.push(Notification::error(MSG_PROMOTIONS_FAILED));
            }
        }
        self.settle(false);
    }

    /// Narrow the loaded promotions page by name.
    pub fn filter_promotions(&mut self, query: &str) {
        self.view.search_input = query.to_string();
        self.promotions_view = filter_by_name(&self.promotions, query);
    }

    /// Show the whole page again once the filter box has been cleared.
    pub fn restore_promotions(&mut self) {
        if self.view.search_input.trim().is_empty() {
            self.promotions_view = self.promotions.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SelectionSession {
        let api = ApiClient::new("http://127.0.0.1:9", "").unwrap();
        let mut s = SelectionSession::new(api, 10);
        s.promotions = vec![
            Product::new(ProductId::Number(1), "Arroz"),
            Product::new(ProductId::Number(2), "Feijão"),
        ];
        s.promotions_view = s.promotions.clone();
        s.products = s.promotions.clone();
        s
    }

    #[test]
    fn filter_leaves_page_cache_alone() {
        let mut s = session();
        s.filter_promotions("AR");
        assert_eq!(s.promotions_view().len(), 1);
        assert_eq!(s.promotions().len(), 2);
    }

    #[test]
    fn restore_only_when_input_is_blank() {
        let mut s = session();
        s.filter_promotions("ar");
        s.restore_promotions();
        assert_eq!(s.promotions_view().len(), 1);

        s.view.search_input = "   ".into();
        s.restore_promotions();
        assert_eq!(s.promotions_view().len(), 2);
    }

    #[test]
    fn selection_flags_only_touch_known_products() {
        let mut s = session();
        assert!(s.set_selected(&ProductId::Number(2), true));
        assert!(!s.set_selected(&ProductId::Number(99), true));
        assert_eq!(s.toggle_selected(&ProductId::Number(2)), Some(false));
        assert_eq!(s.toggle_selected(&ProductId::Number(99)), None);
    }

    #[test]
    fn scroll_request_is_consumed_once() {
        let mut s = session();
        s.settle(true);
        assert!(s.take_scroll_to_top());
        assert!(!s.take_scroll_to_top());
    }

    #[test]
    fn current_page_number_is_one_based() {
        let mut s = session();
        assert_eq!(s.current_page_number(), 1);
        s.view.promotions_first = 20;
        assert_eq!(s.current_page_number(), 3);
    }
}
