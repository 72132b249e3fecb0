pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::cart_service::{CartError, CartService};
pub use domain::cart::{CartItem, NewCartItem};
pub use domain::product::{ProductGateway, ProductRecord};
pub use infra::product::HttpProductGateway;
pub use storage::cart::{CartStore, PostgresCartStore};
