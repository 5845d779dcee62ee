// Adapters layer: concrete backends behind the `Backend` port.

pub mod http;
pub mod mock;

pub use http::HttpBackend;
pub use mock::MockBackend;
