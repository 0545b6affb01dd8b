mod bootstrap;
pub use bootstrap::Bootstrap;
