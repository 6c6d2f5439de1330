pub mod client;
pub mod error;
pub mod loader;

pub use client::DashboardClient;
pub use error::{ClientError, LoadError};
pub use loader::{load_dashboard, DashboardData, LoadState, Loader};
