pub mod browser;
pub mod dashboard_image;
pub mod http;
pub mod rendering;
pub mod services;

pub use http::DashboardImageClient;
