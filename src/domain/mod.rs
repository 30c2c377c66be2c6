pub mod errors;
pub mod logging;
pub mod navigation;
pub mod portfolio;
pub mod shares;
pub mod viewport;
