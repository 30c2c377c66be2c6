pub mod countdown;
pub mod purchase_form;
pub mod share_dashboard;
pub mod stores;

pub use countdown::*;
pub use purchase_form::*;
pub use share_dashboard::*;
pub use stores::*;
