pub mod client;
pub mod errors;

pub use client::PanelApi;
pub use errors::ApiError;
