pub mod config;
pub mod error;
pub mod validate;
pub mod view;

pub use config::{Client, Config, ServiceRecord, Settings, SettingsStore, State};
pub use error::{PortalError, Result};
pub use view::{aggregate_by_client, ClientAggregate, PageView, ViewFilter};
