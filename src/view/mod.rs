//! Client/service view model: grouping, search, pagination and the
//! presentation rules the rendering layer consumes.

mod aggregate;
mod columns;
mod filter;
mod format;
mod status;
mod summary;

pub use aggregate::{aggregate_by_client, ClientAggregate};
pub use columns::{Column, ColumnVisibility};
pub use filter::{PageView, Searchable, ViewFilter};
pub use format::{format_date, format_money};
pub use status::{is_before_month, is_urgent};
pub use summary::DashboardSummary;
