//! Domain types for the dashboard core.
//!
//! - [`AssetClass`]: Closed set of asset classes
//! - [`Holding`]: A symbol with its portfolio weight
//! - [`ProfileId`]: The selectable investor profiles

mod asset_class;
mod holding;
mod profile;

pub use asset_class::AssetClass;
pub use holding::Holding;
pub use profile::ProfileId;
