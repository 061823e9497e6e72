//! Load order resolution for RimWorld mods.
//!
//! The usual flow is to gather every [`Package`] into a [`WorkingSet`] and hand it to
//! [`load_order::ResolverBuilder`], see [`load_order`] for details.

pub mod error;
pub use error::Result;
pub use error::Error;

pub mod config;
pub use config::Config;

pub mod host;
pub use host::BaseContent;
pub use host::HostVersion;

pub mod package;
pub use package::Package;
pub use package::PackageId;

pub mod working_set;
pub use working_set::WorkingSet;

pub mod load_order;
