//! `addrgen` generates random identity/address records for a chosen country
//! by repeatedly calling the meiguodizhi.com JSON API.
//!
//! The pipeline is strictly sequential:
//! - [`AddressClient::fetch`] — one POST with bounded retry
//! - [`run_batch`] — N fetches with a fixed inter-request delay
//! - [`save_records`] — pretty-printed JSON array output

mod batch;
mod client;
mod countries;
mod error;
mod options;
mod persist;
mod wire;

pub use batch::{run_batch, BatchSummary};
pub use client::{AddressClient, API_URL};
pub use countries::{lookup, Country, COUNTRIES, DEFAULT_COUNTRY};
pub use error::AddrGenError;
pub use options::ClientOptions;
pub use persist::save_records;
pub use wire::AddressRecord;

pub type Result<T> = std::result::Result<T, AddrGenError>;
