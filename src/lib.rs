//! # Simple and type-safe client for the GleSYS domain API.
//!
//! Implements an easy-to-use client for managing domains and their DNS
//! records through the [GleSYS API]. Parameters and responses are plain Rust
//! types, and domain names are converted to their ASCII form before they're
//! sent, so internationalized names can be used directly.
//!
//! ## Examples
//!
//! ```no_run
//! use glesys::record::{AddDomainRecordParams, RecordType};
//! use glesys::{Client, Context};
//!
//! let client = Client::builder()
//!     .project("<PROJECT>")
//!     .apikey("<APIKEY>")
//!     .build()
//!     .unwrap();
//!
//! let ctx = Context::background();
//! let domains = client.domains();
//!
//! for domain in domains.list(&ctx).unwrap() {
//!     println!("{} has {} records", domain.domain_name, domain.record_count);
//! }
//!
//! let params = AddDomainRecordParams::new("räksmörgås.se", "www", RecordType::A, "127.0.0.1");
//! let record = domains.add_record(&ctx, params).unwrap();
//! println!("created record {}", record.record_id);
//! ```
//!
//! Any type implementing [Transport] can stand in for [Client], which is how
//! the services are tested without a network.
//!
//! [GleSYS API]: https://github.com/GleSYS/API

mod client;
mod context;
pub mod domain;
mod errors;
mod payload;
pub mod record;
mod service;
mod utils;

pub use client::*;
pub use context::*;
pub use errors::*;
pub(crate) use payload::*;
pub use service::*;
pub use utils::to_ascii;
