//! A client for the Say Their Names API.
//!
//! Resources (people, donations, news, search results) come back as
//! [`ResourcePage`]s linked to each other through `next`/`prev` URLs.
//!
//! ```no_run
//! # async fn run() -> Result<(), say_their_names_api::FetchError> {
//! use say_their_names_api::{Environment, StnClientBuilder};
//!
//! let client = StnClientBuilder::from_environment(&Environment::from_env()).build()?;
//! let first = client.donations().await?;
//! let pager = client.pager(first);
//! let mut pages = pager.walk();
//! while let Some(page) = pages.next().await {
//!     for donation in &page?.all {
//!         println!("{}", donation.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod donation;
pub mod errors;
pub mod news;
pub mod page;
pub mod pagination;
pub mod person;
pub mod query;
pub mod section;

pub use client::{StnClient, StnClientBuilder};
pub use config::Environment;
pub use donation::{CallToAction, Donation, DonationType};
pub use errors::{DecodeError, FetchError};
pub use news::News;
pub use page::{Link, ResourcePage};
pub use pagination::{PageCursor, Pager};
pub use person::{Person, PersonImage};
pub use query::build_url;
pub use section::PersonSection;
