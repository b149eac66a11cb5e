//! REN Data Hub access: the HTTP client and the category filter.

mod client;
mod filter;

pub use client::Client;
#[cfg(test)]
pub(crate) use client::month_query_path;
pub use filter::filter_records;
