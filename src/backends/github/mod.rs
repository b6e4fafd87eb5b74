mod apiclient;
mod error;
mod models;

#[cfg(test)]
mod tests;

pub use apiclient::*;
pub use error::FetchError;
pub use models::*;
