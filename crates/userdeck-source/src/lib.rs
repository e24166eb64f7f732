//! Remote source of synthetic user profiles.
//!
//! A source performs exactly one HTTP request per [`UserSource::fetch_users`]
//! call. There is no retry and no caching; failure is all-or-nothing.

mod error;
mod remote;

pub use error::FetchError;
pub use remote::RemoteUserSource;

use async_trait::async_trait;
use userdeck_types::User;

#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetches up to `count` users in the order the source returns them.
    async fn fetch_users(&self, count: u32) -> Result<Vec<User>, FetchError>;
}
