mod theme;
mod user;

pub use theme::*;
pub use user::*;

/// Number of users requested when neither the config nor the CLI says otherwise.
pub const DEFAULT_USER_COUNT: u32 = 80;

/// Minimum horizontal drag distance, exclusive, that counts as a swipe.
pub const SWIPE_THRESHOLD: i32 = 50;

pub const DEFAULT_ENDPOINT: &str = "https://random-data-api.com/api/users/random_user";
