mod pager;
mod swipe;

pub use pager::Pager;
pub use swipe::{Swipe, SwipeTracker};
