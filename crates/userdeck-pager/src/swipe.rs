use userdeck_types::SWIPE_THRESHOLD;

use crate::Pager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Drag toward smaller x; shows the next user.
    Left,
    /// Drag toward larger x; shows the previous user.
    Right,
}

impl Swipe {
    /// Classifies a signed displacement `start - end`.
    pub fn from_displacement(displacement: i32) -> Option<Self> {
        if displacement > SWIPE_THRESHOLD {
            Some(Swipe::Left)
        } else if displacement < -SWIPE_THRESHOLD {
            Some(Swipe::Right)
        } else {
            None
        }
    }

    /// Navigates `pager`, still subject to its bounds. Returns whether the index changed.
    pub fn apply(self, pager: &mut Pager) -> bool {
        match self {
            Swipe::Left => pager.go_next(),
            Swipe::Right => pager.go_previous(),
        }
    }
}

/// Tracks one horizontal drag from press to release.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<i32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: i32) {
        self.start = Some(x);
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Ends the drag at `x`. Returns `None` for a tap or a release with no press.
    pub fn end(&mut self, x: i32) -> Option<Swipe> {
        let start = self.start.take()?;
        Swipe::from_displacement(start - x)
    }
}
