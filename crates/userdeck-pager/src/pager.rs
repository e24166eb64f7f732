use tracing::{debug, error, info};
use userdeck_source::{FetchError, UserSource};
use userdeck_types::User;

/// View state for paging through fetched users one at a time.
///
/// `index < users.len()` holds whenever `users` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    users: Vec<User>,
    index: usize,
    loading: bool,
    errored: bool,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            index: 0,
            loading: true,
            errored: false,
        }
    }

    /// Runs the one fetch of a session against `source` and stores the outcome.
    pub async fn initialize(&mut self, source: &dyn UserSource, count: u32) {
        self.begin_loading();
        let result = source.fetch_users(count).await;
        self.finish_loading(result);
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.errored = false;
    }

    pub fn finish_loading(&mut self, result: Result<Vec<User>, FetchError>) {
        match result {
            Ok(users) => self.set_loaded(users),
            Err(e) => {
                error!("Failed to load user data: {}", e);
                self.set_errored();
            }
        }
    }

    pub fn set_loaded(&mut self, users: Vec<User>) {
        info!(count = users.len(), "Loaded users");
        self.users = users;
        self.index = 0;
        self.loading = false;
        self.errored = false;
    }

    pub fn set_errored(&mut self) {
        self.users.clear();
        self.index = 0;
        self.loading = false;
        self.errored = true;
    }

    /// Moves to the previous user. Returns whether the index changed.
    pub fn go_previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        debug!(index = self.index, "Navigated to previous user");
        true
    }

    /// Moves to the next user. Returns whether the index changed.
    pub fn go_next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        debug!(index = self.index, "Navigated to next user");
        true
    }

    /// Moves forward up to `steps` users, stopping at the last one.
    /// Returns how many steps were taken.
    pub fn advance(&mut self, steps: usize) -> usize {
        let taken = steps.min(self.users.len().saturating_sub(self.index + 1));
        self.index += taken;
        taken
    }

    pub fn has_previous(&self) -> bool {
        !self.users.is_empty() && self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.users.len()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.users.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_errored(&self) -> bool {
        self.errored
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}
