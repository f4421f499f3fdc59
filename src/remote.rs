/// Identifies one load of a collection. Later loads have larger ids.
pub type LoadId = u64;

/// What is currently known about a collection fetched from the API.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

/// Load state of one collection plus the id of the newest load issued for it.
///
/// Only the completion of the newest load is applied, so a slow earlier fetch
/// can never overwrite a later one.
#[derive(Debug, Clone, PartialEq)]
pub struct Remote<T> {
    state: LoadState<T>,
    issued: LoadId,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            issued: 0,
        }
    }
}

impl<T> Remote<T> {
    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Items currently available. Empty unless the last load succeeded.
    pub fn items(&self) -> &[T] {
        match &self.state {
            LoadState::Ready(items) => items.as_slice(),
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Begin a new load. Completions of every earlier load become stale.
    pub fn start(&mut self) -> LoadId {
        self.issued += 1;
        self.state = LoadState::Loading;
        self.issued
    }

    /// Apply the completion of `load`. Returns `false` and leaves the state
    /// untouched when a newer load has been started since.
    pub fn finish(&mut self, load: LoadId, result: Result<Vec<T>, String>) -> bool {
        if load != self.issued {
            tracing::debug!(load, newest = self.issued, "dropping stale load");
            return false;
        }
        self.state = match result {
            Ok(items) => LoadState::Ready(items),
            Err(msg) => LoadState::Failed(msg),
        };
        true
    }
}
