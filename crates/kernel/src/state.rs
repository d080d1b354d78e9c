/// Snapshot of one screen's presentation state.
///
/// Exactly one variant holds at a time, so the illegal combinations a
/// loose `is_loading`/`error`/`data` field trio admits (loading with a
/// stale error, an error alongside a successful load) cannot be
/// represented. Snapshots are replaced wholesale, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// No intent has run yet.
    Idle,
    /// An intent is in flight; `last` carries the previously visible payload.
    Loading { last: Option<T> },
    /// The most recent intent finished with data.
    Loaded(T),
    /// The most recent intent failed; `last` is the payload from before it ran.
    Failed { message: String, last: Option<T> },
}

impl<T> ViewState<T> {
    /// The payload a renderer should show: current data when loaded,
    /// carried-over data while loading or after a failure.
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Idle => None,
            ViewState::Loading { last } => last.as_ref(),
            ViewState::Loaded(data) => Some(data),
            ViewState::Failed { last, .. } => last.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    /// User-displayable failure message, if the last intent failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl<T: Clone> ViewState<T> {
    /// The loading snapshot that precedes an intent's completion, carrying
    /// the currently visible payload over.
    pub(crate) fn to_loading(&self) -> ViewState<T> {
        ViewState::Loading {
            last: self.data().cloned(),
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_exposes_nothing() {
        let state: ViewState<Vec<u32>> = ViewState::Idle;
        assert!(state.data().is_none());
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn loading_carries_the_previous_payload() {
        let state = ViewState::Loaded(vec![1, 2]).to_loading();
        assert!(state.is_loading());
        assert_eq!(state.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn failed_keeps_data_visible_alongside_the_message() {
        let state = ViewState::Failed {
            message: "catalog unreachable".to_string(),
            last: Some(7),
        };
        assert_eq!(state.error(), Some("catalog unreachable"));
        assert_eq!(state.data(), Some(&7));
    }
}
