/// Type-state for async data loads
///
/// Replaces separate is_loading/error flags with one enum so the dashboard
/// fetch can only ever be in a single state.
#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    /// No load attempted yet
    Pending,

    /// Fetch in flight
    Loading,

    /// Successfully loaded
    Loaded(T),

    /// Failed with an error message
    Error(String),
}

impl<T> DataState<T> {
    /// Returns true while the fetch is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if loaded, None otherwise
    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if failed, None otherwise
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
