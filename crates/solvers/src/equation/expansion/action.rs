/// Control actions supported by the expansion search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abandon the search.
    ///
    /// Without a bracket there is no estimate to return, so the search ends
    /// with [`Error::StoppedByObserver`](super::Error::StoppedByObserver).
    StopEarly,
}
