use crate::equation::{bisection, expansion};

/// Control actions supported by goal seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search.
    ///
    /// During bisection the point just evaluated is returned with
    /// [`Status::StoppedByObserver`](super::Status::StoppedByObserver).
    /// During the bracket search there is no estimate yet, so the call fails
    /// with [`Error::StoppedByObserver`](super::Error::StoppedByObserver).
    StopEarly,
}

impl From<Action> for bisection::Action {
    fn from(action: Action) -> Self {
        match action {
            Action::StopEarly => bisection::Action::StopEarly,
        }
    }
}

impl From<Action> for expansion::Action {
    fn from(action: Action) -> Self {
        match action {
            Action::StopEarly => expansion::Action::StopEarly,
        }
    }
}
