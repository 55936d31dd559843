use crate::store::{StoreUri, DENIED_RESULT};

/// Outcome of a mutating repository call
///
/// Policy denial is kept apart from failure so callers can tell "not
/// permitted" from "something went wrong".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperationResult<T> {
    Success(T),
    Failure,
    PolicyError,
}

impl<T> OperationResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, OperationResult::Failure)
    }

    pub fn is_policy_error(&self) -> bool {
        matches!(self, OperationResult::PolicyError)
    }

    /// The success payload, if any
    pub fn success(self) -> Option<T> {
        match self {
            OperationResult::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        match self {
            OperationResult::Success(value) => OperationResult::Success(f(value)),
            OperationResult::Failure => OperationResult::Failure,
            OperationResult::PolicyError => OperationResult::PolicyError,
        }
    }
}

/// Translate the address returned by an insert
///
/// No address is a failure, the empty address is a policy denial, and
/// anything else must end in a positive row id.
pub(crate) fn from_insert(uri: Option<&StoreUri>) -> OperationResult<i64> {
    let Some(uri) = uri else {
        return OperationResult::Failure;
    };
    if uri.is_empty() {
        return OperationResult::PolicyError;
    }
    match uri.last_path_segment().and_then(|s| s.parse::<i64>().ok()) {
        Some(id) if id > 0 => OperationResult::Success(id),
        _ => OperationResult::Failure,
    }
}

/// Translate the row count returned by an update or delete
pub(crate) fn from_count(count: i64) -> OperationResult<i64> {
    match count {
        DENIED_RESULT => OperationResult::PolicyError,
        1 => OperationResult::Success(1),
        _ => OperationResult::Failure,
    }
}
