//! Service error taxonomy.

use crate::geocode::GeocodeError;
use crate::planner::PlanError;
use crate::rides::RidesError;
use crate::store::{RecordKind, StoreError};
use crate::trip::{AdvanceError, TransitionError};

/// Errors surfaced across the service boundary.
///
/// Collaborator failures abort the current operation atomically and no
/// partial plan or partial transition is ever persisted, so callers
/// can always retry the whole operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A referenced location or trip does not exist
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: String },

    /// A geocoding, estimate or ride-request collaborator failed
    #[error("upstream unavailable: {0}")]
    Upstream(String),

    /// The request itself is malformed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A concurrent update won the race for the same trip
    #[error("conflicting update: {0}")]
    Conflict(String),

    /// A stored trip record violates the state invariants
    #[error("inconsistent trip record: {0}")]
    Inconsistent(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, id } => ServiceError::NotFound { kind, id },
            StoreError::Conflict { .. } => ServiceError::Conflict(err.to_string()),
            StoreError::Unavailable(_) => ServiceError::Upstream(err.to_string()),
        }
    }
}

impl From<GeocodeError> for ServiceError {
    fn from(err: GeocodeError) -> Self {
        ServiceError::Upstream(err.to_string())
    }
}

impl From<RidesError> for ServiceError {
    fn from(err: RidesError) -> Self {
        ServiceError::Upstream(err.to_string())
    }
}

impl From<PlanError> for ServiceError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::InvalidRequest(message) => ServiceError::InvalidInput(message),
            PlanError::Estimate { .. } => ServiceError::Upstream(err.to_string()),
        }
    }
}

impl From<TransitionError> for ServiceError {
    fn from(err: TransitionError) -> Self {
        ServiceError::Inconsistent(err.to_string())
    }
}

impl From<AdvanceError> for ServiceError {
    fn from(err: AdvanceError) -> Self {
        match err {
            AdvanceError::Store(e) => e.into(),
            AdvanceError::Rides(e) => e.into(),
            AdvanceError::State(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err: ServiceError = StoreError::NotFound {
            kind: RecordKind::Trip,
            id: "abc".to_string(),
        }
        .into();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[test]
    fn store_conflict_maps_to_conflict() {
        let err: ServiceError = StoreError::Conflict {
            id: "abc".to_string(),
            expected: 1,
            found: 2,
        }
        .into();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn plan_validation_maps_to_invalid_input() {
        let err: ServiceError = PlanError::InvalidRequest("empty".to_string()).into();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn rides_failure_maps_to_upstream() {
        let err: ServiceError = RidesError::NoEstimate.into();
        assert!(matches!(err, ServiceError::Upstream(_)));
    }

    #[test]
    fn transition_failure_maps_to_inconsistent() {
        let err: ServiceError = AdvanceError::State(TransitionError::MissingCursor).into();
        assert!(matches!(err, ServiceError::Inconsistent(_)));
    }
}
