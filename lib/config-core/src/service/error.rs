use shared_types::{DomainId, TrustBundleId};
use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),
    #[error("Wrong parameters")]
    IncorrectParameters,
    #[error("Not updated")]
    NotUpdated,
    #[error("Already exists")]
    AlreadyExists,

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),
    #[error(transparent)]
    Repository(DataLayerError),
}

#[derive(Debug, thiserror::Error)]
pub enum EntityNotFoundError {
    #[error("Domain `{0}` not found")]
    Domain(DomainId),

    #[error("Trust bundle `{0}` not found")]
    TrustBundle(TrustBundleId),
}

#[derive(Debug, thiserror::Error)]
pub enum BusinessLogicError {
    #[error("Trust bundle `{trust_bundle_id}` is already associated with domain `{domain_id}`")]
    TrustBundleAlreadyAssociated {
        domain_id: DomainId,
        trust_bundle_id: TrustBundleId,
    },

    #[error("Trust bundle `{trust_bundle_id}` is not associated with domain `{domain_id}`")]
    TrustBundleNotAssociated {
        domain_id: DomainId,
        trust_bundle_id: TrustBundleId,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Domain001,
    TrustBundle001,
    Association001,
    Association002,

    Database,
    ResponseMapping,

    Unmapped,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Domain001 => "Domain not found",
            ErrorCode::TrustBundle001 => "Trust bundle not found",
            ErrorCode::Association001 => "Trust bundle already associated with domain",
            ErrorCode::Association002 => "Trust bundle not associated with domain",

            ErrorCode::Database => "Database error",

            ErrorCode::ResponseMapping => "Response mapping error",

            ErrorCode::Unmapped => "Unmapped error code",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::ResponseMapping,
            ServiceError::Repository(_) => ErrorCode::Database,

            ServiceError::IncorrectParameters
            | ServiceError::NotUpdated
            | ServiceError::AlreadyExists => ErrorCode::Unmapped,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Domain(_) => ErrorCode::Domain001,
            EntityNotFoundError::TrustBundle(_) => ErrorCode::TrustBundle001,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::TrustBundleAlreadyAssociated { .. } => ErrorCode::Association001,
            BusinessLogicError::TrustBundleNotAssociated { .. } => ErrorCode::Association002,
        }
    }
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        match value {
            DataLayerError::AlreadyExists => ServiceError::AlreadyExists,
            DataLayerError::IncorrectParameters => ServiceError::IncorrectParameters,
            DataLayerError::RecordNotUpdated => ServiceError::NotUpdated,
            DataLayerError::Db(_)
            | DataLayerError::MappingError
            | DataLayerError::ConstraintViolation(_)
            | DataLayerError::MissingRequiredRelation { .. } => Self::Repository(value),
        }
    }
}
