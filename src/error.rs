use thiserror::Error;

use crate::face::{Face, FaceKind};

pub type Result<T> = ::core::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeConstraintViolation,
    InvalidValue,
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("a die needs at least one face")]
    EmptyFaces,
    #[error("faces must share one kind: expected {expected}, found {found}")]
    MixedFaces { expected: FaceKind, found: FaceKind },
    #[error("duplicate face {0}")]
    DuplicateFace(Face),
    #[error("face {0} not found")]
    FaceNotFound(Face),
    #[error("weight {0:?} is not numeric")]
    NonNumericWeight(String),
    #[error("weight must be non-negative, got {0}")]
    NegativeWeight(f64),
    #[error("weight must be finite, got {0}")]
    NonFiniteWeight(f64),
    #[error("all weights are zero")]
    AllWeightsZero,
    #[error("number of rolls must be a positive integer")]
    ZeroRolls,
    #[error("unknown form {0:?}, expected \"wide\" or \"narrow\"")]
    UnknownForm(String),
    #[error("a game needs at least one die")]
    NoDice,
    #[error("die {die} does not share the face set of die 0")]
    MismatchedFaces { die: usize },
    #[error("no game has been played yet")]
    NotPlayed,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MixedFaces { .. } | Error::NonNumericWeight(_) => {
                ErrorKind::TypeConstraintViolation
            }
            Error::FaceNotFound(_) => ErrorKind::NotFound,
            Error::EmptyFaces
            | Error::DuplicateFace(_)
            | Error::NegativeWeight(_)
            | Error::NonFiniteWeight(_)
            | Error::AllWeightsZero
            | Error::ZeroRolls
            | Error::UnknownForm(_)
            | Error::NoDice
            | Error::MismatchedFaces { .. }
            | Error::NotPlayed => ErrorKind::InvalidValue,
        }
    }
}
