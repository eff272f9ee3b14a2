use std::error::Error as StdError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A hand did not carry exactly [`LANDMARK_COUNT`](crate::hand::LANDMARK_COUNT) points.
    LandmarkCount { expected: usize, found: usize },
    /// The frame held more hands than the tracker is configured for.
    TooManyHands { max: usize, found: usize },
    /// A flat landmark buffer could not be split into whole hands.
    FlatBufferLength { len: usize, stride: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::LandmarkCount { expected, found } => {
                write!(f, "hand has {} landmarks, expected {}", found, expected)
            }
            Error::TooManyHands { max, found } => {
                write!(f, "frame has {} hands, at most {} supported", found, max)
            }
            Error::FlatBufferLength { len, stride } => write!(
                f,
                "flat landmark buffer of length {} is not a multiple of {}",
                len, stride
            ),
        }
    }
}

impl StdError for Error {}
