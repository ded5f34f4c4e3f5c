// src/exit.rs
//! Process exit statuses, one per error kind.

use std::process::ExitCode;

use line_counter_shared_kernel::{DomainError, LineCounterError, PresentationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
    Usage = 2,
    InvalidPath = 3,
    Decode = 4,
}

impl ExitStatus {
    pub fn for_error(err: &LineCounterError) -> Self {
        if err.is_decode() {
            return Self::Decode;
        }
        match err.root() {
            LineCounterError::Domain(DomainError::InvalidPath { .. }) => Self::InvalidPath,
            LineCounterError::Domain(_) | LineCounterError::Presentation(PresentationError::ArgumentConflict { .. }) => {
                Self::Usage
            }
            _ => Self::Failure,
        }
    }

    /// Like [`ExitStatus::for_error`] for errors that crossed the `anyhow` boundary.
    pub fn for_anyhow(err: &anyhow::Error) -> Self {
        err.downcast_ref::<LineCounterError>().map_or(Self::Failure, Self::for_error)
    }

    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}
