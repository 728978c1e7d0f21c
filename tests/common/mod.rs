use catch_rail::AnyError;
use core::fmt;

/// An "operation failed at path" error wrapping an underlying cause.
#[derive(Debug)]
pub struct PathError {
    pub op: &'static str,
    pub path: &'static str,
    pub err: AnyError,
}

impl PathError {
    pub fn new(op: &'static str, path: &'static str, err: AnyError) -> Self {
        Self { op, path, err }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.op, self.path, self.err)
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.err.as_error())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeout {
    pub millis: u64,
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.millis)
    }
}

impl std::error::Error for Timeout {}
