use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Raised when the value of an absent `Optional` is read.
///
/// This is a programming error, not a domain error: the partial accessors
/// panic with it, while [`try_value`](crate::Optional::try_value) returns it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("bad optional access: the container holds no value")]
pub struct BadOptionalAccess;

/// Raised when an `Expected` is read against its discriminant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BadExpectedAccess {
    #[error("bad expected access: read the value of a container holding an error")]
    ValueOnError,

    #[error("bad expected access: read the error of a container holding a value")]
    ErrorOnValue,
}

/// Any contract violation raised by this crate or the borrowing containers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AccessError {
    #[error("{0}")]
    Optional(BadOptionalAccess),

    #[error("{0}")]
    Expected(BadExpectedAccess),
}

impl AccessError {
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub fn handle_error(&self) -> ! {
        report(self)
    }
}

#[cold]
#[track_caller]
fn report(error: &dyn core::fmt::Display) -> ! {
    crate::cfg_debug! {
        let location = core::panic::Location::caller();
        log::error!("contract violation at {location}: {error}");
    }
    panic!("{error}");
}

macro_rules! impl_from {
    ($name:ident, $variant:ident) => {
        impl From<AccessError> for $name {
            #[inline]
            #[track_caller]
            fn from(value: AccessError) -> Self {
                if let AccessError::$variant(ret) = value {
                    ret
                } else {
                    value.handle_error();
                }
            }
        }

        impl From<$name> for AccessError {
            #[inline]
            fn from(value: $name) -> Self {
                AccessError::$variant(value)
            }
        }

        impl $name {
            /// Panics with this contract violation.
            #[cold]
            #[inline(never)]
            #[track_caller]
            pub fn handle_error(&self) -> ! {
                report(self)
            }

            #[inline]
            pub fn promote(self) -> AccessError {
                AccessError::$variant(self)
            }
        }
    };
}

impl_from!(BadOptionalAccess, Optional);
impl_from!(BadExpectedAccess, Expected);

// -----------------------------------------------------------------------------
// Tests
