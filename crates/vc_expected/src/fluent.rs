//! Method-call style constructors for the containers.
//!
//! [`ValueExt`] is implemented for every sized type, so it lives in its own
//! module and must be imported explicitly.
//!
//! ```
//! use vc_expected::fluent::ValueExt;
//! use vc_expected::{Expected, Optional};
//!
//! let o: Optional<u8> = 3.into_optional();
//! let e: Expected<u8, &str> = 3.as_expected().with_error_being();
//! let u: Expected<u8, &str> = "bad".into_unexpected().into();
//!
//! assert!(o.has_value() && e.has_value() && u.has_error());
//! ```

use crate::{Expected, Optional, Unexpected};

// -----------------------------------------------------------------------------
// ValueExt

/// Wraps any value into one of the containers.
pub trait ValueExt: Sized {
    /// Same as [`Optional::new`].
    fn into_optional(self) -> Optional<Self>;

    /// Same as [`Expected::new`].
    fn into_expected<E>(self) -> Expected<Self, E>;

    /// Same as [`Unexpected::new`].
    fn into_unexpected(self) -> Unexpected<Self>;

    /// Starts building the value case of an [`Expected`] whose error type
    /// is named later, with [`ExpectedProxy::with_error_being`].
    fn as_expected(self) -> ExpectedProxy<Self>;
}

impl<T> ValueExt for T {
    #[inline(always)]
    fn into_optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    #[inline(always)]
    fn into_expected<E>(self) -> Expected<Self, E> {
        Expected::new(self)
    }

    #[inline(always)]
    fn into_unexpected(self) -> Unexpected<Self> {
        Unexpected::new(self)
    }

    #[inline(always)]
    fn as_expected(self) -> ExpectedProxy<Self> {
        ExpectedProxy(self)
    }
}

// -----------------------------------------------------------------------------
// ExpectedProxy

/// A value waiting for the error type of its [`Expected`].
#[must_use = "call `with_error_being` to build the `Expected`"]
#[derive(Debug, Clone, Copy)]
pub struct ExpectedProxy<T>(T);

impl<T> ExpectedProxy<T> {
    /// Builds the value case of `Expected<T, E>`.
    ///
    /// ```
    /// use vc_expected::fluent::ValueExt;
    ///
    /// let e = 7.as_expected().with_error_being::<&str>();
    /// assert_eq!(e.into_value(), 7);
    /// ```
    #[inline(always)]
    pub fn with_error_being<E>(self) -> Expected<T, E> {
        Expected::new(self.0)
    }
}
