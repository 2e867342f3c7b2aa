// -----------------------------------------------------------------------------
// Unexpected

/// A tag carrying only an error payload.
///
/// It exists so that building the error case of an [`Expected`] is never
/// ambiguous with building the value case, even when both payloads share a
/// type.
///
/// # Examples
///
/// ```
/// use vc_expected::{Expected, Unexpected};
///
/// let e: Expected<u32, u32> = Unexpected::new(7).into();
/// assert!(e.has_error());
/// assert_eq!(*e.error(), 7);
/// ```
///
/// [`Expected`]: crate::Expected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Unexpected<E>(E);

impl<E> Unexpected<E> {
    /// Wraps `error`.
    #[inline(always)]
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    /// Returns a reference to the error payload.
    #[inline(always)]
    pub const fn error(&self) -> &E {
        &self.0
    }

    /// Returns the error payload.
    #[inline(always)]
    pub fn into_error(self) -> E {
        self.0
    }
}

/// Shorthand for [`Unexpected::new`].
///
/// ```
/// use vc_expected::{Expected, unexpected};
///
/// fn check(x: i32) -> Expected<i32, &'static str> {
///     if x < 0 {
///         return unexpected("negative").into();
///     }
///     Expected::new(x)
/// }
///
/// assert!(check(1).has_value());
/// assert_eq!(*check(-1).error(), "negative");
/// ```
#[inline(always)]
pub const fn unexpected<E>(error: E) -> Unexpected<E> {
    Unexpected(error)
}
