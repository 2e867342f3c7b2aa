use core::fmt;
use core::marker::PhantomData;

use vc_expected::{BadOptionalAccess, Transformer};

// -----------------------------------------------------------------------------
// RefOptional

/// A scoped container that either holds a `T` or nothing.
///
/// The payload is held by value, but the container is bounded by `'a`: `T`
/// may be a view such as `&'a str` or `&'a [u8]`, and combinators can only
/// produce payloads that also live for `'a`. To keep a result after the
/// viewed data is gone, go through [`DisallowRef`](crate::DisallowRef).
///
/// # Examples
///
/// ```
/// use vc_expected_ref::RefOptional;
///
/// let text = String::from("  padded  ");
/// let view = RefOptional::new(text.as_str()).transform(str::trim);
/// assert_eq!(*view.value(), "padded");
///
/// let len = view.transform(str::len);
/// assert_eq!(len.into_value(), 6);
///
/// let bytes = [1u8, 2, 3, 4];
/// let tail: RefOptional<'_, &[u8]> = RefOptional::new(&bytes[..]).and_then(|b| b.get(2..).into());
/// assert_eq!(tail.into_value(), &[3, 4]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct RefOptional<'a, T: 'a>(Option<T>, PhantomData<&'a ()>);

impl<'a, T: 'a> Default for RefOptional<'a, T> {
    #[inline(always)]
    fn default() -> Self {
        Self::none()
    }
}

impl<'a, T: 'a + fmt::Debug> fmt::Debug for RefOptional<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefOptional").field(&self.0).finish()
    }
}

impl<'a, T: 'a> RefOptional<'a, T> {
    /// Creates an absent container.
    #[inline(always)]
    pub const fn none() -> Self {
        Self(None, PhantomData)
    }

    /// Creates a container holding `value`.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self(Some(value), PhantomData)
    }

    /// Returns `true` if a value is held.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if nothing is held.
    #[inline(always)]
    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Returns a reference to the value, or [`BadOptionalAccess`] if absent.
    #[inline]
    pub const fn try_value(&self) -> Result<&T, BadOptionalAccess> {
        match &self.0 {
            Some(value) => Ok(value),
            None => Err(BadOptionalAccess),
        }
    }

    /// Returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics with [`BadOptionalAccess`] if absent.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(e) => e.handle_error(),
        }
    }

    /// Consumes the container and returns the value.
    ///
    /// This is the explicit narrowing conversion from `RefOptional<T>` to `T`.
    ///
    /// # Panics
    ///
    /// Panics with [`BadOptionalAccess`] if absent.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.0 {
            Some(value) => value,
            None => BadOptionalAccess.handle_error(),
        }
    }

    /// Returns the value, or `default` if absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self.0 {
            Some(value) => value,
            None => default,
        }
    }

    /// Returns the value, or computes one with `f` if absent.
    #[inline]
    pub fn value_or_else(self, f: impl FnOnce() -> T) -> T {
        match self.0 {
            Some(value) => value,
            None => f(),
        }
    }

    /// Maps the value with `f`, keeping absence.
    #[inline]
    pub fn transform<R: 'a>(self, f: impl FnOnce(T) -> R) -> RefOptional<'a, R> {
        match self.0 {
            Some(value) => RefOptional::new(f(value)),
            None => RefOptional::none(),
        }
    }

    /// [`transform`](Self::transform) with a [`Transformer`].
    ///
    /// ```
    /// use vc_expected::Transformer;
    /// use vc_expected_ref::RefOptional;
    ///
    /// struct Header;
    ///
    /// impl<'a> Transformer<&'a [u8]> for Header {
    ///     type Output = &'a [u8];
    ///
    ///     fn transform(&self, packet: &'a [u8]) -> &'a [u8] {
    ///         &packet[..2]
    ///     }
    /// }
    ///
    /// let packet = [0xCAu8, 0xFE, 0x00, 0x01];
    /// let header = RefOptional::new(&packet[..]).transform_with(Header);
    /// assert_eq!(header.into_value(), &[0xCA, 0xFE]);
    /// ```
    #[inline]
    pub fn transform_with<Tr>(self, tr: Tr) -> RefOptional<'a, Tr::Output>
    where
        Tr: Transformer<T>,
        Tr::Output: 'a,
    {
        match self.0 {
            Some(value) => RefOptional::new(tr.transform(value)),
            None => RefOptional::none(),
        }
    }

    /// Calls `f` with the value and returns its result, keeping absence.
    #[inline]
    pub fn and_then<R: 'a>(self, f: impl FnOnce(T) -> RefOptional<'a, R>) -> RefOptional<'a, R> {
        match self.0 {
            Some(value) => f(value),
            None => RefOptional::none(),
        }
    }

    /// [`and_then`](Self::and_then) with a [`Transformer`].
    #[inline]
    pub fn and_then_with<Tr, R>(self, tr: Tr) -> RefOptional<'a, R>
    where
        Tr: Transformer<T, Output = RefOptional<'a, R>>,
        R: 'a,
    {
        match self.0 {
            Some(value) => tr.transform(value),
            None => RefOptional::none(),
        }
    }

    /// Converts to a `core` [`Option`].
    #[inline(always)]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Borrows the payload as an `Option<&T>`.
    #[inline(always)]
    pub const fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<'a, T: 'a> From<T> for RefOptional<'a, T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<'a, T: 'a> From<Option<T>> for RefOptional<'a, T> {
    #[inline(always)]
    fn from(value: Option<T>) -> Self {
        Self(value, PhantomData)
    }
}

impl<'a, T: 'a> From<RefOptional<'a, T>> for Option<T> {
    #[inline(always)]
    fn from(value: RefOptional<'a, T>) -> Self {
        value.0
    }
}

// -----------------------------------------------------------------------------
// Tests
