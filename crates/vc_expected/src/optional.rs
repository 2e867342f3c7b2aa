use crate::{BadOptionalAccess, Transformer};

// -----------------------------------------------------------------------------
// Optional

/// An owning container that either holds a `T` or nothing.
///
/// The default state is absent and does not require `T: Default`.
///
/// # Examples
///
/// ```
/// use vc_expected::Optional;
///
/// let present = Optional::new(10);
/// assert!(present.has_value());
/// assert_eq!(*present.value(), 10);
///
/// let absent = Optional::<i32>::none();
/// assert!(absent.is_absent());
/// assert_eq!(absent.value_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Optional<T>(Option<T>);

impl<T> Default for Optional<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::none()
    }
}

impl<T> Optional<T> {
    /// Creates an absent container.
    #[inline(always)]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Creates a container holding `value`.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// Returns `true` if a value is held.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if no value is held.
    #[inline(always)]
    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Returns a reference to the value, or [`BadOptionalAccess`] if absent.
    ///
    /// ```
    /// use vc_expected::{BadOptionalAccess, Optional};
    ///
    /// assert_eq!(Optional::new(1).try_value(), Ok(&1));
    /// assert_eq!(Optional::<i32>::none().try_value(), Err(BadOptionalAccess));
    /// ```
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
    /// This is the explicit narrowing conversion from `Optional<T>` to `T`.
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

    /// Returns the value, or computes one from `f` if absent.
    #[inline]
    pub fn value_or_else(self, f: impl FnOnce() -> T) -> T {
        match self.0 {
            Some(value) => value,
            None => f(),
        }
    }

    /// Maps the value with `f`, keeping absence.
    ///
    /// `f` is never called on an absent container.
    ///
    /// ```
    /// use vc_expected::Optional;
    ///
    /// assert_eq!(Optional::new(2).transform(|x| x * 10), Optional::new(20));
    /// assert!(Optional::<i32>::none().transform(|x| x * 10).is_absent());
    /// ```
    #[inline]
    pub fn transform<R>(self, f: impl FnOnce(T) -> R) -> Optional<R> {
        match self.0 {
            Some(value) => Optional::new(f(value)),
            None => Optional::none(),
        }
    }

    /// [`transform`](Self::transform) with a [`Transformer`].
    #[inline]
    pub fn transform_with<Tr: Transformer<T>>(self, tr: Tr) -> Optional<Tr::Output> {
        match self.0 {
            Some(value) => Optional::new(tr.transform(value)),
            None => Optional::none(),
        }
    }

    /// Calls `f` with the value and returns its result, keeping absence.
    ///
    /// `f` may keep the payload type (`R == T`) for fluent chains or change it.
    ///
    /// ```
    /// use vc_expected::Optional;
    ///
    /// fn half(x: u32) -> Optional<u32> {
    ///     if x % 2 == 0 { Optional::new(x / 2) } else { Optional::none() }
    /// }
    ///
    /// assert_eq!(Optional::new(8).and_then(half).and_then(half), Optional::new(2));
    /// assert!(Optional::new(6).and_then(half).and_then(half).is_absent());
    /// ```
    #[inline]
    pub fn and_then<R>(self, f: impl FnOnce(T) -> Optional<R>) -> Optional<R> {
        match self.0 {
            Some(value) => f(value),
            None => Optional::none(),
        }
    }

    /// [`and_then`](Self::and_then) with a [`Transformer`].
    #[inline]
    pub fn and_then_with<Tr, R>(self, tr: Tr) -> Optional<R>
    where
        Tr: Transformer<T, Output = Optional<R>>,
    {
        match self.0 {
            Some(value) => tr.transform(value),
            None => Optional::none(),
        }
    }

    /// Converts to a `core` [`Option`].
    #[inline(always)]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Borrows the value as an `Option<&T>`.
    #[inline(always)]
    pub const fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T> From<T> for Optional<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline(always)]
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline(always)]
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

// -----------------------------------------------------------------------------
// Tests
