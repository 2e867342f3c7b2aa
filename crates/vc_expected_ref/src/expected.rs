use core::fmt;
use core::marker::PhantomData;

use vc_expected::{BadExpectedAccess, Transformer, Unexpected};

// -----------------------------------------------------------------------------
// RefExpected

/// A scoped container holding either a value `V` or an error `E`.
///
/// Both payloads are held by value and bounded by `'a`, so either side may be
/// a view into borrowed data. As with the owning `Expected`, value-side
/// combinators keep the error type and error-side combinators keep the value
/// type.
///
/// # Examples
///
/// ```
/// use vc_expected::unexpected;
/// use vc_expected_ref::RefExpected;
///
/// fn field<'a>(line: &'a str, key: &str) -> RefExpected<'a, &'a str, &'static str> {
///     line.split(';')
///         .filter_map(|kv| kv.split_once('='))
///         .find(|(k, _)| *k == key)
///         .map(|(_, v)| RefExpected::new(v))
///         .unwrap_or_else(|| unexpected("missing field").into())
/// }
///
/// let line = "name=vc;size=12";
/// assert_eq!(*field(line, "name").value(), "vc");
/// assert_eq!(*field(line, "kind").error(), "missing field");
///
/// let size = field(line, "size").and_then(|v| match v.parse::<u32>() {
///     Ok(n) => RefExpected::new(n),
///     Err(_) => unexpected("not a number").into(),
/// });
/// assert_eq!(size.into_value(), 12);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct RefExpected<'a, V: 'a, E: 'a>(Result<V, E>, PhantomData<&'a ()>);

impl<'a, V: 'a, E: 'a + Default> Default for RefExpected<'a, V, E> {
    /// Returns the error case holding `E::default()`.
    fn default() -> Self {
        crate::cfg_debug! {
            log::debug!(
                "defaulted RefExpected<{}, {}> holds the default error",
                core::any::type_name::<V>(),
                core::any::type_name::<E>(),
            );
        }
        Self(Err(E::default()), PhantomData)
    }
}

impl<'a, V: 'a + fmt::Debug, E: 'a + fmt::Debug> fmt::Debug for RefExpected<'a, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefExpected").field(&self.0).finish()
    }
}

impl<'a, V: 'a, E: 'a> RefExpected<'a, V, E> {
    #[inline(always)]
    const fn from_result(result: Result<V, E>) -> Self {
        Self(result, PhantomData)
    }

    /// Creates the value case.
    #[inline(always)]
    pub const fn new(value: V) -> Self {
        Self::from_result(Ok(value))
    }

    /// Creates the error case from an [`Unexpected`] tag.
    #[inline(always)]
    pub fn from_unexpected(unexpected: Unexpected<E>) -> Self {
        Self::from_result(Err(unexpected.into_error()))
    }

    /// Returns `true` if a value is held.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.0.is_ok()
    }

    /// Returns `true` if an error is held.
    #[inline(always)]
    pub const fn has_error(&self) -> bool {
        self.0.is_err()
    }

    /// Returns a reference to the value, or
    /// [`BadExpectedAccess::ValueOnError`].
    #[inline]
    pub const fn try_value(&self) -> Result<&V, BadExpectedAccess> {
        match &self.0 {
            Ok(value) => Ok(value),
            Err(_) => Err(BadExpectedAccess::ValueOnError),
        }
    }

    /// Returns a reference to the error, or
    /// [`BadExpectedAccess::ErrorOnValue`].
    #[inline]
    pub const fn try_error(&self) -> Result<&E, BadExpectedAccess> {
        match &self.0 {
            Ok(_) => Err(BadExpectedAccess::ErrorOnValue),
            Err(error) => Ok(error),
        }
    }

    /// Returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics with [`BadExpectedAccess::ValueOnError`] if an error is held.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &V {
        match self.try_value() {
            Ok(value) => value,
            Err(e) => e.handle_error(),
        }
    }

    /// Returns a reference to the error.
    ///
    /// # Panics
    ///
    /// Panics with [`BadExpectedAccess::ErrorOnValue`] if a value is held.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self.try_error() {
            Ok(error) => error,
            Err(e) => e.handle_error(),
        }
    }

    /// Consumes the container and returns the value; the explicit narrowing
    /// conversion to `V`.
    ///
    /// # Panics
    ///
    /// Panics with [`BadExpectedAccess::ValueOnError`] if an error is held.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> V {
        match self.0 {
            Ok(value) => value,
            Err(_) => BadExpectedAccess::ValueOnError.handle_error(),
        }
    }

    /// Consumes the container and returns the error.
    ///
    /// # Panics
    ///
    /// Panics with [`BadExpectedAccess::ErrorOnValue`] if a value is held.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.0 {
            Ok(_) => BadExpectedAccess::ErrorOnValue.handle_error(),
            Err(error) => error,
        }
    }

    /// Returns the value, or `default` if an error is held.
    #[inline]
    pub fn value_or(self, default: V) -> V {
        match self.0 {
            Ok(value) => value,
            Err(_) => default,
        }
    }

    /// Returns the error, or `default` if a value is held.
    #[inline]
    pub fn error_or(self, default: E) -> E {
        match self.0 {
            Ok(_) => default,
            Err(error) => error,
        }
    }

    /// Maps the value with `f`; an error passes through untouched.
    #[inline]
    pub fn transform<R: 'a>(self, f: impl FnOnce(V) -> R) -> RefExpected<'a, R, E> {
        match self.0 {
            Ok(value) => RefExpected::new(f(value)),
            Err(error) => RefExpected::from_result(Err(error)),
        }
    }

    /// [`transform`](Self::transform) with a [`Transformer`].
    #[inline]
    pub fn transform_with<Tr>(self, tr: Tr) -> RefExpected<'a, Tr::Output, E>
    where
        Tr: Transformer<V>,
        Tr::Output: 'a,
    {
        match self.0 {
            Ok(value) => RefExpected::new(tr.transform(value)),
            Err(error) => RefExpected::from_result(Err(error)),
        }
    }

    /// Maps the error with `f`; a value passes through untouched.
    #[inline]
    pub fn transform_error<R: 'a>(self, f: impl FnOnce(E) -> R) -> RefExpected<'a, V, R> {
        match self.0 {
            Ok(value) => RefExpected::new(value),
            Err(error) => RefExpected::from_result(Err(f(error))),
        }
    }

    /// [`transform_error`](Self::transform_error) with a [`Transformer`].
    #[inline]
    pub fn transform_error_with<Tr>(self, tr: Tr) -> RefExpected<'a, V, Tr::Output>
    where
        Tr: Transformer<E>,
        Tr::Output: 'a,
    {
        match self.0 {
            Ok(value) => RefExpected::new(value),
            Err(error) => RefExpected::from_result(Err(tr.transform(error))),
        }
    }

    /// Calls `f` with the value; on the error case the original error is
    /// returned.
    #[inline]
    pub fn and_then<R: 'a>(
        self,
        f: impl FnOnce(V) -> RefExpected<'a, R, E>,
    ) -> RefExpected<'a, R, E> {
        match self.0 {
            Ok(value) => f(value),
            Err(error) => RefExpected::from_result(Err(error)),
        }
    }

    /// [`and_then`](Self::and_then) with a [`Transformer`].
    #[inline]
    pub fn and_then_with<Tr, R>(self, tr: Tr) -> RefExpected<'a, R, E>
    where
        Tr: Transformer<V, Output = RefExpected<'a, R, E>>,
        R: 'a,
    {
        match self.0 {
            Ok(value) => tr.transform(value),
            Err(error) => RefExpected::from_result(Err(error)),
        }
    }

    /// Calls `f` with the error; on the value case the value passes through.
    #[inline]
    pub fn or_else<R: 'a>(
        self,
        f: impl FnOnce(E) -> RefExpected<'a, V, R>,
    ) -> RefExpected<'a, V, R> {
        match self.0 {
            Ok(value) => RefExpected::new(value),
            Err(error) => f(error),
        }
    }

    /// [`or_else`](Self::or_else) with a [`Transformer`].
    #[inline]
    pub fn or_else_with<Tr, R>(self, tr: Tr) -> RefExpected<'a, V, R>
    where
        Tr: Transformer<E, Output = RefExpected<'a, V, R>>,
        R: 'a,
    {
        match self.0 {
            Ok(value) => RefExpected::new(value),
            Err(error) => tr.transform(error),
        }
    }

    /// Converts to a `core` [`Result`].
    #[inline(always)]
    pub fn into_result(self) -> Result<V, E> {
        self.0
    }

    /// Borrows the payload as a `Result<&V, &E>`.
    #[inline(always)]
    pub const fn as_result(&self) -> Result<&V, &E> {
        self.0.as_ref()
    }
}

impl<'a, V: 'a, E: 'a> From<Unexpected<E>> for RefExpected<'a, V, E> {
    #[inline(always)]
    fn from(value: Unexpected<E>) -> Self {
        Self::from_unexpected(value)
    }
}

impl<'a, V: 'a, E: 'a> From<Result<V, E>> for RefExpected<'a, V, E> {
    #[inline(always)]
    fn from(value: Result<V, E>) -> Self {
        Self::from_result(value)
    }
}

impl<'a, V: 'a, E: 'a> From<RefExpected<'a, V, E>> for Result<V, E> {
    #[inline(always)]
    fn from(value: RefExpected<'a, V, E>) -> Self {
        value.0
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::RefExpected;
    use alloc::string::String;
    use core::cell::Cell;
    use vc_expected::{BadExpectedAccess, Transformer, unexpected};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Foo<'a> {
        x: i32,
        next: Option<&'a Foo<'a>>,
    }

    const LEAF: Foo<'static> = Foo { x: 7, next: None };
    const ROOT: Foo<'static> = Foo {
        x: 6,
        next: Some(&LEAF),
    };

    type Exp<'a> = RefExpected<'a, Foo<'a>, &'a str>;

    fn next<'a>(f: Foo<'a>) -> Exp<'a> {
        match f.next {
            Some(n) => RefExpected::new(*n),
            None => unexpected("end of chain").into(),
        }
    }

    #[test]
    fn has_value_when_constructed_with_value() {
        let e = Exp::new(ROOT);
        assert!(e.has_value());
        assert!(!e.has_error());
        assert_eq!(e.value().x, 6);
        assert_eq!(e.try_error(), Err(BadExpectedAccess::ErrorOnValue));
    }

    #[test]
    fn has_error_when_constructed_with_unexpected() {
        let e = Exp::from_unexpected(unexpected("err"));
        assert!(!e.has_value());
        assert!(e.has_error());
        assert_eq!(*e.error(), "err");
        assert_eq!(e.try_value(), Err(BadExpectedAccess::ValueOnError));
    }

    #[test]
    fn default_is_error_with_default_payload() {
        let e = Exp::default();
        assert!(!e.has_value());
        assert!(e.has_error());
        assert_eq!(*e.error(), "");

        let e = RefExpected::<'_, Foo<'_>, i32>::default();
        assert_eq!(e.into_error(), 0);
    }

    #[test]
    #[should_panic(expected = "read the value of a container holding an error")]
    fn narrowing_panics_on_error() {
        let _ = Exp::default().into_value();
    }

    #[test]
    #[should_panic(expected = "read the error of a container holding a value")]
    fn error_panics_on_value() {
        let _ = Exp::new(ROOT).error();
    }

    #[test]
    fn value_or_and_error_or() {
        assert_eq!(Exp::new(ROOT).value_or(LEAF), ROOT);
        assert_eq!(Exp::default().value_or(LEAF), LEAF);
        assert_eq!(Exp::from(unexpected("e")).error_or("x"), "e");
        assert_eq!(Exp::new(ROOT).error_or("x"), "x");
    }

    #[test]
    fn transform_builds_new_values() {
        let e = Exp::new(ROOT).transform(|f| Foo { x: f.x * 2, next: None });
        assert_eq!(e.value().x, 12);

        let text = String::from("abc");
        let e: RefExpected<'_, &str, &str> = RefExpected::new(text.as_str());
        assert_eq!(e.transform(str::len).into_value(), 3);
    }

    #[test]
    fn transform_applies_only_on_value() {
        let calls = Cell::new(0);
        let e = Exp::from(unexpected("err")).transform(|f| {
            calls.set(calls.get() + 1);
            f.x
        });
        assert!(e.has_error());
        assert_eq!(*e.error(), "err");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn transform_error_applies_only_on_error() {
        let e = Exp::from(unexpected("  abc  ")).transform_error(str::trim);
        assert_eq!(*e.error(), "abc");

        let calls = Cell::new(0);
        let e = Exp::new(ROOT).transform_error(|s| {
            calls.set(calls.get() + 1);
            s.len()
        });
        assert_eq!(*e.value(), ROOT);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn and_then_left_and_right_identity() {
        let calls = Cell::new(0);
        let e = Exp::new(ROOT).and_then(|f| {
            calls.set(calls.get() + 1);
            next(f)
        });
        assert_eq!(e, next(ROOT));
        assert_eq!(e.value().x, 7);
        assert_eq!(calls.get(), 1);

        let e = Exp::new(ROOT);
        assert_eq!(e.and_then(RefExpected::new), e);
    }

    #[test]
    fn and_then_keeps_original_error() {
        let e = Exp::new(ROOT).and_then(next).and_then(next).and_then(next);
        assert_eq!(*e.error(), "end of chain");
    }

    #[test]
    fn or_else_builds_new_values() {
        let e = Exp::from(unexpected("err")).or_else(|_| {
            RefExpected::<'_, Foo<'_>, u8>::new(Foo { x: 99, next: None })
        });
        assert_eq!(e.value().x, 99);
    }

    #[test]
    fn or_else_skips_on_value() {
        let calls = Cell::new(0);
        let e = Exp::new(ROOT).or_else(|_| {
            calls.set(calls.get() + 1);
            Exp::new(LEAF)
        });
        assert_eq!(*e.value(), ROOT);
        assert_eq!(calls.get(), 0);
    }

    struct X;

    impl<'a> Transformer<Foo<'a>> for X {
        type Output = i32;

        fn transform(&self, f: Foo<'a>) -> i32 {
            f.x
        }
    }

    struct Next;

    impl<'a> Transformer<Foo<'a>> for Next {
        type Output = Exp<'a>;

        fn transform(&self, f: Foo<'a>) -> Exp<'a> {
            next(f)
        }
    }

    struct Bytes;

    impl<'a> Transformer<&'a str> for Bytes {
        type Output = &'a [u8];

        fn transform(&self, s: &'a str) -> &'a [u8] {
            s.as_bytes()
        }
    }

    struct Restart;

    impl<'a> Transformer<&'a str> for Restart {
        type Output = Exp<'a>;

        fn transform(&self, _: &'a str) -> Exp<'a> {
            RefExpected::new(ROOT)
        }
    }

    #[test]
    fn with_transformer() {
        assert_eq!(Exp::new(ROOT).transform_with(X).into_value(), 6);
        assert_eq!(Exp::new(ROOT).and_then_with(Next).into_value(), LEAF);
        assert_eq!(*Exp::new(LEAF).and_then_with(&Next).error(), "end of chain");

        let e = Exp::from(unexpected("ab")).transform_error_with(Bytes);
        assert_eq!(e.into_error(), b"ab");

        let e = Exp::new(LEAF).and_then(next).or_else_with(Restart);
        assert_eq!(*e.value(), ROOT);
    }

    #[test]
    fn result_interop() {
        let e: Exp<'_> = Ok(ROOT).into();
        assert_eq!(e.as_result(), Ok(&ROOT));
        assert_eq!(e.into_result(), Ok(ROOT));

        let e: Exp<'_> = Err("no").into();
        assert_eq!(Result::from(e), Err("no"));
    }
}
