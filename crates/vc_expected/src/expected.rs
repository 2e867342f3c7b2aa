use crate::{BadExpectedAccess, Transformer, Unexpected};

// -----------------------------------------------------------------------------
// Expected

/// An owning container holding either a value `V` or an error `E`.
///
/// The value case is built with [`Expected::new`]; the error case with an
/// [`Unexpected`] tag, either through [`Expected::from_unexpected`] or `From`.
///
/// Value-side combinators ([`transform`], [`and_then`]) never change the error
/// type, and error-side combinators ([`transform_error`], [`or_else`]) never
/// change the value type.
///
/// # Examples
///
/// ```
/// use vc_expected::{Expected, unexpected};
///
/// let ok: Expected<i32, String> = Expected::new(1);
/// let err: Expected<i32, String> = unexpected(String::from("err")).into();
///
/// assert!(ok.has_value());
/// assert!(err.has_error());
///
/// let err = err.transform(|x| x * 2);
/// assert_eq!(err.error(), "err");
/// ```
///
/// [`transform`]: Expected::transform
/// [`and_then`]: Expected::and_then
/// [`transform_error`]: Expected::transform_error
/// [`or_else`]: Expected::or_else
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Expected<V, E>(Result<V, E>);

impl<V, E: Default> Default for Expected<V, E> {
    /// Returns the error case holding `E::default()`.
    ///
    /// There is no separate "uninitialized" state: a defaulted container is
    /// an error. With diagnostics enabled this is recorded at `debug` level.
    fn default() -> Self {
        crate::cfg_debug! {
            log::debug!(
                "defaulted Expected<{}, {}> holds the default error",
                core::any::type_name::<V>(),
                core::any::type_name::<E>(),
            );
        }
        Self(Err(E::default()))
    }
}

impl<V, E> Expected<V, E> {
    /// Creates the value case.
    #[inline(always)]
    pub const fn new(value: V) -> Self {
        Self(Ok(value))
    }

    /// Creates the error case from an [`Unexpected`] tag.
    #[inline(always)]
    pub fn from_unexpected(unexpected: Unexpected<E>) -> Self {
        Self(Err(unexpected.into_error()))
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

    /// Consumes the container and returns the value.
    ///
    /// This is the explicit narrowing conversion from `Expected<V, E>` to `V`.
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
    pub fn transform<R>(self, f: impl FnOnce(V) -> R) -> Expected<R, E> {
        match self.0 {
            Ok(value) => Expected::new(f(value)),
            Err(error) => Expected(Err(error)),
        }
    }

    /// [`transform`](Self::transform) with a [`Transformer`].
    #[inline]
    pub fn transform_with<Tr: Transformer<V>>(self, tr: Tr) -> Expected<Tr::Output, E> {
        match self.0 {
            Ok(value) => Expected::new(tr.transform(value)),
            Err(error) => Expected(Err(error)),
        }
    }

    /// Maps the error with `f`; a value passes through untouched.
    ///
    /// ```
    /// use vc_expected::{Expected, unexpected};
    ///
    /// let e: Expected<u8, &str> = unexpected("abc").into();
    /// assert_eq!(e.transform_error(str::len).into_error(), 3);
    ///
    /// let v: Expected<u8, &str> = Expected::new(1);
    /// assert_eq!(v.transform_error(str::len).into_value(), 1);
    /// ```
    #[inline]
    pub fn transform_error<R>(self, f: impl FnOnce(E) -> R) -> Expected<V, R> {
        match self.0 {
            Ok(value) => Expected::new(value),
            Err(error) => Expected(Err(f(error))),
        }
    }

    /// [`transform_error`](Self::transform_error) with a [`Transformer`].
    #[inline]
    pub fn transform_error_with<Tr: Transformer<E>>(self, tr: Tr) -> Expected<V, Tr::Output> {
        match self.0 {
            Ok(value) => Expected::new(value),
            Err(error) => Expected(Err(tr.transform(error))),
        }
    }

    /// Calls `f` with the value and returns its result.
    ///
    /// On the error case `f` is not called and the original error is
    /// returned; the error type never changes.
    ///
    /// ```
    /// use vc_expected::{Expected, unexpected};
    ///
    /// fn checked_div(x: i32, y: i32) -> Expected<i32, &'static str> {
    ///     if y == 0 { unexpected("divide by zero").into() } else { Expected::new(x / y) }
    /// }
    ///
    /// let e = Expected::new(100).and_then(|x| checked_div(x, 5)).and_then(|x| checked_div(x, 2));
    /// assert_eq!(e.into_value(), 10);
    ///
    /// let e = Expected::new(100).and_then(|x| checked_div(x, 0)).and_then(|x| checked_div(x, 2));
    /// assert_eq!(e.into_error(), "divide by zero");
    /// ```
    #[inline]
    pub fn and_then<R>(self, f: impl FnOnce(V) -> Expected<R, E>) -> Expected<R, E> {
        match self.0 {
            Ok(value) => f(value),
            Err(error) => Expected(Err(error)),
        }
    }

    /// [`and_then`](Self::and_then) with a [`Transformer`].
    #[inline]
    pub fn and_then_with<Tr, R>(self, tr: Tr) -> Expected<R, E>
    where
        Tr: Transformer<V, Output = Expected<R, E>>,
    {
        match self.0 {
            Ok(value) => tr.transform(value),
            Err(error) => Expected(Err(error)),
        }
    }

    /// Calls `f` with the error and returns its result, for recovery chains.
    ///
    /// On the value case `f` is not called and the value passes through; the
    /// value type never changes.
    ///
    /// ```
    /// use vc_expected::{Expected, unexpected};
    ///
    /// let primary: Expected<&str, u16> = unexpected(404).into();
    /// let fallback = primary.or_else(|code| {
    ///     if code == 404 { Expected::new("default page") } else { unexpected(code).into() }
    /// });
    /// assert_eq!(fallback.into_value(), "default page");
    /// ```
    #[inline]
    pub fn or_else<R>(self, f: impl FnOnce(E) -> Expected<V, R>) -> Expected<V, R> {
        match self.0 {
            Ok(value) => Expected::new(value),
            Err(error) => f(error),
        }
    }

    /// [`or_else`](Self::or_else) with a [`Transformer`].
    #[inline]
    pub fn or_else_with<Tr, R>(self, tr: Tr) -> Expected<V, R>
    where
        Tr: Transformer<E, Output = Expected<V, R>>,
    {
        match self.0 {
            Ok(value) => Expected::new(value),
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

impl<V, E> From<Unexpected<E>> for Expected<V, E> {
    #[inline(always)]
    fn from(value: Unexpected<E>) -> Self {
        Self::from_unexpected(value)
    }
}

impl<V, E> From<Result<V, E>> for Expected<V, E> {
    #[inline(always)]
    fn from(value: Result<V, E>) -> Self {
        Self(value)
    }
}

impl<V, E> From<Expected<V, E>> for Result<V, E> {
    #[inline(always)]
    fn from(value: Expected<V, E>) -> Self {
        value.0
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Expected;
    use crate::{BadExpectedAccess, Transformer, Unexpected, unexpected};
    use alloc::string::{String, ToString};
    use core::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Foo(i32);

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Bar(String);

    impl Bar {
        fn new(msg: &str) -> Self {
            Bar(msg.to_string())
        }
    }

    type Exp = Expected<Foo, Bar>;

    fn fail(msg: &str) -> Exp {
        Unexpected::new(Bar::new(msg)).into()
    }

    fn increment(v: Foo) -> Exp {
        Expected::new(Foo(v.0 + 1))
    }

    #[test]
    fn has_value_when_constructed_with_value() {
        let e = Exp::new(Foo(42));
        assert!(e.has_value());
        assert!(!e.has_error());
        assert_eq!(e.value(), &Foo(42));
        assert_eq!(e.try_error(), Err(BadExpectedAccess::ErrorOnValue));
    }

    #[test]
    fn has_error_when_constructed_with_unexpected() {
        let e = Exp::from_unexpected(unexpected(Bar::new("err")));
        assert!(!e.has_value());
        assert!(e.has_error());
        assert_eq!(e.error(), &Bar::new("err"));
        assert_eq!(e.try_value(), Err(BadExpectedAccess::ValueOnError));
    }

    #[test]
    fn same_payload_types_stay_distinct() {
        let v: Expected<u8, u8> = Expected::new(1);
        let e: Expected<u8, u8> = unexpected(1).into();
        assert_ne!(v, e);
        assert!(v.has_value());
        assert!(e.has_error());
    }

    #[test]
    fn default_is_error_with_default_payload() {
        let e = Exp::default();
        assert!(!e.has_value());
        assert!(e.has_error());
        assert_eq!(e.error(), &Bar::default());
    }

    #[test]
    #[cfg(any(feature = "debug", debug_assertions))]
    fn default_is_logged() {
        crate::capture::install();
        let before = crate::capture::defaulted();
        let _ = Exp::default();
        assert!(crate::capture::defaulted() > before);
    }

    #[test]
    #[should_panic(expected = "read the value of a container holding an error")]
    fn narrowing_panics_on_error() {
        let _ = Exp::default().into_value();
    }

    #[test]
    #[should_panic(expected = "read the value of a container holding an error")]
    fn value_panics_on_error() {
        let e = fail("err");
        let _ = e.value();
    }

    #[test]
    #[should_panic(expected = "read the error of a container holding a value")]
    fn error_panics_on_value() {
        let e = Exp::new(Foo(1));
        let _ = e.error();
    }

    #[test]
    #[should_panic(expected = "read the error of a container holding a value")]
    fn into_error_panics_on_value() {
        let _ = Exp::new(Foo(1)).into_error();
    }

    #[test]
    fn value_or_and_error_or() {
        assert_eq!(Exp::new(Foo(1)).value_or(Foo(2)), Foo(1));
        assert_eq!(fail("err").value_or(Foo(2)), Foo(2));
        assert_eq!(fail("err").error_or(Bar::new("x")), Bar::new("err"));
        assert_eq!(Exp::new(Foo(1)).error_or(Bar::new("x")), Bar::new("x"));
    }

    #[test]
    fn transform_applies_only_on_value() {
        let e = Exp::new(Foo(10)).transform(|f| Foo(f.0 * 2));
        assert!(e.has_value());
        assert_eq!(e.into_value(), Foo(20));
    }

    #[test]
    fn transform_does_not_apply_on_error() {
        let calls = Cell::new(0);
        let e = fail("err").transform(|f| {
            calls.set(calls.get() + 1);
            Foo(f.0 * 2)
        });
        assert!(e.has_error());
        assert_eq!(e.into_error(), Bar::new("err"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn transform_scenario() {
        let e: Expected<i32, String> = unexpected(String::from("err")).into();
        let e = e.transform(|x| x * 2);
        assert!(e.has_error());
        assert_eq!(e.error(), "err");
    }

    #[test]
    fn transform_error_applies_only_on_error() {
        let e = fail("abc").transform_error(|_| Bar::new("xyz"));
        assert!(e.has_error());
        assert_eq!(e.error(), &Bar::new("xyz"));

        let calls = Cell::new(0);
        let e = Exp::new(Foo(3)).transform_error(|b| {
            calls.set(calls.get() + 1);
            b.0.len()
        });
        assert_eq!(e, Expected::new(Foo(3)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn functor_laws() {
        for e in [Exp::new(Foo(3)), fail("err")] {
            assert_eq!(e.clone().transform(|x| x), e);
            assert_eq!(e.clone().transform_error(|x| x), e);

            let f = |x: Foo| x.0 - 1;
            let g = |x: i32| x * 3;
            assert_eq!(e.clone().transform(f).transform(g), e.transform(|x| g(f(x))));
        }
    }

    #[test]
    fn and_then_left_identity() {
        let calls = Cell::new(0);
        let e = Exp::new(Foo(5)).and_then(|v| {
            calls.set(calls.get() + 1);
            increment(v)
        });
        assert_eq!(e, increment(Foo(5)));
        assert_eq!(e.value(), &Foo(6));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn and_then_right_identity() {
        let e = Exp::new(Foo(7));
        let bound = e.clone().and_then(Expected::new);
        assert!(bound.has_value());
        assert_eq!(bound, e);

        let err = fail("err");
        assert_eq!(err.clone().and_then(Expected::new), err);
    }

    #[test]
    fn and_then_keeps_original_error() {
        let calls = Cell::new(0);
        let e: Expected<String, Bar> = fail("first").and_then(|v| {
            calls.set(calls.get() + 1);
            Expected::new(v.0.to_string())
        });
        assert_eq!(e.into_error(), Bar::new("first"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn or_else_applies_on_error() {
        let e = fail("err").or_else(|_| Expected::<Foo, Bar>::new(Foo(99)));
        assert!(e.has_value());
        assert_eq!(e.value(), &Foo(99));

        let e = fail("err").or_else(|b| Expected::<Foo, usize>::from(unexpected(b.0.len())));
        assert_eq!(e.into_error(), 3);
    }

    #[test]
    fn or_else_skips_on_value() {
        let calls = Cell::new(0);
        let e = Exp::new(Foo(1)).or_else(|_| {
            calls.set(calls.get() + 1);
            Exp::new(Foo(2))
        });
        assert_eq!(e.value(), &Foo(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn or_else_scenario() {
        let e = Expected::<i32, String>::new(1).or_else(|_| Expected::<i32, String>::new(2));
        assert_eq!(*e.value(), 1);
    }

    struct Tr;

    impl Transformer<Foo> for Tr {
        type Output = Foo;

        fn transform(&self, f: Foo) -> Foo {
            Foo(f.0 * 2)
        }
    }

    struct TrExp;

    impl Transformer<Foo> for TrExp {
        type Output = Exp;

        fn transform(&self, f: Foo) -> Exp {
            Expected::new(Foo(f.0 * 2))
        }
    }

    struct Recover;

    impl Transformer<Bar> for Recover {
        type Output = Expected<Foo, usize>;

        fn transform(&self, b: Bar) -> Expected<Foo, usize> {
            if b.0.is_empty() { unexpected(0).into() } else { Expected::new(Foo(b.0.len() as i32)) }
        }
    }

    struct Describe;

    impl Transformer<Bar> for Describe {
        type Output = String;

        fn transform(&self, b: Bar) -> String {
            alloc::format!("failed: {}", b.0)
        }
    }

    #[test]
    fn transform_with_transformer() {
        let e = Exp::new(Foo(4)).transform_with(Tr);
        assert_eq!(e.value(), &Foo(8));
        assert_eq!(fail("err").transform_with(Tr), fail("err"));
    }

    #[test]
    fn transform_error_with_transformer() {
        let e = fail("boom").transform_error_with(Describe);
        assert_eq!(e.error(), "failed: boom");
        assert_eq!(Exp::new(Foo(1)).transform_error_with(&Describe).into_value(), Foo(1));
    }

    #[test]
    fn and_then_with_transformer() {
        let e = Exp::new(Foo(4)).and_then_with(TrExp);
        assert_eq!(e.value(), &Foo(8));
        assert_eq!(fail("err").and_then_with(TrExp), fail("err"));
    }

    #[test]
    fn or_else_with_transformer() {
        assert_eq!(fail("abcd").or_else_with(Recover).into_value(), Foo(4));
        assert_eq!(fail("").or_else_with(Recover).into_error(), 0);
        assert_eq!(Exp::new(Foo(1)).or_else_with(Recover).into_value(), Foo(1));
    }

    #[test]
    fn result_interop() {
        let e: Expected<u8, &str> = Ok(1).into();
        assert_eq!(e.as_result(), Ok(&1));

        let e: Expected<u8, &str> = Err("no").into();
        assert_eq!(Result::from(e), Err("no"));
        assert_eq!(e.into_result(), Err("no"));
    }
}
