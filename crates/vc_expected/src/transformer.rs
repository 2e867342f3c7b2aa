// -----------------------------------------------------------------------------
// Transformer

/// A statically dispatched mapping capability.
///
/// Every combinator of [`Optional`] and [`Expected`] has a `*_with` form that
/// takes a `Transformer` instead of a closure. Implementors are usually
/// zero-sized types, or types holding only borrowed data, so a transformer
/// never allocates and can be named in signatures.
///
/// # Examples
///
/// ```
/// use vc_expected::{Optional, Transformer};
///
/// struct Double;
///
/// impl Transformer<i32> for Double {
///     type Output = i32;
///
///     fn transform(&self, input: i32) -> i32 {
///         input * 2
///     }
/// }
///
/// let o = Optional::new(4).transform_with(Double);
/// assert_eq!(o.into_value(), 8);
/// ```
///
/// Borrowed state works as well:
///
/// ```
/// use vc_expected::{Optional, Transformer};
///
/// struct Lookup<'a>(&'a [&'a str]);
///
/// impl<'a> Transformer<usize> for Lookup<'a> {
///     type Output = Optional<&'a str>;
///
///     fn transform(&self, index: usize) -> Optional<&'a str> {
///         self.0.get(index).copied().into()
///     }
/// }
///
/// let names = ["zero", "one"];
/// let lookup = Lookup(&names);
///
/// assert_eq!(Optional::new(1).and_then_with(&lookup).into_value(), "one");
/// assert!(Optional::new(5).and_then_with(&lookup).is_absent());
/// ```
///
/// [`Optional`]: crate::Optional
/// [`Expected`]: crate::Expected
pub trait Transformer<In> {
    type Output;

    fn transform(&self, input: In) -> Self::Output;
}

impl<In, Tr: Transformer<In> + ?Sized> Transformer<In> for &Tr {
    type Output = Tr::Output;

    #[inline(always)]
    fn transform(&self, input: In) -> Self::Output {
        (**self).transform(input)
    }
}
