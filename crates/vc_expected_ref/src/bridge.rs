//! Conversions between the owning and the scoped containers.
//!
//! Both directions keep the discriminant exactly and never panic. They only go
//! through the public accessors of the other family.
//!
//! ```
//! use vc_expected::{Expected, unexpected};
//! use vc_expected_ref::{AllowRef, DisallowRef, RefExpected};
//!
//! let owned: Expected<Vec<u8>, String> = unexpected(String::from("io")).into();
//!
//! let view: RefExpected<'_, &Vec<u8>, &String> = owned.allow_ref();
//! assert_eq!(*view.error(), "io");
//!
//! let back = view.disallow_ref();
//! assert_eq!(back, owned);
//! ```
//!
//! Payloads that own their data need no copy: `into_option` / `into_result`
//! move them into the owning containers through `From`.

use alloc::borrow::ToOwned;
use core::ops::Deref;

use vc_expected::{Expected, Optional, unexpected};

use crate::{RefExpected, RefOptional};

// -----------------------------------------------------------------------------
// AllowRef

/// Owning → scoped.
///
/// The returned container borrows the payload of `self`, so it cannot outlive
/// it.
pub trait AllowRef {
    type Ref<'a>
    where
        Self: 'a;

    fn allow_ref(&self) -> Self::Ref<'_>;
}

impl<T> AllowRef for Optional<T> {
    type Ref<'a>
        = RefOptional<'a, &'a T>
    where
        Self: 'a;

    #[inline]
    fn allow_ref(&self) -> RefOptional<'_, &T> {
        RefOptional::from(self.as_option())
    }
}

impl<V, E> AllowRef for Expected<V, E> {
    type Ref<'a>
        = RefExpected<'a, &'a V, &'a E>
    where
        Self: 'a;

    #[inline]
    fn allow_ref(&self) -> RefExpected<'_, &V, &E> {
        RefExpected::from(self.as_result())
    }
}

/// Owning → scoped, viewing the payload through [`Deref`].
///
/// ```
/// use vc_expected::Optional;
/// use vc_expected_ref::{AllowRefDeref, RefOptional};
///
/// let name = Optional::new(String::from("vc"));
/// let view: RefOptional<'_, &str> = name.allow_ref_deref();
/// assert_eq!(view.into_value(), "vc");
/// ```
pub trait AllowRefDeref {
    type Target: ?Sized;

    fn allow_ref_deref(&self) -> RefOptional<'_, &Self::Target>;
}

impl<T: Deref> AllowRefDeref for Optional<T> {
    type Target = T::Target;

    #[inline]
    fn allow_ref_deref(&self) -> RefOptional<'_, &T::Target> {
        RefOptional::from(self.as_option().map(Deref::deref))
    }
}

// -----------------------------------------------------------------------------
// DisallowRef

/// Scoped → owning, copying borrowed payloads with [`ToOwned`].
///
/// This is the only way to keep a result after the viewed data is gone.
pub trait DisallowRef {
    type Owned;

    fn disallow_ref(self) -> Self::Owned;
}

impl<T: ?Sized + ToOwned> DisallowRef for RefOptional<'_, &T> {
    type Owned = Optional<T::Owned>;

    #[inline]
    fn disallow_ref(self) -> Optional<T::Owned> {
        match self.into_option() {
            Some(value) => Optional::new(value.to_owned()),
            None => Optional::none(),
        }
    }
}

impl<V: ?Sized + ToOwned, E: ?Sized + ToOwned> DisallowRef for RefExpected<'_, &V, &E> {
    type Owned = Expected<V::Owned, E::Owned>;

    #[inline]
    fn disallow_ref(self) -> Expected<V::Owned, E::Owned> {
        match self.into_result() {
            Ok(value) => Expected::new(value.to_owned()),
            Err(error) => unexpected(error.to_owned()).into(),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
