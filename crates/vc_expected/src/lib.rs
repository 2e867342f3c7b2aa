//! Owning containers for values that may be absent or may be an error.
//!
//! **Optional**
//!
//! [`Optional<T>`] either holds a `T` or nothing. It is constructed with
//! [`Optional::new`] (or `From<T>`) and [`Optional::none`] (or `Default`).
//!
//! **Expected**
//!
//! [`Expected<V, E>`] holds either a value `V` or an error `E`. The error case
//! is built through the [`Unexpected`] tag, so the two cases stay distinct even
//! when `V` and `E` are the same type.
//!
//! **Combinators**
//!
//! Both containers share the same vocabulary:
//!
//! - `transform`: map the value, keep absence/error untouched.
//! - `transform_error`: map the error, keep the value untouched.
//! - `and_then`: bind on the value.
//! - `or_else`: bind on the error, used for fallback chains.
//!
//! Every combinator has a `*_with` form taking a [`Transformer`] instead of a
//! closure.
//!
//! **Contract violations**
//!
//! Reading a payload against the discriminant ([`Optional::value`] on an
//! absent container, [`Expected::error`] on a value, ...) panics with a
//! [`BadOptionalAccess`] or [`BadExpectedAccess`]. Everything else is total.
//!
//! ```
//! use vc_expected::{Expected, Optional, unexpected};
//!
//! fn parse(s: &str) -> Expected<i32, &'static str> {
//!     match s.parse() {
//!         Ok(v) => Expected::new(v),
//!         Err(_) => unexpected("not a number").into(),
//!     }
//! }
//!
//! let doubled = parse("21").transform(|x| x * 2);
//! assert_eq!(*doubled.value(), 42);
//!
//! let failed = parse("abc").transform(|x| x * 2);
//! assert_eq!(*failed.error(), "not a number");
//!
//! let next = Optional::new(5).and_then(|x| Optional::new(x + 1));
//! assert_eq!(next.into_value(), 6);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Expands the body only when diagnostics are enabled, that is with the
/// `debug` feature or `debug_assertions`.
macro_rules! cfg_debug {
    ($($tt:tt)*) => {
        #[cfg(any(feature = "debug", debug_assertions))]
        { $($tt)* }
    };
}

pub(crate) use cfg_debug;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod expected;
mod optional;
mod transformer;
mod unexpected;

#[cfg(feature = "serde")]
mod serde;

pub mod fluent;

#[cfg(test)]
mod capture;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::{AccessError, BadExpectedAccess, BadOptionalAccess};
pub use expected::Expected;
pub use optional::Optional;
pub use transformer::Transformer;
pub use unexpected::{Unexpected, unexpected};
