//! Borrowing counterparts of [`vc_expected`]'s containers.
//!
//! **RefOptional** and **RefExpected**
//!
//! [`RefOptional<'a, T>`] and [`RefExpected<'a, V, E>`] have the same
//! vocabulary as [`Optional`] and [`Expected`], but they are bounded by the
//! lifetime `'a`: every payload satisfies `T: 'a`, so a payload may itself be
//! a view such as `&'a str` or `&'a [u8]`. Combinators build new payloads
//! freely, and the results stay bounded by `'a`.
//!
//! A scoped container never outlives the data its payload borrows; the
//! lifetime is checked by the compiler. Both are `Copy` when their payloads
//! are, which is always the case for borrowed views.
//!
//! **Bridging**
//!
//! - [`AllowRef`]: owning → scoped. Copies the discriminant and borrows the
//!   payload, giving `RefOptional<'_, &T>`, so the view lives as long as the
//!   `&` borrow of the source.
//! - [`DisallowRef`]: scoped → owning. Copies borrowed payloads through
//!   [`ToOwned`](alloc::borrow::ToOwned); this is the only way to keep a
//!   result after the viewed data is gone.
//!
//! ```
//! use vc_expected::Optional;
//! use vc_expected_ref::{AllowRefDeref, DisallowRef, RefOptional};
//!
//! fn first_word(text: &str) -> RefOptional<'_, &str> {
//!     text.split_whitespace().next().into()
//! }
//!
//! let owned: Optional<String> = {
//!     let line = String::from("hello world");
//!     first_word(&line).disallow_ref()
//! };
//! assert_eq!(owned.value(), "hello");
//! assert_eq!(owned.allow_ref_deref(), RefOptional::new("hello"));
//! ```
//!
//! [`Optional`]: vc_expected::Optional
//! [`Expected`]: vc_expected::Expected
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

mod expected;
mod optional;

pub mod bridge;

// -----------------------------------------------------------------------------
// Top-level exports

pub use bridge::{AllowRef, AllowRefDeref, DisallowRef};
pub use expected::RefExpected;
pub use optional::RefOptional;
