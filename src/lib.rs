#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_expected as expected;
pub use vc_expected_ref as refs;

/// The containers, the tag, the capability and the bridging traits.
///
/// The blanket [`ValueExt`](vc_expected::fluent::ValueExt) is not included.
pub mod prelude {
    pub use vc_expected::{Expected, Optional, Transformer, Unexpected, unexpected};
    pub use vc_expected_ref::{AllowRef, AllowRefDeref, DisallowRef, RefExpected, RefOptional};
}
