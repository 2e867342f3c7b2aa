//! `Optional<T>` is serialized exactly like `Option<T>`, `Expected<V, E>`
//! exactly like `Result<V, E>`.

use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Expected, Optional};

impl<T: Serialize> Serialize for Optional<T> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

impl<V: Serialize, E: Serialize> Serialize for Expected<V, E> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_result().serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Expected<V, E> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Result::<V, E>::deserialize(deserializer).map(Expected::from)
    }
}
