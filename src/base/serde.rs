//! Helpers for implementing serialization.
#![cfg(feature = "serde")]

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;
use serde::de::{Deserialize, Deserializer, Error, Visitor};

/// Deserializes an IANA code either from its integer or its text form.
///
/// Human readable formats may contain either form, compact formats always
/// contain the integer.
pub(crate) fn deserialize_native_or_str<'de, D, T, I>(
    deserializer: D,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + From<I>,
    I: Deserialize<'de> + TryFrom<u64>,
{
    if !deserializer.is_human_readable() {
        return I::deserialize(deserializer).map(T::from);
    }

    struct NativeOrStr<T, I>(PhantomData<(T, I)>);

    impl<'de, T, I> Visitor<'de> for NativeOrStr<T, I>
    where
        T: FromStr + From<I>,
        I: TryFrom<u64>,
    {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer or a mnemonic")
        }

        fn visit_u64<E: Error>(self, value: u64) -> Result<T, E> {
            I::try_from(value)
                .map(T::from)
                .map_err(|_| E::custom("value out of range"))
        }

        fn visit_str<E: Error>(self, value: &str) -> Result<T, E> {
            T::from_str(value).map_err(|_| E::custom("unknown mnemonic"))
        }
    }

    deserializer.deserialize_any(NativeOrStr::<T, I>(PhantomData))
}
