// Standard consensus APIs require numbers to be represented as strings.
// The serialization code must also stay compatible with binary formats like
// `bincode`, which is why non-human-readable serializers get native integers.
//
// `serde_with::rust::display_fromstr` interacts poorly with `#[serde(untagged)]`.
// `serde_aux::field_attributes::deserialize_number_from_string` uses
// `deserialize_any`, which does not work with `bincode`:
// <https://github.com/bincode-org/bincode/issues/272#issuecomment-603532560>

use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    marker::PhantomData,
    str::FromStr,
};

use serde::{
    de::{Error, IntoDeserializer as _, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + FromStr<Err: Display>,
    D: Deserializer<'de>,
{
    struct AnyVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de> + FromStr<Err: Display>> Visitor<'de> for AnyVisitor<T> {
        type Value = T;

        fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E: Error>(self, string: &str) -> Result<Self::Value, E> {
            string.parse().map_err(E::custom)
        }

        fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
            T::deserialize(value.into_deserializer())
        }
    }

    if deserializer.is_human_readable() {
        deserializer.deserialize_any(AnyVisitor(PhantomData))
    } else {
        T::deserialize(deserializer)
    }
}

pub fn serialize<S: Serializer>(
    value: impl Serialize + Display,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if serializer.is_human_readable() {
        serializer.collect_str(&value)
    } else {
        value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(PartialEq, Eq, Debug, Deserialize, Serialize)]
    struct Wrapper {
        #[serde(with = "super")]
        value: u64,
    }

    #[test]
    fn serializes_as_string_in_json() {
        let wrapper = Wrapper { value: 42 };

        let json = serde_json::to_string(&wrapper).expect("wrapper can be serialized");

        assert_eq!(json, r#"{"value":"42"}"#);
    }

    #[test]
    fn deserializes_from_string_and_number_in_json() {
        let expected = Wrapper { value: 42 };

        let from_string = serde_json::from_str::<Wrapper>(r#"{"value":"42"}"#)
            .expect("JSON with a string value is valid");
        let from_number = serde_json::from_str::<Wrapper>(r#"{"value":42}"#)
            .expect("JSON with a number value is valid");

        assert_eq!(from_string, expected);
        assert_eq!(from_number, expected);
    }

    #[test]
    fn stays_native_in_bincode() {
        let wrapper = Wrapper { value: 42 };

        let bytes = bincode::serialize(&wrapper).expect("wrapper can be serialized");

        assert_eq!(bytes, 42_u64.to_le_bytes());

        let decoded =
            bincode::deserialize::<Wrapper>(&bytes).expect("bytes encode a valid wrapper");

        assert_eq!(decoded, wrapper);
    }
}
