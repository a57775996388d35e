//! Serde adapters for the Beacon API number encoding.
//!
//! Integers are sent as decimal strings (e.g., `"123"`). Bare JSON numbers are
//! also accepted when reading, output is always quoted.

use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum QuotedOrBare {
    Quoted(String),
    Bare(u64),
}

impl QuotedOrBare {
    fn parse<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            QuotedOrBare::Quoted(string) => string.parse().map_err(E::custom),
            QuotedOrBare::Bare(number) => Ok(number),
        }
    }
}

/// For `u64` fields (slots, indices, gwei amounts).
pub mod quoted_u64 {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::QuotedOrBare;

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        QuotedOrBare::deserialize(deserializer)?.parse()
    }
}

/// For lists of `u64` (e.g., attesting indices).
pub mod quoted_u64_vec {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::QuotedOrBare;

    pub fn serialize<S: Serializer>(values: &[u64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|value| value.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u64>, D::Error> {
        Vec::<QuotedOrBare>::deserialize(deserializer)?
            .into_iter()
            .map(QuotedOrBare::parse)
            .collect()
    }
}

/// For `uint256` fields (e.g., base fee per gas), which are decimal rather than hex.
pub mod quoted_u256 {
    use ethers::types::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let string = String::deserialize(deserializer)?;
        U256::from_dec_str(&string)
            .map_err(|e| D::Error::custom(format!("invalid uint256 {string}: {e:?}")))
    }
}

#[cfg(test)]
mod test {
    use ethers::types::U256;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Numbers {
        #[serde(with = "super::quoted_u64")]
        slot: u64,
        #[serde(with = "super::quoted_u64_vec")]
        indices: Vec<u64>,
        #[serde(with = "super::quoted_u256")]
        base_fee: U256,
    }

    #[test]
    fn test_quoted_numbers_round_trip() {
        let input = json!({
            "slot": "6209536",
            "indices": ["1", "18446744073709551615"],
            "base_fee": "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        });
        let numbers: Numbers = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(numbers.slot, 6209536);
        assert_eq!(numbers.indices, vec![1, u64::MAX]);
        assert_eq!(numbers.base_fee, U256::MAX);
        assert_eq!(serde_json::to_value(&numbers).unwrap(), input);
    }

    #[test]
    fn test_bare_numbers_are_accepted() {
        let numbers: Numbers = serde_json::from_value(json!({
            "slot": 7,
            "indices": [3, "4"],
            "base_fee": "7"
        }))
        .unwrap();
        assert_eq!(numbers.slot, 7);
        assert_eq!(numbers.indices, vec![3, 4]);
        assert_eq!(serde_json::to_string(&numbers).unwrap(), r#"{"slot":"7","indices":["3","4"],"base_fee":"7"}"#);
    }

    #[test]
    fn test_invalid_number_rejected() {
        let result = serde_json::from_value::<Numbers>(json!({
            "slot": "0x10",
            "indices": [],
            "base_fee": "1"
        }));
        assert!(result.is_err());
    }
}
