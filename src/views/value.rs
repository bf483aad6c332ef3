use alloy::dyn_abi::DynSolValue;
use serde_json::{Map, Value};

use super::{address_hex, bytes_hex};

/// Render a dynamically decoded value with the view formatting rules.
///
/// Integers of up to 64 bits stay JSON numbers; wider ones become decimal
/// strings. Arrays and tuples become JSON arrays.
pub fn value_view(value: &DynSolValue) -> Value {
    match value {
        DynSolValue::Bool(b) => Value::Bool(*b),
        DynSolValue::Uint(n, bits) => match u64::try_from(*n) {
            Ok(small) if *bits <= 64 => Value::from(small),
            _ => Value::String(n.to_string()),
        },
        DynSolValue::Int(n, bits) => match i64::try_from(*n) {
            Ok(small) if *bits <= 64 => Value::from(small),
            _ => Value::String(n.to_string()),
        },
        DynSolValue::FixedBytes(word, size) => Value::String(bytes_hex(&word[..(*size).min(32)])),
        DynSolValue::Address(address) => Value::String(address_hex(address)),
        DynSolValue::Function(function) => Value::String(bytes_hex(function)),
        DynSolValue::Bytes(bytes) => Value::String(bytes_hex(bytes)),
        DynSolValue::String(s) => Value::String(s.clone()),
        DynSolValue::Array(items)
        | DynSolValue::FixedArray(items)
        | DynSolValue::Tuple(items)
        | DynSolValue::CustomStruct { tuple: items, .. } => {
            Value::Array(items.iter().map(value_view).collect())
        }
    }
}

/// Render a decoded tuple as an object keyed by the given component names.
///
/// Components without a name (or values that are not tuples) fall back to
/// the positional rendering of [`value_view`].
pub fn named_tuple_view(names: &[&str], value: &DynSolValue) -> Value {
    let DynSolValue::Tuple(items) = value else {
        return value_view(value);
    };
    if names.len() != items.len() || names.iter().any(|name| name.is_empty()) {
        return value_view(value);
    }

    let mut object = Map::new();
    for (name, item) in names.iter().zip(items) {
        object.insert(name.to_string(), value_view(item));
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::dyn_abi::DynSolType;
    use alloy::primitives::{Address, B256, I256, U256};
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_scalar_formatting() {
        assert_eq!(value_view(&DynSolValue::Bool(true)), json!(true));
        assert_eq!(value_view(&DynSolValue::Uint(U256::from(42u64), 64)), json!(42));
        assert_eq!(
            value_view(&DynSolValue::Uint(U256::from(10u64).pow(U256::from(20u64)), 96)),
            json!("100000000000000000000")
        );
        assert_eq!(value_view(&DynSolValue::Int(I256::try_from(-7i64).unwrap(), 32)), json!(-7));
        assert_eq!(value_view(&DynSolValue::String("FeeQuoter 1.6.0".into())), json!("FeeQuoter 1.6.0"));
    }

    #[test]
    fn test_wide_integer_is_string_even_when_small() {
        assert_eq!(value_view(&DynSolValue::Uint(U256::from(5u64), 256)), json!("5"));
    }

    #[test]
    fn test_byte_formatting() {
        let mut word = B256::ZERO;
        word[..4].copy_from_slice(&[0x28, 0x12, 0xd5, 0x2c]);
        assert_eq!(value_view(&DynSolValue::FixedBytes(word, 4)), json!("2812d52c"));
        assert_eq!(value_view(&DynSolValue::Bytes(vec![0xde, 0xad])), json!("dead"));

        let address = Address::from_str("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(
            value_view(&DynSolValue::Address(address)),
            json!("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")
        );
    }

    #[test]
    fn test_decoded_tuple() {
        let ty = DynSolType::parse("(address,uint8)").unwrap();
        let address = Address::from_str("0x514910771af9ca656af840dff83e8264ecf986ca").unwrap();
        let encoded = DynSolValue::Tuple(vec![
            DynSolValue::Address(address),
            DynSolValue::Uint(U256::from(18u64), 8),
        ])
        .abi_encode();
        let decoded = ty.abi_decode(&encoded).unwrap();

        assert_eq!(
            value_view(&decoded),
            json!(["0x514910771AF9Ca656af840dff83E8264EcF986CA", 18])
        );
        assert_eq!(
            named_tuple_view(&["dataFeedAddress", "tokenDecimals"], &decoded),
            json!({"dataFeedAddress": "0x514910771AF9Ca656af840dff83E8264EcF986CA", "tokenDecimals": 18})
        );
    }

    #[test]
    fn test_custom_struct_renders_like_tuple() {
        let value = DynSolValue::CustomStruct {
            name: "TokenPriceFeedConfig".to_string(),
            prop_names: vec!["dataFeedAddress".to_string(), "tokenDecimals".to_string()],
            tuple: vec![
                DynSolValue::Address(Address::ZERO),
                DynSolValue::Uint(U256::from(18u64), 8),
            ],
        };
        assert_eq!(
            value_view(&value),
            json!(["0x0000000000000000000000000000000000000000", 18])
        );
    }

    #[test]
    fn test_named_tuple_falls_back_on_mismatch() {
        let value = DynSolValue::Tuple(vec![DynSolValue::Bool(false)]);
        assert_eq!(named_tuple_view(&["a", "b"], &value), json!([false]));
        assert_eq!(named_tuple_view(&["a"], &DynSolValue::Bool(true)), json!(true));
    }
}
