// Path: crates/types/tests/wire_shapes.rs

//! JSON shapes of the types handed to the transport layer.

use gate_test_utils::assert_ok;
use gate_types::app::{ContractId, Key, PrecheckResult, ResponseCode};
use serde_json::json;

#[test]
fn test_precheck_result_json() {
    let result = PrecheckResult::with_fee(ResponseCode::InsufficientTxFee, 667);
    let value = assert_ok!(serde_json::to_value(result));
    assert_eq!(
        value,
        json!({ "validity": "INSUFFICIENT_TX_FEE", "required_fee": 667 })
    );
}

#[test]
fn test_fee_is_dropped_for_codes_without_one() {
    let result = PrecheckResult::with_fee(ResponseCode::InvalidSignature, 667);
    assert_eq!(result.required_fee(), 0);
}

#[test]
fn test_key_json_is_externally_tagged() {
    let key = Key::threshold(
        1,
        vec![
            Key::ed25519(vec![1, 2]),
            Key::ContractId(ContractId::numbered(0, 0, 7)),
        ],
    );
    let text = assert_ok!(serde_json::to_string(&key));
    let back: Key = assert_ok!(serde_json::from_str(&text));
    assert_eq!(back, key);
    assert!(text.starts_with(r#"{"threshold":"#), "{}", text);
}
