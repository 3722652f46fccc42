//! Assertion utilities for testing

/// Assert that a result is OK and unwrap it
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok, got Err: {:?}", err),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok, got Err: {:?} ({})", err, format!($($arg)+)),
        }
    };
}

/// Assert that a precheck result carries the given response code and fee.
///
/// ```ignore
/// assert_precheck!(pipeline.assess(&facts), ResponseCode::InsufficientTxFee, 667);
/// ```
#[macro_export]
macro_rules! assert_precheck {
    ($result:expr, $code:expr, $fee:expr) => {{
        let result = $result;
        assert_eq!(result.validity(), $code, "unexpected response code");
        assert_eq!(result.required_fee(), $fee, "unexpected required fee for {}", $code);
    }};
}

/// Assert that a key comparison succeeds with the given ordering in both directions.
///
/// The reverse comparison must yield the reversed ordering.
#[macro_export]
macro_rules! assert_key_order {
    ($cmp:expr, $lhs:expr, $rhs:expr, $ord:expr) => {{
        let forward = $crate::assert_ok!($cmp.compare(&$lhs, &$rhs), "forward comparison");
        let backward = $crate::assert_ok!($cmp.compare(&$rhs, &$lhs), "backward comparison");
        assert_eq!(forward, $ord, "forward ordering");
        assert_eq!(backward, $ord.reverse(), "backward ordering");
    }};
}
