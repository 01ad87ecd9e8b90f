#![no_main]

use decimal_bigint::{from_slice, to_string, BigInt};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = from_slice(data) {
        let text = to_string(&value).unwrap();
        assert_eq!(text.parse::<BigInt>().unwrap(), value);
    }
});
