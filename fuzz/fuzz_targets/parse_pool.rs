#![no_main]
use libfuzzer_sys::fuzz_target;
use rs_poker_eval::core::CardPool;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(pool) = CardPool::new_from_str(s) {
            let printed = pool.to_string();
            assert_eq!(pool, CardPool::new_from_str(&printed).unwrap());
        }
    }
});
