#![no_main]
use libfuzzer_sys::fuzz_target;
use rs_poker_eval::core::{Card, CardIter, best_of, classify};

fuzz_target!(|cards: Vec<Card>| {
    // Keep the combination count small enough for the fuzzer.
    if cards.len() > 12 {
        return;
    }
    match best_of(&cards) {
        Ok(best) => {
            let max = CardIter::<5>::new(&cards)
                .map(|five| classify(&five))
                .max()
                .unwrap();
            assert_eq!(max, best);
        }
        Err(_) => assert!(cards.len() < 5),
    }
});
