//! Fuzz target for brand identification.
//!
//! identify_brand() must never panic on arbitrary bytes, and a known brand
//! must always come with one of its accepted lengths.

#![no_main]

use cardcheck::detect::{detect_brand, BRAND_RULES};
use cardcheck::{identify_brand, strip_whitespace, Brand};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let brand = identify_brand(data);
    let stripped = strip_whitespace(data);
    assert_eq!(brand, detect_brand(&stripped));

    if brand != Brand::Unknown {
        let rule = BRAND_RULES
            .iter()
            .find(|rule| rule.brand() == brand)
            .expect("every known brand has a rule");
        assert!(rule.lengths().contains(&stripped.len()));
    }
});
