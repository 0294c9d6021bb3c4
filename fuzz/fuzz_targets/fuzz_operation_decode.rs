#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Scenario and ledger input must never panic the decoder.
    let _ = serde_json::from_slice::<zkid_recovery::Operation>(data);
    let _ = serde_json::from_slice::<Vec<zkid_recovery::Operation>>(data);

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = text.parse::<zkid_types::Address>();
    }
});
