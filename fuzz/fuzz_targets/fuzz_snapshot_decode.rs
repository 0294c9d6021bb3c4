#![no_main]

use libfuzzer_sys::fuzz_target;

use zkid_recovery::AccountSnapshot;

fuzz_target!(|data: &[u8]| {
    // Any snapshot that decodes must carry a verifier set that still
    // satisfies its invariant.
    let decoded = AccountSnapshot::from_bytes(data).ok().or_else(|| {
        std::str::from_utf8(data)
            .ok()
            .and_then(|s| AccountSnapshot::from_json(s).ok())
    });
    if let Some(snapshot) = decoded {
        if let Some(set) = snapshot.registry.active() {
            let v = set.as_array();
            assert!(v.iter().all(|a| !a.is_zero()));
            assert!(v[0] != v[1] && v[1] != v[2] && v[0] != v[2]);
        }
    }
});
