#![no_main]

use libfuzzer_sys::fuzz_target;

use zkid_recovery::{RecoveryAccount, RecoveryError};
use zkid_types::{Address, AttemptId, RecoveryParams};

// Drive an account with an arbitrary byte-coded call sequence and check the
// owner only ever changes through an approved finalize.
fuzz_target!(|data: &[u8]| {
    let ids: Vec<Address> = (1u8..=8).map(Address::repeat_byte).collect();
    let mut account = RecoveryAccount::new(ids[0], RecoveryParams::default());

    for chunk in data.chunks_exact(4) {
        let caller = ids[chunk[1] as usize % ids.len()];
        let target = ids[chunk[2] as usize % ids.len()];
        let attempt = AttemptId::new(u64::from(chunk[3] % 3));
        let flag = chunk[3] & 0x80 != 0;
        let before = account.owner();

        match chunk[0] % 5 {
            0 => {
                let _ = account.register_verifiers(&caller, [ids[1], ids[2], target]);
            }
            1 => {
                let _ = account.record_pending_owner(&caller, target);
            }
            2 => {
                let _ = account.submit_qualification(&caller, attempt, target, flag);
            }
            3 => {
                let _ = account.submit_vote(&caller, attempt, flag);
            }
            _ => {
                let tally = account.tally(attempt, &ids);
                match account.finalize(attempt, &ids) {
                    Ok(change) => {
                        assert!(tally.is_approved());
                        assert_eq!(change.old_owner, before);
                        assert!(account.attempt(attempt).is_none());
                    }
                    Err(RecoveryError::NotApproved { agree, total, .. }) => {
                        assert!(agree * 2 <= total);
                        assert_eq!(account.owner(), before);
                    }
                    Err(_) => assert_eq!(account.owner(), before),
                }
                continue;
            }
        }
        assert_eq!(account.owner(), before);
    }
});
