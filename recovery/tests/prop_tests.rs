use proptest::prelude::*;

use zkid_recovery::{RecoveryAccount, RecoveryError};
use zkid_types::{Address, AttemptId, RecoveryParams};

const OWNER: u8 = 0xf0;
const NEXT: u8 = 0xf1;
const ATTEMPT: AttemptId = AttemptId::new(0);

fn verifiers() -> [Address; 3] {
    [
        Address::repeat_byte(1),
        Address::repeat_byte(2),
        Address::repeat_byte(3),
    ]
}

fn guardian(i: usize) -> Address {
    Address::repeat_byte(0x20 + i as u8)
}

fn account() -> RecoveryAccount {
    let owner = Address::repeat_byte(OWNER);
    let mut account = RecoveryAccount::new(owner, RecoveryParams::default());
    account.register_verifiers(&owner, verifiers()).unwrap();
    account
        .record_pending_owner(&owner, Address::repeat_byte(NEXT))
        .unwrap();
    account
}

proptest! {
    /// The stored record equals the last value each verifier submitted.
    #[test]
    fn qualification_reflects_last_write(
        writes in prop::collection::vec((0usize..3, 0usize..4, any::<bool>()), 0..40),
    ) {
        let mut account = account();
        let mut expected = [[None::<bool>; 3]; 4];
        for (v, g, claim) in &writes {
            account
                .submit_qualification(&verifiers()[*v], ATTEMPT, guardian(*g), *claim)
                .unwrap();
            expected[*g][*v] = Some(*claim);
        }
        for (g, row) in expected.iter().enumerate() {
            for (v, value) in row.iter().enumerate() {
                prop_assert_eq!(
                    account.is_qualified(ATTEMPT, &guardian(g), &verifiers()[v]),
                    value.unwrap_or(false)
                );
            }
            prop_assert_eq!(
                account.is_guardian(ATTEMPT, &guardian(g)),
                row.iter().any(|v| *v == Some(true))
            );
        }
    }

    /// Finalize succeeds exactly on strict majority of the effective set and,
    /// when it does, leaves nothing behind for any candidate.
    #[test]
    fn finalize_iff_strict_majority(
        guardians in prop::collection::vec((any::<bool>(), prop::option::of(any::<bool>())), 0..8),
    ) {
        let mut account = account();
        let mut agree = 0usize;
        let mut total = 0usize;
        for (i, (qualified, vote)) in guardians.iter().enumerate() {
            account
                .submit_qualification(&verifiers()[i % 3], ATTEMPT, guardian(i), *qualified)
                .unwrap();
            if *qualified {
                total += 1;
                if let Some(v) = vote {
                    account.submit_vote(&guardian(i), ATTEMPT, *v).unwrap();
                    if *v {
                        agree += 1;
                    }
                }
            } else {
                prop_assert!(account.submit_vote(&guardian(i), ATTEMPT, true).is_err());
            }
        }

        let candidates: Vec<Address> = (0..guardians.len()).map(guardian).collect();
        match account.finalize(ATTEMPT, &candidates) {
            Ok(change) => {
                prop_assert!(agree * 2 > total);
                prop_assert_eq!(change.new_owner, Address::repeat_byte(NEXT));
                prop_assert_eq!(account.owner(), Address::repeat_byte(NEXT));
                for g in &candidates {
                    prop_assert!(!account.is_guardian(ATTEMPT, g));
                    prop_assert!(!account.vote_of(ATTEMPT, g));
                    for v in &verifiers() {
                        prop_assert!(!account.is_qualified(ATTEMPT, g, v));
                    }
                }
            }
            Err(RecoveryError::NotApproved { agree: a, total: t, .. }) => {
                prop_assert!(agree * 2 <= total);
                prop_assert_eq!((a, t), (agree, total));
                prop_assert_eq!(account.owner(), Address::repeat_byte(OWNER));
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }
}
