use std::sync::Arc;

use proptest::prelude::*;

use pchain_primitives::{Keypair, PrivateKey};
use pchain_wallet::Wallet;

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Remove(u8),
    SetActive(u8),
    Create(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (1u8..8).prop_map(Op::Add),
        2 => (1u8..8).prop_map(Op::Remove),
        2 => (1u8..8).prop_map(Op::SetActive),
        1 => (0usize..3).prop_map(Op::Create),
        1 => Just(Op::Clear),
    ]
}

fn seeded(seed: u8) -> Keypair {
    Keypair::from_private_key(PrivateKey::from_bytes(&[seed; 32]).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn active_account_is_always_a_keypair_that_was_added(
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let mut wallet = Wallet::new();
        let mut seen: Vec<Arc<Keypair>> = Vec::new();

        for op in ops {
            match op {
                Op::Add(seed) => {
                    let keypair = Arc::new(seeded(seed));
                    seen.push(Arc::clone(&keypair));
                    wallet.add(keypair);
                }
                Op::Remove(seed) => {
                    wallet.remove(&[seed; 32]);
                    let removed = seeded(seed);
                    prop_assert!(wallet.accounts().iter().all(|k| **k != removed));
                }
                Op::SetActive(seed) => {
                    let keypair = Arc::new(seeded(seed));
                    seen.push(Arc::clone(&keypair));
                    wallet.set_active_account(keypair);
                }
                Op::Create(n) => {
                    let before = wallet.len();
                    runtime.block_on(wallet.create(n)).unwrap();
                    prop_assert_eq!(wallet.len(), before + n);
                    seen.extend(wallet.accounts()[before..].iter().cloned());
                    match wallet.accounts().first() {
                        Some(first) => prop_assert!(Arc::ptr_eq(wallet.active_account().unwrap(), first)),
                        None => prop_assert!(wallet.active_account().is_none()),
                    }
                }
                Op::Clear => {
                    wallet.clear();
                    prop_assert!(wallet.is_empty());
                }
            }

            if let Some(active) = wallet.active_account() {
                prop_assert!(seen.iter().any(|k| Arc::ptr_eq(k, active)));
            }
        }
    }

    #[test]
    fn account_index_finds_first_match(seeds in prop::collection::vec(1u8..6, 0..12)) {
        let mut wallet = Wallet::new();
        for seed in &seeds {
            wallet.add(seeded(*seed));
        }

        for probe in 1u8..6 {
            let expected = seeds.iter().position(|s| *s == probe);
            let public_key = seeded(probe).public_key().to_base64url();
            prop_assert_eq!(wallet.account_index(&public_key), expected);
        }
    }
}
