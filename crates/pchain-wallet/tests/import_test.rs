use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use pchain_primitives::{Keypair, PrivateKey};
use pchain_wallet::{KeypairRecord, Wallet, WalletError};

fn seeded(seed: u8) -> Keypair {
    Keypair::from_private_key(PrivateKey::from_bytes(&[seed; 32]).unwrap())
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn write_keypair(dir: &TempDir, name: &str, keypair: &Keypair) -> PathBuf {
    write(dir, name, &KeypairRecord::from(keypair).to_json())
}

#[tokio::test]
async fn test_import_keypairs_in_input_order() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write_keypair(&dir, "a.json", &seeded(1)),
        write_keypair(&dir, "b.json", &seeded(2)),
        write_keypair(&dir, "c.json", &seeded(3)),
    ];

    let mut wallet = Wallet::new();
    let report = wallet.load_keypairs_from_json(&paths).await;

    assert!(report.is_complete());
    assert_eq!(report.imported, 3);
    assert_eq!(report.accounts.len(), 3);
    for (i, account) in report.accounts.iter().enumerate() {
        assert_eq!(**account, seeded(i as u8 + 1));
    }
}

#[tokio::test]
async fn test_imported_keypairs_are_appended_without_activation() {
    let dir = TempDir::new().unwrap();
    let path = write_keypair(&dir, "imported.json", &seeded(8));

    let mut wallet = Wallet::new();
    wallet.add(seeded(1));
    let active = Arc::clone(wallet.active_account().unwrap());

    let report = wallet.load_keypairs_from_json(&[path]).await;
    assert_eq!(report.imported, 1);

    assert_eq!(wallet.len(), 2);
    assert_eq!(*wallet.accounts()[1], seeded(8));
    assert!(Arc::ptr_eq(wallet.active_account().unwrap(), &active));
}

#[tokio::test]
async fn test_import_into_empty_wallet_leaves_no_active() {
    let dir = TempDir::new().unwrap();
    let path = write_keypair(&dir, "only.json", &seeded(2));

    let mut wallet = Wallet::new();
    wallet.load_keypairs_from_json(&[path]).await;

    assert_eq!(wallet.len(), 1);
    assert!(wallet.active_account().is_none());
}

#[tokio::test]
async fn test_malformed_file_does_not_block_others() {
    let dir = TempDir::new().unwrap();
    let good = write_keypair(&dir, "good.json", &seeded(4));
    let bad = write(&dir, "bad.json", "{ \"public_key\": 42 }");

    let mut wallet = Wallet::new();
    let report = wallet.load_keypairs_from_json(&[bad.clone(), good]).await;

    assert_eq!(report.imported, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, bad);
    assert!(matches!(
        report.failures[0].error,
        WalletError::MalformedKeypair(_)
    ));
    assert_eq!(*report.accounts[0], seeded(4));
}

#[tokio::test]
async fn test_missing_file_reported_as_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    let mut wallet = Wallet::new();
    let report = wallet.load_keypairs_from_json(&[missing.clone()]).await;

    assert_eq!(report.imported, 0);
    match &report.failures[0].error {
        WalletError::Io { path, .. } => assert_eq!(path, &missing),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert!(wallet.is_empty());
}

#[tokio::test]
async fn test_mismatched_halves_rejected() {
    let dir = TempDir::new().unwrap();
    let record = KeypairRecord {
        public_key: seeded(1).public_key().to_base64url(),
        private_key: seeded(2).private_key().to_base64url(),
    };
    let path = write(&dir, "mixed.json", &record.to_json());

    let mut wallet = Wallet::new();
    let report = wallet.load_keypairs_from_json(&[path]).await;

    assert!(!report.is_complete());
    assert!(matches!(
        report.failures[0].error,
        WalletError::MalformedKeypair(_)
    ));
    assert!(wallet.is_empty());
}

#[tokio::test]
async fn test_empty_path_list() {
    let mut wallet = Wallet::new();
    let paths: [PathBuf; 0] = [];
    let report = wallet.load_keypairs_from_json(&paths).await;

    assert!(report.is_complete());
    assert_eq!(report.imported, 0);
    assert!(report.accounts.is_empty());
}
