//! Wallet: an ordered list of keypairs with one active signer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use pchain_primitives::{base64url, Keypair};

use crate::error::WalletError;
use crate::generator::{KeypairGenerator, OsRngGenerator};
use crate::record::KeypairRecord;

/// Stores a list of keypairs and designates one of them as the active account.
///
/// Entries are shared as `Arc<Keypair>`. The active account is a reference to
/// an entry, not a copy, so identity checks use [`Arc::ptr_eq`]. Duplicate
/// keypairs are allowed.
///
/// The active reference is only changed by [`Wallet::add`] (first entry),
/// [`Wallet::create`] and [`Wallet::set_active_account`]. Removing or clearing
/// entries leaves it in place, so it can outlive its entry.
#[derive(Debug)]
pub struct Wallet<G = OsRngGenerator> {
    accounts: Vec<Arc<Keypair>>,
    active_keypair: Option<Arc<Keypair>>,
    generator: G,
}

/// A file that could not be imported by [`Wallet::load_keypairs_from_json`].
#[derive(Debug)]
pub struct ImportFailure {
    pub path: PathBuf,
    pub error: WalletError,
}

/// Outcome of [`Wallet::load_keypairs_from_json`].
#[derive(Debug)]
pub struct ImportReport<'a> {
    /// The wallet's accounts after every file was processed.
    pub accounts: &'a [Arc<Keypair>],
    /// Number of keypairs appended.
    pub imported: usize,
    /// Files that failed, in input order.
    pub failures: Vec<ImportFailure>,
}

impl ImportReport<'_> {
    /// Whether every file was imported.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Wallet {
    /// Create an empty wallet that generates keys from the OS random source.
    pub fn new() -> Self {
        Self::with_generator(OsRngGenerator)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: KeypairGenerator> Wallet<G> {
    /// Create an empty wallet with a custom keypair generator.
    pub fn with_generator(generator: G) -> Self {
        Wallet {
            accounts: Vec::new(),
            active_keypair: None,
            generator,
        }
    }

    /// The keypairs in insertion order.
    pub fn accounts(&self) -> &[Arc<Keypair>] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Index of the first account whose base64url public key equals `public_key`.
    pub fn account_index(&self, public_key: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|keypair| keypair.public_key().to_base64url() == public_key)
    }

    /// Generate `n` keypairs and append them, then make the first account of
    /// the wallet active.
    ///
    /// The active account becomes `accounts()[0]` even when the wallet already
    /// held keypairs, and even when `n` is zero. If a generation fails, the
    /// keypairs generated so far stay in the wallet and the active account is
    /// left as it was.
    ///
    /// # Returns
    /// All accounts in the wallet.
    pub async fn create(&mut self, n: usize) -> Result<&[Arc<Keypair>], WalletError> {
        for _ in 0..n {
            let keypair = self.generator.generate().await?;
            self.add(keypair);
        }
        self.active_keypair = self.accounts.first().cloned();
        debug!(created = n, total = self.accounts.len(), "created wallet accounts");
        Ok(&self.accounts)
    }

    /// Append a keypair. It becomes active only if the wallet was empty.
    ///
    /// # Returns
    /// All accounts in the wallet.
    pub fn add(&mut self, keypair: impl Into<Arc<Keypair>>) -> &[Arc<Keypair>] {
        let keypair = keypair.into();
        if self.accounts.is_empty() {
            self.active_keypair = Some(Arc::clone(&keypair));
        }
        self.accounts.push(keypair);
        &self.accounts
    }

    /// Remove every keypair whose private key matches `private_key`.
    ///
    /// Keys are compared by their base64url encoding. The active account is
    /// not changed, even if it was removed.
    ///
    /// # Returns
    /// The remaining accounts.
    pub fn remove(&mut self, private_key: &[u8]) -> &[Arc<Keypair>] {
        let target = base64url::encode(private_key);
        let before = self.accounts.len();
        self.accounts
            .retain(|keypair| keypair.private_key().to_base64url() != target);
        debug!(removed = before - self.accounts.len(), "removed wallet accounts");
        &self.accounts
    }

    /// Remove all accounts. The active account is not changed.
    pub fn clear(&mut self) {
        self.accounts.clear();
    }

    pub fn active_account(&self) -> Option<&Arc<Keypair>> {
        self.active_keypair.as_ref()
    }

    /// Make `keypair` the active account. It does not need to be in the wallet.
    pub fn set_active_account(&mut self, keypair: impl Into<Arc<Keypair>>) {
        self.active_keypair = Some(keypair.into());
    }

    /// Parse one JSON keypair record and append it.
    ///
    /// Imported keypairs are pushed as-is and never become active automatically.
    pub fn import_keypair_json(&mut self, json: &str) -> Result<&Arc<Keypair>, WalletError> {
        let keypair = KeypairRecord::from_json(json)?.to_keypair()?;
        self.accounts.push(Arc::new(keypair));
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Read keypair records from JSON files and append every valid one.
    ///
    /// All files are read concurrently; the wallet is only modified once every
    /// read has finished. Keypairs are appended in input order, and files that
    /// cannot be read or parsed are reported in [`ImportReport::failures`]
    /// without affecting the others.
    pub async fn load_keypairs_from_json<P: AsRef<Path>>(&mut self, paths: &[P]) -> ImportReport<'_> {
        let reads = join_all(paths.iter().map(|path| async move {
            let path = path.as_ref();
            let result = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| WalletError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            (path.to_path_buf(), result)
        }))
        .await;

        let mut imported = 0;
        let mut failures = Vec::new();
        for (path, read) in reads {
            match read.and_then(|text| self.import_keypair_json(&text).map(drop)) {
                Ok(()) => imported += 1,
                Err(error) => {
                    warn!(path = %path.display(), error = %error, "failed to import keypair");
                    failures.push(ImportFailure { path, error });
                }
            }
        }

        debug!(imported, failed = failures.len(), "imported keypairs from json");
        ImportReport {
            accounts: &self.accounts,
            imported,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU8, Ordering};

    use pchain_primitives::PrivateKey;

    /// Generates keypairs from seeds 1, 2, 3, ...
    #[derive(Default)]
    struct SeqGenerator {
        next: AtomicU8,
    }

    impl KeypairGenerator for SeqGenerator {
        async fn generate(&self) -> Result<Keypair, WalletError> {
            let seed = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            let pk = PrivateKey::from_bytes(&[seed; 32])
                .map_err(|e| WalletError::Generation(e.to_string()))?;
            Ok(Keypair::from_private_key(pk))
        }
    }

    /// Fails after `remaining` successful generations.
    struct FailingGenerator {
        remaining: AtomicU8,
    }

    impl KeypairGenerator for FailingGenerator {
        async fn generate(&self) -> Result<Keypair, WalletError> {
            if self.remaining.load(Ordering::SeqCst) == 0 {
                return Err(WalletError::Generation("entropy source unavailable".into()));
            }
            self.remaining.fetch_sub(1, Ordering::SeqCst);
            Ok(Keypair::generate())
        }
    }

    fn seeded(seed: u8) -> Keypair {
        Keypair::from_private_key(PrivateKey::from_bytes(&[seed; 32]).unwrap())
    }

    fn is_active(wallet: &Wallet<impl KeypairGenerator>, keypair: &Arc<Keypair>) -> bool {
        wallet
            .active_account()
            .is_some_and(|active| Arc::ptr_eq(active, keypair))
    }

    #[test]
    fn test_new_wallet_is_empty() {
        let wallet = Wallet::new();
        assert!(wallet.is_empty());
        assert!(wallet.active_account().is_none());
    }

    #[tokio::test]
    async fn test_create_sets_first_account_active() {
        let mut wallet = Wallet::new();
        let accounts = wallet.create(3).await.unwrap().to_vec();

        assert_eq!(accounts.len(), 3);
        assert!(is_active(&wallet, &accounts[0]));
    }

    #[tokio::test]
    async fn test_set_active_account() {
        let mut wallet = Wallet::new();
        wallet.create(3).await.unwrap();
        let third = Arc::clone(&wallet.accounts()[2]);

        wallet.set_active_account(Arc::clone(&third));
        assert!(is_active(&wallet, &third));
    }

    #[tokio::test]
    async fn test_add_to_non_empty_wallet_keeps_active() {
        let mut wallet = Wallet::new();
        wallet.create(3).await.unwrap();
        let keypair = Arc::new(Keypair::generate());

        wallet.add(Arc::clone(&keypair));

        assert_eq!(wallet.len(), 4);
        assert!(Arc::ptr_eq(&wallet.accounts()[3], &keypair));
        assert!(is_active(&wallet, &Arc::clone(&wallet.accounts()[0])));

        wallet.set_active_account(Arc::clone(&keypair));
        assert!(is_active(&wallet, &Arc::clone(&wallet.accounts()[3])));
    }

    #[test]
    fn test_add_to_empty_wallet_activates() {
        let mut wallet = Wallet::new();
        let keypair = Arc::new(seeded(1));
        wallet.add(Arc::clone(&keypair));
        assert!(is_active(&wallet, &keypair));
    }

    #[test]
    fn test_active_is_a_reference_not_a_copy() {
        let mut wallet = Wallet::new();
        wallet.add(seeded(1));
        let duplicate = Arc::new(seeded(1));
        wallet.add(Arc::clone(&duplicate));

        // Equal by value, but the first entry is the active one.
        assert_eq!(wallet.accounts()[0], wallet.accounts()[1]);
        assert!(is_active(&wallet, &Arc::clone(&wallet.accounts()[0])));
        assert!(!is_active(&wallet, &duplicate));
    }

    #[tokio::test]
    async fn test_create_with_injected_generator() {
        let mut wallet = Wallet::with_generator(SeqGenerator::default());
        wallet.create(2).await.unwrap();

        assert_eq!(*wallet.accounts()[0].as_ref(), seeded(1));
        assert_eq!(*wallet.accounts()[1].as_ref(), seeded(2));
    }

    #[tokio::test]
    async fn test_create_on_non_empty_wallet_resets_to_first() {
        let mut wallet = Wallet::with_generator(SeqGenerator::default());
        wallet.create(2).await.unwrap();
        let second = Arc::clone(&wallet.accounts()[1]);
        wallet.set_active_account(Arc::clone(&second));

        wallet.create(2).await.unwrap();

        assert_eq!(wallet.len(), 4);
        assert!(is_active(&wallet, &Arc::clone(&wallet.accounts()[0])));
    }

    #[tokio::test]
    async fn test_create_zero_still_resets_active() {
        let mut wallet = Wallet::with_generator(SeqGenerator::default());
        wallet.create(2).await.unwrap();
        wallet.set_active_account(Arc::clone(&wallet.accounts()[1]));

        wallet.create(0).await.unwrap();

        assert_eq!(wallet.len(), 2);
        assert!(is_active(&wallet, &Arc::clone(&wallet.accounts()[0])));
    }

    #[tokio::test]
    async fn test_create_failure_keeps_partial_progress() {
        let mut wallet = Wallet::with_generator(FailingGenerator {
            remaining: AtomicU8::new(2),
        });
        let outsider = Arc::new(seeded(9));
        wallet.set_active_account(Arc::clone(&outsider));

        let err = wallet.create(3).await.unwrap_err();

        assert!(matches!(err, WalletError::Generation(_)));
        assert_eq!(wallet.len(), 2);
        // The first generated key was added to an empty wallet and became active.
        assert!(is_active(&wallet, &Arc::clone(&wallet.accounts()[0])));
    }

    #[test]
    fn test_account_index() {
        let mut wallet = Wallet::new();
        wallet.add(seeded(1));
        wallet.add(seeded(2));
        wallet.add(seeded(2));

        let second = seeded(2).public_key().to_base64url();
        assert_eq!(wallet.account_index(&second), Some(1));
        assert_eq!(
            wallet.account_index(&seeded(3).public_key().to_base64url()),
            None
        );
        assert_eq!(wallet.account_index(""), None);
    }

    #[test]
    fn test_remove_matching_entries() {
        let mut wallet = Wallet::new();
        wallet.add(seeded(1));
        wallet.add(seeded(2));
        wallet.add(seeded(3));
        wallet.add(seeded(2));

        let remaining = wallet.remove(&[2u8; 32]);

        assert_eq!(remaining.len(), 2);
        assert_eq!(*remaining[0].as_ref(), seeded(1));
        assert_eq!(*remaining[1].as_ref(), seeded(3));
    }

    #[test]
    fn test_remove_non_active_keeps_active() {
        let mut wallet = Wallet::new();
        wallet.add(seeded(1));
        wallet.add(seeded(2));
        let active = Arc::clone(wallet.active_account().unwrap());

        wallet.remove(&[2u8; 32]);

        assert!(is_active(&wallet, &active));
    }

    #[test]
    fn test_remove_active_leaves_stale_reference() {
        let mut wallet = Wallet::new();
        wallet.add(seeded(1));
        wallet.add(seeded(2));
        let active = Arc::clone(wallet.active_account().unwrap());

        wallet.remove(&[1u8; 32]);

        assert_eq!(wallet.len(), 1);
        assert!(is_active(&wallet, &active));
        assert_eq!(wallet.account_index(&active.public_key().to_base64url()), None);
    }

    #[test]
    fn test_remove_unknown_key_is_noop() {
        let mut wallet = Wallet::new();
        wallet.add(seeded(1));
        assert_eq!(wallet.remove(&[7u8; 32]).len(), 1);
        assert_eq!(wallet.remove(&[]).len(), 1);
    }

    #[test]
    fn test_clear_keeps_active() {
        let mut wallet = Wallet::new();
        wallet.add(seeded(1));
        let active = Arc::clone(wallet.active_account().unwrap());

        wallet.clear();

        assert!(wallet.is_empty());
        assert!(is_active(&wallet, &active));
    }

    #[test]
    fn test_set_active_account_outside_wallet() {
        let mut wallet = Wallet::new();
        wallet.add(seeded(1));
        let outsider = Arc::new(seeded(5));

        wallet.set_active_account(Arc::clone(&outsider));

        assert!(is_active(&wallet, &outsider));
        assert_eq!(wallet.len(), 1);
    }

    #[test]
    fn test_import_does_not_activate() {
        let mut wallet = Wallet::new();
        let json = KeypairRecord::from(&seeded(4)).to_json();

        let imported = Arc::clone(wallet.import_keypair_json(&json).unwrap());

        assert_eq!(*imported, seeded(4));
        assert_eq!(wallet.len(), 1);
        assert!(wallet.active_account().is_none());
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        let mut wallet = Wallet::new();
        let err = wallet.import_keypair_json("[]").unwrap_err();
        assert!(matches!(err, WalletError::MalformedKeypair(_)));
        assert!(wallet.is_empty());
    }
}
