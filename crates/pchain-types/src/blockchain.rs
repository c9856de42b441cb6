//! Transactions, receipts, blocks and accounts.

use borsh::{BorshDeserialize, BorshSerialize};

use pchain_primitives::{sha256, Keypair, PublicAddress, Sha256Hash, Signature};

/// A single instruction executed as part of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Command {
    /// Move `amount` grays from the signer to `recipient`.
    Transfer {
        recipient: PublicAddress,
        amount: u64,
    },
    /// Deploy contract bytecode.
    Deploy {
        contract: Vec<u8>,
        cbi_version: u32,
    },
    /// Call a contract method, optionally sending value with it.
    Call {
        target: PublicAddress,
        method: String,
        arguments: Option<Vec<Vec<u8>>>,
        amount: Option<u64>,
    },
    CreatePool {
        commission_rate: u8,
    },
    SetPoolSettings {
        commission_rate: u8,
    },
    DeletePool,
    CreateDeposit {
        operator: PublicAddress,
        balance: u64,
        auto_stake_rewards: bool,
    },
    SetDepositSettings {
        operator: PublicAddress,
        auto_stake_rewards: bool,
    },
    TopUpDeposit {
        operator: PublicAddress,
        amount: u64,
    },
    WithdrawDeposit {
        operator: PublicAddress,
        max_amount: u64,
    },
    StakeDeposit {
        operator: PublicAddress,
        max_amount: u64,
    },
    UnstakeDeposit {
        operator: PublicAddress,
        max_amount: u64,
    },
    /// Advance the staking epoch.
    NextEpoch,
}

/// A signed transaction.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Transaction {
    pub signer: PublicAddress,
    pub nonce: u64,
    pub commands: Vec<Command>,
    pub gas_limit: u64,
    pub max_base_fee_per_gas: u64,
    pub priority_fee_per_gas: u64,
    pub signature: Signature,
    pub hash: Sha256Hash,
}

impl Transaction {
    /// Build and sign a transaction with `keypair`.
    ///
    /// The signature covers the borsh encoding of the transaction with a
    /// zeroed signature and hash; the hash is `sha256(signature)`.
    pub fn new(
        keypair: &Keypair,
        nonce: u64,
        commands: Vec<Command>,
        gas_limit: u64,
        max_base_fee_per_gas: u64,
        priority_fee_per_gas: u64,
    ) -> Result<Self, borsh::io::Error> {
        let mut tx = Transaction {
            signer: *keypair.public_key(),
            nonce,
            commands,
            gas_limit,
            max_base_fee_per_gas,
            priority_fee_per_gas,
            signature: Signature::default(),
            hash: Sha256Hash::default(),
        };
        let signature = keypair.sign(&tx.signing_payload()?);
        tx.hash = sha256(signature.as_bytes());
        tx.signature = signature;
        Ok(tx)
    }

    /// The bytes a signer commits to: this transaction with signature and hash zeroed.
    pub fn signing_payload(&self) -> Result<Vec<u8>, borsh::io::Error> {
        let unsigned = Transaction {
            signature: Signature::default(),
            hash: Sha256Hash::default(),
            ..self.clone()
        };
        borsh::to_vec(&unsigned)
    }

    /// Check the signature against `signer` and the hash against the signature.
    pub fn is_valid(&self) -> bool {
        let Ok(payload) = self.signing_payload() else {
            return false;
        };
        self.hash == sha256(self.signature.as_bytes())
            && self.signer.verify(&payload, &self.signature)
    }
}

/// Outcome of executing one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum ExitStatus {
    Success,
    Failed,
    GasExhausted,
}

/// An event emitted by a contract.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Log {
    pub topic: Vec<u8>,
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CommandReceipt {
    pub exit_status: ExitStatus,
    pub gas_used: u64,
    pub return_values: Vec<u8>,
    pub logs: Vec<Log>,
}

/// One receipt per command of the transaction, in command order.
pub type Receipt = Vec<CommandReceipt>;

/// Size of a block's logs bloom filter in bytes.
pub const BLOOM_FILTER_LEN: usize = 256;

/// Consensus phase a quorum certificate was collected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Phase {
    Generic,
    Prepare,
    Precommit(u64),
    Commit(u64),
}

/// Votes of the validator set, one slot per validator in set order. `None`
/// marks a validator that did not vote.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct SignatureSet(pub Vec<Option<Signature>>);

impl SignatureSet {
    /// Number of validators that voted.
    pub fn count_some(&self) -> usize {
        self.0.iter().filter(|s| s.is_some()).count()
    }
}

/// Proof that a quorum of validators voted for `block` in `view`.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct QuorumCertificate {
    pub chain_id: u64,
    pub view: u64,
    pub block: Sha256Hash,
    pub phase: Phase,
    pub signatures: SignatureSet,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BlockHeader {
    pub hash: Sha256Hash,
    pub height: u64,
    /// Certificate for the parent block.
    pub justify: QuorumCertificate,
    pub data_hash: Sha256Hash,
    pub chain_id: u64,
    pub proposer: PublicAddress,
    /// Unix seconds.
    pub timestamp: u32,
    pub base_fee: u64,
    pub gas_used: u64,
    pub txs_hash: Sha256Hash,
    pub receipts_hash: Sha256Hash,
    pub state_hash: Sha256Hash,
    pub logs_bloom: [u8; BLOOM_FILTER_LEN],
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
    pub receipts: Vec<Receipt>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct AccountWithContract {
    pub nonce: u64,
    pub balance: u64,
    pub contract: Option<Vec<u8>>,
    pub cbi_version: Option<u32>,
    pub storage_hash: Option<Sha256Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct AccountWithoutContract {
    pub nonce: u64,
    pub balance: u64,
    pub cbi_version: Option<u32>,
    pub storage_hash: Option<Sha256Hash>,
}

/// World-state view of one account. The `state` request's
/// `include_contract` flag picks the variant.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Account {
    WithContract(AccountWithContract),
    WithoutContract(AccountWithoutContract),
}

impl Account {
    pub fn nonce(&self) -> u64 {
        match self {
            Account::WithContract(a) => a.nonce,
            Account::WithoutContract(a) => a.nonce,
        }
    }

    pub fn balance(&self) -> u64 {
        match self {
            Account::WithContract(a) => a.balance,
            Account::WithoutContract(a) => a.balance,
        }
    }
}
