//! Pools, stakes, deposits and validator sets.

use borsh::{BorshDeserialize, BorshSerialize};

use pchain_primitives::PublicAddress;

/// Stake held by `owner` in an operator's pool.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Stake {
    pub owner: PublicAddress,
    pub power: u64,
}

/// Balance an owner has deposited with an operator. The operator is the key
/// the deposit was looked up by.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Deposit {
    pub owner: PublicAddress,
    pub balance: u64,
    pub auto_stake_rewards: bool,
}

/// A pool together with every stake delegated to it.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PoolWithDelegators {
    pub operator: PublicAddress,
    pub power: u64,
    pub commission_rate: u8,
    pub operator_stake: Option<Stake>,
    pub delegated_stakes: Vec<Stake>,
}

/// A pool without its delegated stakes.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PoolWithoutDelegators {
    pub operator: PublicAddress,
    pub power: u64,
    pub commission_rate: u8,
    pub operator_stake: Option<Stake>,
}

/// A pool as returned by `pools`, with or without stakes depending on the
/// request's `include_stakes`.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Pool {
    WithStakes(PoolWithDelegators),
    WithoutStakes(PoolWithoutDelegators),
}

impl Pool {
    pub fn operator(&self) -> &PublicAddress {
        match self {
            Pool::WithStakes(pool) => &pool.operator,
            Pool::WithoutStakes(pool) => &pool.operator,
        }
    }

    pub fn power(&self) -> u64 {
        match self {
            Pool::WithStakes(pool) => pool.power,
            Pool::WithoutStakes(pool) => pool.power,
        }
    }
}

/// The pools that make up one epoch's validator set.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum ValidatorSet {
    WithDelegators(Vec<PoolWithDelegators>),
    WithoutDelegators(Vec<PoolWithoutDelegators>),
}

impl ValidatorSet {
    /// Number of pools in the set.
    pub fn len(&self) -> usize {
        match self {
            ValidatorSet::WithDelegators(pools) => pools.len(),
            ValidatorSet::WithoutDelegators(pools) => pools.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Operators of the pools, in set order.
    pub fn operators(&self) -> Vec<PublicAddress> {
        match self {
            ValidatorSet::WithDelegators(pools) => pools.iter().map(|p| p.operator).collect(),
            ValidatorSet::WithoutDelegators(pools) => pools.iter().map(|p| p.operator).collect(),
        }
    }
}

/// An (operator, owner) pair addressing a deposit or stake.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, BorshSerialize, BorshDeserialize,
)]
pub struct OperatorOwner {
    pub operator: PublicAddress,
    pub owner: PublicAddress,
}

impl From<(PublicAddress, PublicAddress)> for OperatorOwner {
    fn from((operator, owner): (PublicAddress, PublicAddress)) -> Self {
        OperatorOwner { operator, owner }
    }
}
