//! Shared fixtures for the ledger integration tests: an in-memory host with token balances, a settable clock, a record
//! of pre-payout hook calls and an optional reentrancy attempt made from inside a transfer.
#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use spoke_ledger::{
    common::{LegacyRelayData, V3RelayData},
    constants::ONE_HUNDRED_PCT,
    host::{SpokeHost, SpokePoolHandle},
    state::FillStatus,
    SlowFillLeaf, SpokePool,
};

pub const CHAIN_ID: u64 = 34_268_394_551_451;
pub const ORIGIN_CHAIN_ID: u64 = 1;
pub const REPAYMENT_CHAIN_ID: u64 = 10;
pub const NOW: u32 = 1_700_000_000;
pub const PCT: i128 = ONE_HUNDRED_PCT / 100;

pub fn key(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

pub fn vault() -> Pubkey {
    key(100)
}
pub fn depositor() -> Pubkey {
    key(1)
}
pub fn recipient() -> Pubkey {
    key(2)
}
pub fn relayer() -> Pubkey {
    key(3)
}
pub fn other_relayer() -> Pubkey {
    key(4)
}
pub fn input_token() -> Pubkey {
    key(5)
}
pub fn output_token() -> Pubkey {
    key(6)
}

/// Calls the host can make back into the pool while a transfer is in flight.
#[derive(Clone, Debug)]
pub enum Reentry {
    FillV3Relay(V3RelayData),
    RequestV3SlowFill(V3RelayData),
    ExecuteSlowRelayLeaf { leaf: SlowFillLeaf, root_bundle_id: u32, proof: Vec<[u8; 32]> },
    PauseFills,
    ReadFillStatus([u8; 32]),
}

#[derive(Default)]
pub struct MockHost {
    pub now: u32,
    balances: HashMap<(Pubkey, Pubkey), u64>,
    pub hooked_tokens: Vec<Pubkey>,
    pub transfers: usize,
    pub reentry: Option<Reentry>,
    pub reentry_errors: Vec<String>,
    pub observed_fill_statuses: Vec<FillStatus>,
    pub fail_hook: bool,
}

impl MockHost {
    pub fn new() -> Self {
        Self { now: NOW, ..Default::default() }
    }

    pub fn mint_to(&mut self, mint: &Pubkey, owner: &Pubkey, amount: u64) {
        *self.balances.entry((*mint, *owner)).or_default() += amount;
    }

    pub fn balance(&self, mint: &Pubkey, owner: &Pubkey) -> u64 {
        self.balances.get(&(*mint, *owner)).copied().unwrap_or_default()
    }
}

impl MockHost {
    fn attempt_reentry(&mut self, pool: &mut SpokePoolHandle<'_>) {
        if let Some(reentry) = self.reentry.take() {
            let result = match reentry {
                Reentry::FillV3Relay(relay_data) => {
                    pool.fill_v3_relay(self, relayer(), relay_data, REPAYMENT_CHAIN_ID, relayer())
                }
                Reentry::RequestV3SlowFill(relay_data) => pool.request_v3_slow_fill(self, relayer(), relay_data),
                Reentry::ExecuteSlowRelayLeaf { leaf, root_bundle_id, proof } => {
                    pool.execute_slow_relay_leaf(self, leaf, root_bundle_id, proof)
                }
                Reentry::PauseFills => pool.pause_fills(true),
                Reentry::ReadFillStatus(relay_hash) => {
                    self.observed_fill_statuses.push(pool.pool().fill_status(&relay_hash));
                    return;
                }
            };
            self.reentry_errors.push(error_name(result));
        }
    }

    fn debit(&mut self, mint: &Pubkey, from: &Pubkey, amount: u64) -> Result<()> {
        let from_balance = self.balances.entry((*mint, *from)).or_default();
        if *from_balance < amount {
            return Err(ProgramError::InsufficientFunds.into());
        }
        *from_balance -= amount;
        Ok(())
    }
}

impl SpokeHost for MockHost {
    fn get_current_time(&self) -> Result<u32> {
        Ok(self.now)
    }

    fn transfer(
        &mut self,
        mut pool: SpokePoolHandle<'_>,
        mint: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        self.attempt_reentry(&mut pool);

        self.debit(mint, from, amount)?;
        *self.balances.entry((*mint, *to)).or_default() += amount;
        self.transfers += 1;

        Ok(())
    }

    fn transfer_batch(
        &mut self,
        mut pool: SpokePoolHandle<'_>,
        mint: &Pubkey,
        from: &Pubkey,
        transfers: &[(Pubkey, u64)],
    ) -> Result<()> {
        self.attempt_reentry(&mut pool);

        // The whole batch is debited up front so an underfunded batch moves nothing.
        let total = transfers
            .iter()
            .try_fold(0u64, |total, (_, amount)| total.checked_add(*amount))
            .ok_or(ProgramError::ArithmeticOverflow)?;
        self.debit(mint, from, total)?;
        for (to, amount) in transfers {
            *self.balances.entry((*mint, *to)).or_default() += amount;
        }
        self.transfers += transfers.len();

        Ok(())
    }

    fn pre_execute_leaf_hook(&mut self, output_token: &Pubkey) -> Result<()> {
        if self.fail_hook {
            return Err(ProgramError::Custom(1).into());
        }
        self.hooked_tokens.push(*output_token);
        Ok(())
    }
}

/// Name of the anchor error a failed call returned, or an empty string on success.
pub fn error_name<T>(result: Result<T>) -> String {
    match result {
        Ok(_) => String::new(),
        Err(anchor_lang::error::Error::AnchorError(error)) => error.error_name,
        Err(anchor_lang::error::Error::ProgramError(error)) => format!("{:?}", error.program_error),
    }
}

pub fn pool() -> SpokePool {
    SpokePool::initialize(CHAIN_ID, vault())
}

pub fn v3_relay_data() -> V3RelayData {
    V3RelayData {
        depositor: depositor(),
        recipient: recipient(),
        exclusive_relayer: Pubkey::default(),
        input_token: input_token(),
        output_token: output_token(),
        input_amount: 1_000_000,
        output_amount: 990_000,
        origin_chain_id: ORIGIN_CHAIN_ID,
        deposit_id: [1; 32],
        fill_deadline: NOW + 3600,
        exclusivity_deadline: 0,
        message: vec![],
    }
}

pub fn legacy_relay_data() -> LegacyRelayData {
    LegacyRelayData {
        depositor: depositor(),
        recipient: recipient(),
        destination_token: output_token(),
        amount: 1_000_000,
        origin_chain_id: ORIGIN_CHAIN_ID,
        destination_chain_id: CHAIN_ID,
        realized_lp_fee_pct: (10 * PCT) as i64,
        relayer_fee_pct: (5 * PCT) as i64,
        deposit_id: 0,
        message: vec![],
    }
}
