use anchor_lang::prelude::*;

use crate::{
    common::{RelayData, V3RelayData},
    utils::keccak256,
};

// Identity of a relay on this ledger: keccak of the borsh encoded relay (variant tag included) followed by the
// destination chain id in little endian.
pub fn get_relay_hash(relay_data: &RelayData, chain_id: u64) -> Result<[u8; 32]> {
    let mut input = Vec::new();
    AnchorSerialize::serialize(relay_data, &mut input).map_err(|_| ErrorCode::AccountDidNotSerialize)?;
    input.extend_from_slice(&chain_id.to_le_bytes());
    Ok(keccak256(&input))
}

pub fn get_v3_relay_hash(relay_data: &V3RelayData, chain_id: u64) -> Result<[u8; 32]> {
    get_relay_hash(&RelayData::V3(relay_data.clone()), chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::LegacyRelayData;

    fn v3_relay_data() -> V3RelayData {
        V3RelayData {
            depositor: Pubkey::new_from_array([1; 32]),
            recipient: Pubkey::new_from_array([2; 32]),
            exclusive_relayer: Pubkey::default(),
            input_token: Pubkey::new_from_array([3; 32]),
            output_token: Pubkey::new_from_array([4; 32]),
            input_amount: 1000,
            output_amount: 900,
            origin_chain_id: 1,
            deposit_id: [7; 32],
            fill_deadline: 2000,
            exclusivity_deadline: 0,
            message: vec![],
        }
    }

    #[test]
    fn relay_hash_is_deterministic() {
        let relay_data = v3_relay_data();
        assert_eq!(get_v3_relay_hash(&relay_data, 10).unwrap(), get_v3_relay_hash(&relay_data.clone(), 10).unwrap());
    }

    #[test]
    fn destination_chain_is_part_of_identity() {
        let relay_data = v3_relay_data();
        assert_ne!(get_v3_relay_hash(&relay_data, 10).unwrap(), get_v3_relay_hash(&relay_data, 11).unwrap());
    }

    #[test]
    fn every_field_is_part_of_identity() {
        let base = get_v3_relay_hash(&v3_relay_data(), 10).unwrap();

        let mut relay_data = v3_relay_data();
        relay_data.output_amount += 1;
        assert_ne!(get_v3_relay_hash(&relay_data, 10).unwrap(), base);

        let mut relay_data = v3_relay_data();
        relay_data.message = vec![0];
        assert_ne!(get_v3_relay_hash(&relay_data, 10).unwrap(), base);

        let mut relay_data = v3_relay_data();
        relay_data.exclusivity_deadline = 1;
        assert_ne!(get_v3_relay_hash(&relay_data, 10).unwrap(), base);
    }

    #[test]
    fn variants_never_share_identities() {
        let legacy = LegacyRelayData {
            depositor: Pubkey::new_from_array([1; 32]),
            recipient: Pubkey::new_from_array([2; 32]),
            destination_token: Pubkey::new_from_array([4; 32]),
            amount: 1000,
            origin_chain_id: 1,
            destination_chain_id: 10,
            realized_lp_fee_pct: 0,
            relayer_fee_pct: 0,
            deposit_id: 0,
            message: vec![],
        };
        let legacy_hash = get_relay_hash(&legacy.into(), 10).unwrap();
        assert_ne!(legacy_hash, get_v3_relay_hash(&v3_relay_data(), 10).unwrap());
    }
}
