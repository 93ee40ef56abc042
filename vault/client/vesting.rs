//! Vesting schedules of a user in an IFO, for the basic and the unlimited pool.
//!
//! Reads go out in two multicall round trips: the schedule ids first, then every schedule
//! figure at once. Failed sub-calls are swapped for the default record of the affected field.

use bigdecimal::BigDecimal;
use log::{
    debug,
    warn,
};
use vault_helpers::math::u256_to_decimal;
use vault_trait::{
    Address,
    Call,
    ClientError,
    Connection,
    OfferingAndRefundingAmounts,
    PoolVestingInformation,
    VestingId,
    VestingSchedule,
    U256,
};

use crate::{
    contracts::ifo,
    multicall::{
        multicall_v2,
        take_entry,
        MulticallOptions,
    },
};

const ALLOW_FAILURE: MulticallOptions = MulticallOptions {
    require_success: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolId {
    Basic,
    Unlimited,
}

impl PoolId {
    pub const ALL: [PoolId; 2] = [PoolId::Basic, PoolId::Unlimited];

    pub fn pid(self) -> u8 {
        match self {
            PoolId::Basic => 0,
            PoolId::Unlimited => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VestingCharacteristics {
    /// Zero until the id is known.
    pub vesting_id: VestingId,
    pub offering_amount_in_token: BigDecimal,
    pub vesting_released: BigDecimal,
    pub vesting_amount_total: BigDecimal,
    pub vesting_compute_releasable_amount: BigDecimal,
    /// Percent of the offering subject to vesting, as the contract reports it.
    pub vesting_information_percentage: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserVestingData {
    pub pool_basic: VestingCharacteristics,
    pub pool_unlimited: VestingCharacteristics,
}

impl UserVestingData {
    pub fn pool(&self, pool: PoolId) -> &VestingCharacteristics {
        match pool {
            PoolId::Basic => &self.pool_basic,
            PoolId::Unlimited => &self.pool_unlimited,
        }
    }

    fn pool_mut(&mut self, pool: PoolId) -> &mut VestingCharacteristics {
        match pool {
            PoolId::Basic => &mut self.pool_basic,
            PoolId::Unlimited => &mut self.pool_unlimited,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VestingData {
    pub ifo: Address,
    pub user_vesting_data: UserVestingData,
}

/// What one entry of the second round trip answers.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Amounts,
    Schedule(PoolId),
    Releasable(PoolId),
    Information(PoolId),
}

async fn fetch_vesting_ids<C: Connection>(
    conn: &C,
    ifo: &ifo::Instance,
    account: Address,
) -> Result<[Option<VestingId>; 2], ClientError> {
    let calls = PoolId::ALL
        .iter()
        .map(|pool| ifo.vesting_schedule_id_call(account, pool.pid()))
        .collect();
    let results = multicall_v2(conn, calls, ALLOW_FAILURE).await?;
    Ok([
        take_entry(&results, 0, "vestingScheduleId"),
        take_entry(&results, 1, "vestingScheduleId"),
    ])
}

fn percentage(information: PoolVestingInformation) -> u64 {
    u64::try_from(information.percentage).unwrap_or(u64::MAX)
}

pub async fn fetch_user_wallet_ifo_data<C: Connection>(
    conn: &C,
    ifo: &ifo::Instance,
    account: Option<Address>,
) -> Result<VestingData, ClientError> {
    let mut data = UserVestingData::default();
    let Some(account) = account else {
        return Ok(VestingData {
            ifo: (*ifo).into(),
            user_vesting_data: data,
        })
    };

    let ids = fetch_vesting_ids(conn, ifo, account).await?;

    let mut slots = vec![Slot::Amounts];
    let mut calls: Vec<Call> = vec![ifo.offering_and_refunding_amounts_call(
        account,
        &PoolId::ALL.map(PoolId::pid),
    )];
    for (pool, id) in PoolId::ALL.into_iter().zip(ids) {
        match id {
            Some(id) => {
                data.pool_mut(pool).vesting_id = id;
                slots.push(Slot::Schedule(pool));
                calls.push(ifo.vesting_schedule_call(id));
                slots.push(Slot::Releasable(pool));
                calls.push(ifo.releasable_amount_call(id));
            }
            None => warn!("vesting schedule id of {pool:?} pool unavailable for {account:?}"),
        }
    }
    for pool in PoolId::ALL {
        slots.push(Slot::Information(pool));
        calls.push(ifo.pool_vesting_information_call(pool.pid()));
    }

    let results = multicall_v2(conn, calls, ALLOW_FAILURE).await?;

    for (index, slot) in slots.into_iter().enumerate() {
        match slot {
            Slot::Amounts => {
                let amounts: Option<Vec<OfferingAndRefundingAmounts>> =
                    take_entry(&results, index, "offeringAndRefundingAmounts");
                // Each pool takes its own offering amount, the unlimited pool included.
                for (pool, pool_amounts) in PoolId::ALL.into_iter().zip(amounts.unwrap_or_default()) {
                    data.pool_mut(pool).offering_amount_in_token =
                        u256_to_decimal(pool_amounts.offering_amount);
                }
            }
            Slot::Schedule(pool) => {
                if let Some(schedule) = take_entry::<VestingSchedule>(&results, index, "VestingSchedule") {
                    let record = data.pool_mut(pool);
                    record.vesting_released = u256_to_decimal(schedule.released);
                    record.vesting_amount_total = u256_to_decimal(schedule.amount_total);
                }
            }
            Slot::Releasable(pool) => {
                if let Some(amount) = take_entry::<U256>(&results, index, "releasableAmount") {
                    data.pool_mut(pool).vesting_compute_releasable_amount = u256_to_decimal(amount);
                }
            }
            Slot::Information(pool) => {
                let information: Option<PoolVestingInformation> =
                    take_entry(&results, index, "PoolVestingInformation");
                if let Some(information) = information {
                    data.pool_mut(pool).vesting_information_percentage = percentage(information);
                }
            }
        }
    }

    debug!("vesting data for {account:?}: {data:?}");
    Ok(VestingData {
        ifo: (*ifo).into(),
        user_vesting_data: data,
    })
}
