use assert2::assert;
use bigdecimal::BigDecimal;
use vault_client::{
    apy::{
        fetch_cake_pool_emission,
        CAKE_POOL_PID,
    },
    contracts::cake_vault::{
        BOOST_WEIGHT,
        DURATION_FACTOR,
        GET_PRICE_PER_FULL_SHARE,
        PRECISION_FACTOR,
        TOTAL_SHARES,
    },
    BoostParams,
    VaultApy,
};
use vault_helpers::constants::BLOCKS_PER_YEAR;
use vault_trait::{
    MasterChefPoolInfo,
    U256,
};

use crate::{
    mock::MockChain,
    utils::{
        cake_vault,
        init_logger,
        masterchef,
        tokens,
        ALICE,
    },
};

const ONE_YEAR: i64 = 31_536_000;

/// One cake per block to special pools, all of it to the cake pool; pps 2 and 100 shares.
fn chain() -> MockChain {
    init_logger();
    let chain = MockChain::new(ALICE);
    let masterchef = masterchef();
    let vault = cake_vault();

    chain.respond(masterchef.cake_per_block_call(false), tokens(1));
    chain.respond(
        masterchef.pool_info_call(CAKE_POOL_PID),
        MasterChefPoolInfo {
            alloc_point: U256::from(1u64),
            ..Default::default()
        },
    );
    chain.respond(masterchef.total_special_alloc_point_call(), U256::from(1u64));
    chain.respond(vault.getter(GET_PRICE_PER_FULL_SHARE), tokens(2));
    chain.respond(vault.getter(TOTAL_SHARES), tokens(100));
    chain
}

#[tokio::test]
async fn vault_apy_from_chain() {
    let chain = chain();

    let apy = VaultApy::fetch(&chain, &cake_vault(), &masterchef(), ONE_YEAR).await;

    let flexible = BigDecimal::from(BLOCKS_PER_YEAR / 2);
    assert!(chain.round_trips() == 1);
    assert!(apy.flexible_apy() == Some(flexible.clone()));
    assert!(apy.locked_apy() == Some(flexible.clone() * BigDecimal::from(2)));
    assert!(apy.get_locked_apy(0) == Some(flexible));
}

#[tokio::test]
async fn missing_emission_leaves_apy_absent() {
    let chain = chain();
    chain.revert(&masterchef().total_special_alloc_point_call());

    let emission = fetch_cake_pool_emission(&chain, &masterchef()).await;
    assert!(emission == None);

    let apy = VaultApy::fetch(&chain, &cake_vault(), &masterchef(), ONE_YEAR).await;
    assert!(apy.flexible_apy() == None);
    assert!(apy.locked_apy() == None);
}

#[tokio::test]
async fn zero_special_allocation_leaves_apy_absent() {
    let chain = chain();
    chain.respond(masterchef().total_special_alloc_point_call(), U256::zero());

    let emission = fetch_cake_pool_emission(&chain, &masterchef()).await;
    assert!(emission == None);
}

#[tokio::test]
async fn boost_params_fall_back_per_entry() {
    let chain = chain();
    let vault = cake_vault();
    chain.respond(vault.getter(BOOST_WEIGHT), U256::from(2_000_000_000_000u64));
    chain.respond(vault.getter(DURATION_FACTOR), U256::zero());
    chain.revert(&vault.getter(PRECISION_FACTOR));

    let params = BoostParams::fetch(&chain, &vault).await;

    assert!(params.boost_weight == BigDecimal::from(2_000_000_000_000u64));
    assert!(params.duration_factor == BoostParams::default().duration_factor);
    assert!(params.precision_factor == BoostParams::default().precision_factor);
    assert!(params.boost_factor(ONE_YEAR) == BigDecimal::from(2));

    let apy = VaultApy::fetch(&chain, &vault, &masterchef(), ONE_YEAR).await;
    assert!(apy.get_boost_factor(ONE_YEAR) == BigDecimal::from(2));
    assert!(apy.flexible_apy() == Some(BigDecimal::from(BLOCKS_PER_YEAR / 2)));
}

#[tokio::test]
async fn transport_failure_uses_default_boost() {
    let chain = chain();
    chain.set_transport_down(true);

    let params = BoostParams::fetch(&chain, &cake_vault()).await;
    assert!(params == BoostParams::default());
    let apy = VaultApy::fetch(&chain, &cake_vault(), &masterchef(), ONE_YEAR).await;
    assert!(apy.flexible_apy() == None);
}
