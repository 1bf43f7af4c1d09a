//! Contract wrappers for every contract deployed on a domain.

use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn contract_messenger() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        messenger::contract::execute,
        messenger::contract::instantiate,
        messenger::contract::query,
    ))
}

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            bridge::contract::execute,
            bridge::contract::instantiate,
            bridge::contract::query,
        )
        .with_reply(bridge::contract::reply),
    )
}

pub fn contract_hooked_bridge() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            hooked_bridge::contract::execute,
            hooked_bridge::contract::instantiate,
            hooked_bridge::contract::query,
        )
        .with_reply(hooked_bridge::contract::reply),
    )
}

pub fn contract_token() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        crosschain_token::contract::execute,
        crosschain_token::contract::instantiate,
        crosschain_token::contract::query,
    ))
}

pub fn contract_pool_manager() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        pool_manager::contract::execute,
        pool_manager::contract::instantiate,
        pool_manager::contract::query,
    ))
}

pub fn contract_router() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            swap_router::contract::execute,
            swap_router::contract::instantiate,
            swap_router::contract::query,
        )
        .with_reply(swap_router::contract::reply),
    )
}

pub fn contract_recipient() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        crate::recipient::execute,
        crate::recipient::instantiate,
        crate::recipient::query,
    ))
}
