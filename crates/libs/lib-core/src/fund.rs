//! # Fund Contract Call
//!
//! Turns the "Fund on Hydra" form into a `create_pop_to_hydra_xcm` call and
//! submits it through the [`ChainGateway`].
//!
//! Checks, in order, all before any network call:
//! 1. the chain API is ready
//! 2. a wallet is connected (a signer exists)
//! 3. an account is selected
//! 4. the contract address is not empty
//! 5. the amount is a whole number greater than zero
//!
//! A failure from the gateway is logged and returned as is: no retry, no
//! distinction between transient and permanent failures.

use serde::{Deserialize, Serialize};
use shared::{Account, ContractCall, ContractMessage, FundArgs, TxOutcome};
use tracing::{error, info};

use crate::error::{AppError, Result};
use crate::gateway::ChainGateway;

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FundForm {
    pub contract_address: String,
    pub amount: String,
}

impl FundForm {
    /// Cheap check used to enable the submit button.
    pub fn looks_submittable(&self) -> bool {
        !self.contract_address.trim().is_empty()
            && lib_utils::validate_positive_amount(&self.amount, "Amount").is_ok()
    }
}

/// Weight limits forwarded to the contract's XCM execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundSettings {
    pub ref_time: u64,
    pub proof_size: u64,
}

impl Default for FundSettings {
    fn default() -> Self {
        Self {
            ref_time: 10_000_000_000,
            proof_size: 1_000_000,
        }
    }
}

/// Validate the form and build the call payload for `origin`.
pub fn prepare_fund(
    form: &FundForm,
    origin: Option<&Account>,
    settings: &FundSettings,
) -> Result<ContractCall> {
    let origin = origin.ok_or_else(|| AppError::Precondition("Please select an account".to_string()))?;

    let contract = form.contract_address.trim();
    if contract.is_empty() {
        return Err(AppError::Precondition("Please enter a contract address".to_string()));
    }

    let amount = lib_utils::validate_positive_amount(&form.amount, "Amount")
        .map_err(|_| AppError::Precondition("Please enter a valid amount".to_string()))?;

    Ok(ContractCall {
        contract: contract.to_string(),
        origin: origin.address.clone(),
        message: ContractMessage::CreatePopToHydraXcm(FundArgs {
            amount,
            ref_time: settings.ref_time,
            proof_size: settings.proof_size,
        }),
    })
}

/// Validate, build and sign-and-submit the fund call.
pub async fn submit_fund<G: ChainGateway>(
    gateway: &G,
    signer: Option<&G::Signer>,
    origin: Option<&Account>,
    form: &FundForm,
    settings: &FundSettings,
) -> Result<TxOutcome> {
    if !gateway.is_ready() {
        return Err(AppError::Precondition("Chain API is not initialized yet".to_string()));
    }
    let signer = signer.ok_or_else(|| AppError::Precondition("Please connect a wallet".to_string()))?;
    let call = prepare_fund(form, origin, settings)?;

    info!(
        "Calling {} on {} from {} ({})",
        call.message.name(),
        call.contract,
        call.origin,
        form.amount.trim()
    );

    match gateway.sign_and_submit(&call, signer).await {
        Ok(outcome) => {
            info!("Contract funded in tx {}", outcome.tx_hash);
            Ok(outcome)
        }
        Err(e) => {
            error!("Error funding contract {}: {}", call.contract, e);
            Err(e)
        }
    }
}
