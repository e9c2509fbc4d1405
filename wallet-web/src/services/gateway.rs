//! Chain access through the page's PAPI glue
//!
//! The page script builds a PAPI client and the ink! SDK and publishes them as
//! `window.dappGateway`. Amounts cross the boundary as decimal strings so
//! nothing is lost to `Number`.

use std::collections::HashMap;

use async_trait::async_trait;
use lib_core::{AppError, ChainGateway, NetworkInfo, Result};
use shared::{ContractCall, TxOutcome};
use wasm_bindgen::prelude::*;

use super::{js_error_message, JsSigner};

#[wasm_bindgen(inline_js = "
export function gatewayReady() {
    const gateway = window.dappGateway;
    if (!gateway) {
        return false;
    }
    return typeof gateway.isReady === 'function' ? !!gateway.isReady() : true;
}

export async function gatewayFreeBalances(endpoints, addresses) {
    const result = await window.dappGateway.freeBalances(endpoints, addresses);
    const balances = {};
    for (const [address, free] of Object.entries(result || {})) {
        balances[address] = free.toString();
    }
    return balances;
}

export async function gatewaySendContractCall(endpoints, callJson, signer) {
    const outcome = await window.dappGateway.sendContractCall(endpoints, JSON.parse(callJson), signer);
    return JSON.stringify({
        tx_hash: String(outcome.txHash ?? outcome.tx_hash),
        block_hash: outcome.blockHash ?? outcome.block_hash ?? null,
    });
}
")]
extern "C" {
    #[wasm_bindgen(js_name = gatewayReady)]
    fn gateway_ready() -> bool;

    /// Resolves to `{ address: "<free balance>" }`
    #[wasm_bindgen(catch, js_name = gatewayFreeBalances)]
    async fn gateway_free_balances(endpoints: JsValue, addresses: JsValue) -> std::result::Result<JsValue, JsValue>;

    /// Resolves to a JSON encoded [`TxOutcome`] once the extrinsic is included
    #[wasm_bindgen(catch, js_name = gatewaySendContractCall)]
    async fn gateway_send_contract_call(
        endpoints: JsValue,
        call_json: &str,
        signer: &JsValue,
    ) -> std::result::Result<JsValue, JsValue>;
}

/// [`ChainGateway`] for one network.
#[derive(Clone, Debug)]
pub struct PapiGateway {
    endpoints: Vec<String>,
}

impl PapiGateway {
    pub fn new(network: &NetworkInfo) -> Self {
        Self {
            endpoints: network.endpoints.clone(),
        }
    }

    fn endpoints_js(&self) -> Result<JsValue> {
        serde_wasm_bindgen::to_value(&self.endpoints).map_err(|e| AppError::Encoding(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ChainGateway for PapiGateway {
    type Signer = JsSigner;

    fn is_ready(&self) -> bool {
        gateway_ready()
    }

    async fn free_balances(&self, addresses: &[String]) -> Result<HashMap<String, u128>> {
        let addresses = serde_wasm_bindgen::to_value(addresses).map_err(|e| AppError::Encoding(e.to_string()))?;

        let raw = gateway_free_balances(self.endpoints_js()?, addresses)
            .await
            .map_err(|e| AppError::Gateway(js_error_message(&e)))?;
        let raw: HashMap<String, String> =
            serde_wasm_bindgen::from_value(raw).map_err(|e| AppError::Decoding(e.to_string()))?;

        raw.into_iter()
            .map(|(address, free)| -> Result<(String, u128)> {
                let free = free
                    .parse::<u128>()
                    .map_err(|e| AppError::Decoding(format!("balance of {}: {}", address, e)))?;
                Ok((address, free))
            })
            .collect()
    }

    async fn sign_and_submit(&self, call: &ContractCall, signer: &JsSigner) -> Result<TxOutcome> {
        let call_json = serde_json::to_string(call)?;

        let raw = gateway_send_contract_call(self.endpoints_js()?, &call_json, signer.as_js())
            .await
            .map_err(|e| AppError::Gateway(js_error_message(&e)))?;
        let raw = raw
            .as_string()
            .ok_or_else(|| AppError::Decoding("transaction outcome is not a string".to_string()))?;

        Ok(serde_json::from_str(&raw)?)
    }
}
