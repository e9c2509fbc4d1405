//! Contract call payloads handed to the chain gateway.

use serde::{Deserialize, Serialize};

/// A typed ink! message invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "args", rename_all = "snake_case")]
pub enum ContractMessage {
    /// Reserve-transfer `amount` of the relay token from Pop to Hydration.
    CreatePopToHydraXcm(FundArgs),
}

impl ContractMessage {
    /// Selector label as it appears in the contract metadata.
    pub fn name(&self) -> &'static str {
        match self {
            ContractMessage::CreatePopToHydraXcm(_) => "create_pop_to_hydra_xcm",
        }
    }
}

/// Arguments of `create_pop_to_hydra_xcm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundArgs {
    #[serde(with = "u128_string")]
    pub amount: u128,
    /// Weight limit (ref time) for the remote execution
    pub ref_time: u64,
    /// Weight limit (proof size) for the remote execution
    pub proof_size: u64,
}

/// A sign-and-submit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
    /// Contract address
    pub contract: String,
    /// Signing account address
    pub origin: String,
    pub message: ContractMessage,
}

/// Result reported by the gateway once the extrinsic is included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutcome {
    pub tx_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
}

/// Serialize `u128` as a decimal string.
pub mod u128_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contract_call_wire_format() {
        let call = ContractCall {
            contract: "5Contract".to_string(),
            origin: "5Origin".to_string(),
            message: ContractMessage::CreatePopToHydraXcm(FundArgs {
                amount: 340_282_366_920_938_463_463_374_607_431_768_211_455,
                ref_time: 10_000_000_000,
                proof_size: 1_000_000,
            }),
        };

        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(
            value,
            json!({
                "contract": "5Contract",
                "origin": "5Origin",
                "message": {
                    "name": "create_pop_to_hydra_xcm",
                    "args": {
                        "amount": "340282366920938463463374607431768211455",
                        "ref_time": 10_000_000_000u64,
                        "proof_size": 1_000_000
                    }
                }
            })
        );
        assert_eq!(call.message.name(), "create_pop_to_hydra_xcm");
    }

    #[test]
    fn test_tx_outcome_without_block() {
        let outcome: TxOutcome = serde_json::from_str(r#"{"tx_hash":"0xabc"}"#).unwrap();
        assert_eq!(outcome.block_hash, None);
    }
}
