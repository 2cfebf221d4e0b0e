//! Supported networks and chain-id resolution.
//!
//! The options protocol deploys to two L2 networks. Chain identifiers
//! arriving from the host (wallet provider, RPC) are resolved once up
//! front; an unknown id is a configuration error and is never retried.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Networks the options protocol is deployed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Arbitrum,
    Optimism,
}

impl Network {
    /// Resolve a numeric chain id to a deployment network.
    ///
    /// Mainnet and testnet ids map to the same network: 42161 and
    /// 421613 resolve to Arbitrum, 10 and 420 to Optimism. Anything
    /// else fails with [`Error::UnsupportedChain`].
    pub fn from_chain_id(chain_id: u64) -> Result<Self, Error> {
        match chain_id {
            42_161 | 421_613 => Ok(Self::Arbitrum),
            10 | 420 => Ok(Self::Optimism),
            other => Err(Error::UnsupportedChain(other)),
        }
    }

    /// Canonical mainnet chain id of this network.
    pub fn chain_id(self) -> u64 {
        match self {
            Self::Arbitrum => 42_161,
            Self::Optimism => 10,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arbitrum => write!(f, "arbitrum"),
            Self::Optimism => write!(f, "optimism"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_chain_ids_resolve() {
        assert_eq!(Network::from_chain_id(42_161).unwrap(), Network::Arbitrum);
        assert_eq!(Network::from_chain_id(10).unwrap(), Network::Optimism);
    }

    #[test]
    fn test_testnet_chain_ids_resolve() {
        assert_eq!(Network::from_chain_id(421_613).unwrap(), Network::Arbitrum);
        assert_eq!(Network::from_chain_id(420).unwrap(), Network::Optimism);
    }

    #[test]
    fn test_unknown_chain_id_fails() {
        let err = Network::from_chain_id(1).unwrap_err();
        assert!(matches!(err, Error::UnsupportedChain(1)));
    }

    #[test]
    fn test_chain_id_round_trip() {
        for network in [Network::Arbitrum, Network::Optimism] {
            assert_eq!(
                Network::from_chain_id(network.chain_id()).unwrap(),
                network
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Network::Arbitrum), "arbitrum");
        assert_eq!(format!("{}", Network::Optimism), "optimism");
    }
}
