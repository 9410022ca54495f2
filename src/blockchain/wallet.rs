//! Random key pair generation and address derivation.
//!
//! # Security
//! - Key material comes from the operating system CSPRNG
//! - Keys are never logged; `KeyPair`'s `Debug` redacts them
//! - The only place a private key leaves memory is the match log

use alloy::primitives::{Address, B256};
use alloy::signers::local::PrivateKeySigner;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::blockchain::types::{ScanError, ScanResult};

/// A freshly generated account: secret key plus its public address.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    private_key: B256,
    address: Address,
}

impl KeyPair {
    /// Build a key pair from raw key bytes, deriving the address.
    pub fn from_private_key(private_key: B256) -> ScanResult<Self> {
        let address = derive_address(&private_key)?;
        Ok(Self {
            private_key,
            address,
        })
    }

    /// The 32-byte secret key.
    pub fn private_key(&self) -> B256 {
        self.private_key
    }

    /// The secret key as `0x`-prefixed lowercase hex.
    pub fn private_key_hex(&self) -> String {
        alloy::hex::encode_prefixed(self.private_key)
    }

    /// The derived account address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The address with EIP-55 checksum casing.
    pub fn address_checksummed(&self) -> String {
        self.address.to_checksum(None)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"<redacted>")
            .field("address", &self.address)
            .finish()
    }
}

/// Derive the Ethereum address controlled by `private_key`.
///
/// Uncompressed secp256k1 public key, keccak-256, last 20 bytes.
pub fn derive_address(private_key: &B256) -> ScanResult<Address> {
    let signer = PrivateKeySigner::from_bytes(private_key)
        .map_err(|e| ScanError::Wallet(format!("Invalid private key: {}", e)))?;
    Ok(signer.address())
}

/// Generate a fresh random key pair from OS entropy.
pub fn generate() -> KeyPair {
    loop {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);

        // Zero or >= curve order is rejected; draw again.
        if let Ok(pair) = KeyPair::from_private_key(B256::from(bytes)) {
            return pair;
        }
    }
}

/// Source of key pairs for the scan loop.
pub trait KeySource {
    fn next_key(&mut self) -> KeyPair;
}

/// Production key source backed by [`generate`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomKeys;

impl KeySource for RandomKeys {
    fn next_key(&mut self) -> KeyPair {
        generate()
    }
}
