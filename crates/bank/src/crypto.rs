//! EncryptionProvider - Stub capability behind the decrypt permission
//!
//! No real cryptography is specified for this core. The trait exists so a
//! real provider can be injected; the stub passes data through unchanged.

/// Encryption capability consumed by the facade.
pub trait EncryptionProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    fn encrypt(&self, data: &[u8]) -> Vec<u8>;

    fn decrypt(&self, data: &[u8]) -> Vec<u8>;
}

/// Identity transform stand-in for a real cipher.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughCipher;

impl EncryptionProvider for PassthroughCipher {
    fn name(&self) -> &str {
        "PassthroughCipher"
    }

    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        data.to_vec()
    }

    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        data.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_roundtrip() {
        let cipher = PassthroughCipher;
        let data = b"account statement";
        assert_eq!(cipher.decrypt(&cipher.encrypt(data)), data.to_vec());
    }
}
