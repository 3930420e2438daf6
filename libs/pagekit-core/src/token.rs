use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::CursorError;

/// Paired encode/decode strategy for opaque cursor tokens, supplied per
/// call site rather than fixed globally, so endpoints that sort on
/// composite keys can carry composite cursors.
///
/// Round-trip contract: for any row previously returned by the store,
/// `decode(encode(row))` must yield a key identifying that same row.
pub trait CursorCodec {
    type Row;
    type Key;

    fn encode(&self, row: &Self::Row) -> String;

    fn decode(&self, token: &str) -> Result<Self::Key, CursorError>;
}

pub mod base64_url {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    pub fn encode(bytes: &[u8]) -> String {
        URL_SAFE_NO_PAD.encode(bytes)
    }

    pub fn decode(s: &str) -> Option<Vec<u8>> {
        URL_SAFE_NO_PAD.decode(s).ok()
    }
}

const TOKEN_VERSION: u8 = 1;

/// Versioned token envelope. The version gates format evolution: a decoder
/// rejects envelopes it does not understand instead of misreading them.
#[derive(Serialize, Deserialize)]
struct TokenV1<K> {
    v: u8,
    k: K,
}

/// Ready-made codec for sources keyed by a single extractable field.
/// Tokens are URL-safe unpadded base64 of a versioned JSON envelope.
pub struct KeyCodec<R, K> {
    extract: fn(&R) -> K,
}

impl<R, K> KeyCodec<R, K> {
    pub fn new(extract: fn(&R) -> K) -> Self {
        Self { extract }
    }
}

impl<R, K> CursorCodec for KeyCodec<R, K>
where
    K: Serialize + DeserializeOwned,
{
    type Row = R;
    type Key = K;

    fn encode(&self, row: &R) -> String {
        let envelope = TokenV1 {
            v: TOKEN_VERSION,
            k: (self.extract)(row),
        };
        // Serializing a plain data key into JSON cannot fail.
        let bytes = serde_json::to_vec(&envelope).unwrap_or_default();
        base64_url::encode(&bytes)
    }

    fn decode(&self, token: &str) -> Result<K, CursorError> {
        let bytes = base64_url::decode(token).ok_or(CursorError::InvalidBase64)?;
        let envelope: TokenV1<K> =
            serde_json::from_slice(&bytes).map_err(|_| CursorError::InvalidJson)?;
        if envelope.v != TOKEN_VERSION {
            return Err(CursorError::InvalidVersion);
        }
        Ok(envelope.k)
    }
}
