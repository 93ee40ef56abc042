use log::warn;
use scale::Decode;
use vault_trait::{
    Call,
    ClientError,
    Connection,
    ConnectionError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulticallOptions {
    /// When set, a single reverted call fails the whole batch.
    pub require_success: bool,
}

impl Default for MulticallOptions {
    fn default() -> Self {
        Self {
            require_success: true,
        }
    }
}

/// Issues `calls` as one round trip.
///
/// With `require_success = false` a reverted call leaves `None` at its index and the rest of the
/// batch is still returned.
pub async fn multicall_v2<C: Connection>(
    conn: &C,
    calls: Vec<Call>,
    options: MulticallOptions,
) -> Result<Vec<Option<Vec<u8>>>, ClientError> {
    let expected = calls.len();
    if expected == 0 {
        return Ok(Vec::new())
    }

    let results = conn.multicall(calls).await?;
    vault_helpers::ensure!(
        results.len() == expected,
        ClientError::Decode("multicall results")
    );

    if options.require_success {
        if let Some(failed) = results.iter().position(Option::is_none) {
            return Err(ConnectionError::Reverted(format!("multicall entry {failed}")).into())
        }
    }

    Ok(results)
}

/// Decodes one multicall entry. Reverted and undecodable entries both become `None`.
pub fn decode_entry<T: Decode>(entry: Option<&Vec<u8>>, what: &'static str) -> Option<T> {
    let bytes = entry?;
    match T::decode(&mut &bytes[..]) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("could not decode `{what}` from multicall entry");
            None
        }
    }
}

/// Takes the entry at `index` out of a `require_success = false` batch.
pub fn take_entry<T: Decode>(results: &[Option<Vec<u8>>], index: usize, what: &'static str) -> Option<T> {
    decode_entry(results.get(index).and_then(Option::as_ref), what)
}
