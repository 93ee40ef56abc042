use core::fmt;

use vault_helpers::math::MathError;

/// Failure of the transport underneath a [`Connection`](crate::Connection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    Rpc(String),
    /// The node executed the call but the contract reverted.
    Reverted(String),
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A numeric field of a serialized payload did not parse as a decimal.
    InvalidNumber(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingError {
    /// A transaction triggered by the same control has not settled yet.
    AlreadyPending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    Connection(ConnectionError),
    /// Contract output could not be SCALE-decoded into the named type.
    Decode(&'static str),
    ArithmeticError(MathError),
    Transform(TransformError),
    Pending(PendingError),
    /// A write was requested but no account is connected.
    MissingAccount,
    InvalidAddress(String),
    Config(String),
    /// The transaction was mined but its status reports a failure.
    TransactionFailed,
}

macro_rules! impl_froms {
    ( $( $variant:ident($error:ident) ),* ) => {
        $(
            impl From<$error> for ClientError {
                fn from(error: $error) -> Self {
                    ClientError::$variant(error)
                }
            }
        )*
    };
}

impl_froms!(
    Connection(ConnectionError),
    ArithmeticError(MathError),
    Transform(TransformError),
    Pending(PendingError)
);

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::Rpc(msg) => write!(f, "rpc error: {msg}"),
            ConnectionError::Reverted(reason) => write!(f, "call reverted: {reason}"),
            ConnectionError::Timeout => write!(f, "request timed out"),
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::InvalidNumber(field) => write!(f, "field `{field}` is not a valid number"),
        }
    }
}

impl fmt::Display for PendingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingError::AlreadyPending => write!(f, "a transaction is already pending"),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Connection(e) => write!(f, "{e}"),
            ClientError::Decode(what) => write!(f, "failed to decode `{what}` from contract output"),
            ClientError::ArithmeticError(e) => write!(f, "arithmetic error: {e:?}"),
            ClientError::Transform(e) => write!(f, "{e}"),
            ClientError::Pending(e) => write!(f, "{e}"),
            ClientError::MissingAccount => write!(f, "no account connected"),
            ClientError::InvalidAddress(addr) => write!(f, "invalid address `{addr}`"),
            ClientError::Config(msg) => write!(f, "invalid configuration: {msg}"),
            ClientError::TransactionFailed => write!(f, "transaction failed"),
        }
    }
}

impl std::error::Error for ConnectionError {}

impl std::error::Error for TransformError {}

impl std::error::Error for PendingError {}

impl std::error::Error for ClientError {}
