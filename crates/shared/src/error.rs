/// Errors raised while loading or checking recipe data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}
