use crate::error::FatalError;

pub type Result<T> = std::result::Result<T, FatalError>;
