use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("currency code is empty")]
    CodeIsEmpty,

    #[error("currency code is too short")]
    CodeTooShort,

    #[error("currency code is too long")]
    CodeTooLong,

    #[error("currency code format")]
    CodeFormat,

    #[error("negative money amount")]
    NegativeAmount,

    #[error("currency rate can't be so close to zero")]
    RateIsCloseToZero,

    #[error("rate codes must be different")]
    RateCodesAreSame,

    #[error("no rate stored for {code_from}/{code_to}")]
    RateNotFound { code_from: String, code_to: String },

    #[error("database error: {0}")]
    Database(#[from] anyhow::Error),
}
