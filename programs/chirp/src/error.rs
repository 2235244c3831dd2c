use anchor_lang::prelude::*;

#[error_code]
pub enum ChirpError {
    #[msg("handle exceeds 15 bytes")]
    HandleTooLong,
    #[msg("display name exceeds 50 bytes")]
    NameTooLong,
    #[msg("tweet content exceeds 280 bytes")]
    ContentTooLong,
    #[msg("signer does not own this profile")]
    Unauthorized,
}
