use anchor_lang::prelude::*;

// PDA seed tags. These must match what any off-chain reader uses to
// locate accounts; see utils.rs for the reader-side derivations.
#[constant]
pub const PROFILE_SEED: &[u8] = b"profile";

#[constant]
pub const TWEET_SEED: &[u8] = b"tweet";

// Field length limits, in bytes. u64 rather than usize so the IDL can
// carry them for client-side validation.
#[constant]
pub const MAX_HANDLE_LEN: u64 = 15;

#[constant]
pub const MAX_NAME_LEN: u64 = 50;

#[constant]
pub const MAX_CONTENT_LEN: u64 = 280;

// Anchor account discriminator.
pub const DISCRIMINATOR_LEN: usize = 8;
