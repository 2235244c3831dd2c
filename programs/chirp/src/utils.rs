use anchor_lang::prelude::*;

use crate::constants::*;

// Reader-side PDA derivations. These must stay byte-for-byte identical to
// the seeds in the instruction contexts; clients use them to locate
// accounts before submitting transactions.

pub fn find_profile_address(author: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROFILE_SEED, author.as_ref()], &crate::ID)
}

pub fn find_tweet_address(author: &Pubkey, index: u8) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TWEET_SEED, author.as_ref(), &[index]], &crate::ID)
}
