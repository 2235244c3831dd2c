use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ChirpError;

#[account]
pub struct Profile {
    pub author: Pubkey,
    pub handle: String,
    pub name: String,
    pub tweet_count: u64,
    pub followers: u64,
    pub following: u64,
}

impl Profile {
    pub const SPACE: usize = DISCRIMINATOR_LEN
        + 32                              // author
        + 4 + MAX_HANDLE_LEN as usize     // handle
        + 4 + MAX_NAME_LEN as usize       // name
        + 8                               // tweet_count
        + 8                               // followers
        + 8;                              // following

    pub fn create(&mut self, author: Pubkey, handle: String, name: String) -> Result<()> {
        require!(handle.len() as u64 <= MAX_HANDLE_LEN, ChirpError::HandleTooLong);
        require!(name.len() as u64 <= MAX_NAME_LEN, ChirpError::NameTooLong);

        self.author = author;
        self.handle = handle;
        self.name = name;
        self.tweet_count = 0;
        self.followers = 0;
        self.following = 0;

        Ok(())
    }

    // seed byte for the next tweet PDA; one byte caps an author at 256
    // tweet slots, after which the derivation wraps back to slot 0 and
    // init fails on the already-created account
    pub fn next_tweet_index(&self) -> u8 {
        self.tweet_count as u8
    }
}
