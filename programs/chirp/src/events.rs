use anchor_lang::prelude::*;

// Notification records for off-chain listeners. They carry no state of
// their own; the counters on Profile and Tweet remain authoritative.

#[event]
pub struct TweetLiked {
    pub tweet: Pubkey,
    pub user: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct UserFollowed {
    pub follower: Pubkey,
    pub following: Pubkey,
    pub timestamp: i64,
}
