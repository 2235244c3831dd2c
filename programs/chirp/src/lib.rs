pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("GZrLwKUrVWxFP9BpdLT3U3h53EshUnniWcvU6AcnnKVE");

#[program]
pub mod chirp {
    use super::*;

    pub fn create_profile(ctx: Context<CreateProfile>, handle: String, name: String) -> Result<()> {
        instructions::profile::create_profile(ctx, handle, name)
    }

    pub fn send_tweet(ctx: Context<SendTweet>, content: String) -> Result<()> {
        instructions::tweet::send_tweet(ctx, content)
    }

    pub fn like_tweet(ctx: Context<LikeTweet>) -> Result<()> {
        instructions::tweet::like_tweet(ctx)
    }

    pub fn follow_user(ctx: Context<FollowUser>) -> Result<()> {
        instructions::follow::follow_user(ctx)
    }
}
