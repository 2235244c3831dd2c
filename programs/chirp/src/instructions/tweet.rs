use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ChirpError;
use crate::events::TweetLiked;
use crate::state::*;

#[derive(Accounts)]
pub struct SendTweet<'info> {
    // addressed by the pre-increment tweet_count, so indices are dense
    // from 0 in submission order; the single seed byte wraps at 256
    #[account(
        init,
        payer = author,
        space = Tweet::SPACE,
        seeds = [TWEET_SEED, author.key().as_ref(), &[profile.next_tweet_index()]],
        bump
    )]
    pub tweet: Account<'info, Tweet>,

    #[account(
        mut,
        seeds = [PROFILE_SEED, author.key().as_ref()],
        bump,
        has_one = author @ ChirpError::Unauthorized
    )]
    pub profile: Account<'info, Profile>,

    #[account(mut)]
    pub author: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn send_tweet(ctx: Context<SendTweet>, content: String) -> Result<()> {
    let author = ctx.accounts.author.key();
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.tweet.post(author, now, content)?;

    let profile = &mut ctx.accounts.profile;
    let index = profile.tweet_count;
    profile.tweet_count = profile.tweet_count.checked_add(1).unwrap();

    msg!("tweet {} posted by {}", index, author);
    Ok(())
}

#[derive(Accounts)]
pub struct LikeTweet<'info> {
    #[account(mut)]
    pub tweet: Account<'info, Tweet>,
    pub user: Signer<'info>,
}

pub fn like_tweet(ctx: Context<LikeTweet>) -> Result<()> {
    let tweet = &mut ctx.accounts.tweet;
    tweet.add_like();

    emit!(TweetLiked {
        tweet: tweet.key(),
        user: ctx.accounts.user.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
