use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::UserFollowed;
use crate::state::*;

#[derive(Accounts)]
pub struct FollowUser<'info> {
    // derived from the signer's key, so only the signer's own profile
    // can sit here
    #[account(
        mut,
        seeds = [PROFILE_SEED, user.key().as_ref()],
        bump
    )]
    pub user_profile: Account<'info, Profile>,

    #[account(
        mut,
        seeds = [PROFILE_SEED, target.key().as_ref()],
        bump
    )]
    pub target_profile: Account<'info, Profile>,

    #[account(mut)]
    pub user: Signer<'info>,
    pub target: SystemAccount<'info>,
}

// No relation account records who follows whom; repeat follows and
// self-follows keep incrementing both counters.
pub fn follow_user(ctx: Context<FollowUser>) -> Result<()> {
    let user_profile = &mut ctx.accounts.user_profile;
    let target_profile = &mut ctx.accounts.target_profile;

    user_profile.following = user_profile.following.checked_add(1).unwrap();
    target_profile.followers = target_profile.followers.checked_add(1).unwrap();

    emit!(UserFollowed {
        follower: user_profile.author,
        following: target_profile.author,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
