use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

#[derive(Accounts)]
pub struct CreateProfile<'info> {
    #[account(
        init,
        payer = user,
        space = Profile::SPACE,
        seeds = [PROFILE_SEED, user.key().as_ref()],
        bump
    )]
    pub profile: Account<'info, Profile>,

    #[account(mut)]
    pub user: Signer<'info>,
    pub system_program: Program<'info, System>,
}

// One profile per wallet: a second attempt derives the same PDA and the
// init fails with "already in use". There is no separate uniqueness check.
pub fn create_profile(ctx: Context<CreateProfile>, handle: String, name: String) -> Result<()> {
    let user = ctx.accounts.user.key();
    ctx.accounts.profile.create(user, handle, name)?;

    msg!("profile created for {}", user);
    Ok(())
}
