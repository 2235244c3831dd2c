use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ChirpError;

#[account]
pub struct Tweet {
    pub author: Pubkey,
    pub timestamp: i64,
    pub content: String,
    pub likes: u64,
    // reserved for a future comment instruction; nothing mutates it yet
    pub comments: u64,
}

impl Tweet {
    pub const SPACE: usize = DISCRIMINATOR_LEN
        + 32                              // author
        + 8                               // timestamp
        + 4 + MAX_CONTENT_LEN as usize    // content
        + 8                               // likes
        + 8;                              // comments

    pub fn post(&mut self, author: Pubkey, timestamp: i64, content: String) -> Result<()> {
        require!(content.len() as u64 <= MAX_CONTENT_LEN, ChirpError::ContentTooLong);

        self.author = author;
        self.timestamp = timestamp;
        self.content = content;
        self.likes = 0;
        self.comments = 0;

        Ok(())
    }

    // no per-user like ledger exists, so repeat likes from the same
    // wallet keep counting and there is no unlike
    pub fn add_like(&mut self) {
        self.likes = self.likes.checked_add(1).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> Tweet {
        Tweet {
            author: Pubkey::default(),
            timestamp: 0,
            content: String::new(),
            likes: 0,
            comments: 0,
        }
    }

    #[test]
    fn post_sets_fields_and_zeroes_counters() {
        let author = Pubkey::new_unique();
        let mut tweet = blank();
        tweet.post(author, 1_700_000_000, "gm".to_string()).unwrap();

        assert_eq!(tweet.author, author);
        assert_eq!(tweet.timestamp, 1_700_000_000);
        assert_eq!(tweet.content, "gm");
        assert_eq!(tweet.likes, 0);
        assert_eq!(tweet.comments, 0);
    }

    #[test]
    fn post_rejects_oversized_content() {
        let mut tweet = blank();
        let err = tweet
            .post(Pubkey::new_unique(), 0, "x".repeat(MAX_CONTENT_LEN as usize + 1))
            .unwrap_err();
        assert_eq!(err, ChirpError::ContentTooLong.into());
        assert_eq!(tweet.content, "");
    }

    #[test]
    fn post_accepts_max_length_content() {
        let mut tweet = blank();
        tweet
            .post(Pubkey::new_unique(), 0, "x".repeat(MAX_CONTENT_LEN as usize))
            .unwrap();
        assert_eq!(tweet.content.len() as u64, MAX_CONTENT_LEN);
    }

    #[test]
    fn likes_accumulate_without_dedup() {
        let mut tweet = blank();
        for _ in 0..5 {
            tweet.add_like();
        }
        assert_eq!(tweet.likes, 5);
        assert_eq!(tweet.comments, 0);
    }

    #[test]
    fn space_matches_serialized_layout() {
        // 8 discriminator + 32 + 8 + (4 + 280) + 8 + 8
        assert_eq!(Tweet::SPACE, 348);
    }
}
