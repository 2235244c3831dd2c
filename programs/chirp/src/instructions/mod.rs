pub mod profile;
pub use profile::*;

pub mod tweet;
pub use tweet::*;

pub mod follow;
pub use follow::*;
