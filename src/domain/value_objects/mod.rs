mod replay_id;

pub use replay_id::ReplayId;
