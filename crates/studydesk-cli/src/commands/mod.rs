pub mod init;
pub mod leaderboard;
pub mod play;
pub mod review;
pub mod sets;
pub mod tables;
