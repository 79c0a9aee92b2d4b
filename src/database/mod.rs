//! Central hub for all storage logic. Each submodule owns one concern and
//! is reached via its full path, e.g. `database::profile::add_xp`.

pub mod init;
pub mod leaderboard;
pub mod models;
pub mod notifications;
pub mod profile;
