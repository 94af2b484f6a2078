//! The archive module contains the leader archive of the swarm.

mod epsilon_box;
pub use self::epsilon_box::EpsilonBoxArchive;
