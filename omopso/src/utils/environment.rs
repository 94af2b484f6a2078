use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how particles of the swarm are evaluated within one iteration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Parallelism {
    /// Particles are evaluated one by one in the calling thread.
    #[default]
    Sequential,
    /// Particles are evaluated on the rayon thread pool.
    Parallel,
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A random stream shared by all randomized decisions of a single run.
    pub random: Arc<dyn Random + Send + Sync>,

    /// Specifies how objective evaluations are scheduled.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { random, parallelism, logger }
    }

    /// Creates an instance of `Environment` with repeatable random stream and default settings.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), Parallelism::default(), Arc::new(|msg: &str| println!("{msg}")))
    }
}
