#[cfg(test)]
#[path = "../../tests/unit/pso/omopso_test.rs"]
mod omopso_test;

use super::*;
use crate::archive::EpsilonBoxArchive;
use crate::models::Problem;
use crate::operators::{MutationContext, MutationRole};
use crate::telemetry::Telemetry;
use crate::termination::Termination;
use crate::utils::{Environment, GenericResult, Parallelism, parallel_try_foreach_mut};
use std::sync::Arc;

/// An implementation of OMOPSO: a multi-objective particle swarm optimizer which guides particles
/// by leaders from an epsilon-dominance archive and applies uniform and non-uniform mutation to
/// different parts of the swarm.
///
/// The optimizer is a step function: each call of [`Omopso::step`] performs one iteration, the
/// caller decides when to stop (see [`Omopso::solve`] for a driver based on [`Termination`]).
pub struct Omopso {
    problem: Arc<dyn Problem>,
    config: OmopsoConfig,
    environment: Arc<Environment>,
    particles: Vec<Particle>,
    archive: EpsilonBoxArchive,
    state: OptimizerState,
    iteration: usize,
    evaluations: usize,
    telemetry: Telemetry,
    time: Timer,
}

impl Omopso {
    /// Creates a new instance of `Omopso`: places particles randomly within variable bounds with
    /// zero velocity, evaluates them and seeds personal bests and the leader archive.
    pub fn new(problem: Arc<dyn Problem>, config: OmopsoConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        config.validate(problem.as_ref())?;

        let time = Timer::start();
        let template = problem.new_solution();
        if template.variables.len() != problem.variables() {
            return Err(format!(
                "problem '{}' declares {} variables, but its solution has {}",
                problem.name(),
                problem.variables(),
                template.variables.len()
            )
            .into());
        }

        let random = environment.random.as_ref();
        let mut particles: Vec<_> = (0..config.swarm_size)
            .map(|_| {
                let mut position = template.clone();
                position.variables.iter_mut().for_each(|variable| {
                    variable.set_value(random.uniform_real(variable.lower_bound(), variable.upper_bound()))
                });

                Particle::new(position)
            })
            .collect();

        evaluate_particles(problem.as_ref(), environment.parallelism, particles.as_mut_slice())?;

        let mut archive = EpsilonBoxArchive::new(config.epsilons.clone(), config.leader_archive_size);
        particles.iter_mut().for_each(|particle| {
            particle.personal_best = particle.position.clone();
            archive.offer(particle.position.clone());
        });

        let omopso = Self {
            evaluations: particles.len(),
            telemetry: Telemetry::new(config.telemetry_mode.clone()),
            problem,
            config,
            environment,
            particles,
            archive,
            state: OptimizerState::Initialized,
            iteration: 0,
            time,
        };

        omopso.telemetry.on_initial(&omopso.statistics(), omopso.particles.len(), omopso.time.clone());

        Ok(omopso)
    }

    /// Performs one iteration: selects leaders, moves and mutates particles, evaluates them,
    /// updates personal bests and offers new positions to the leader archive.
    ///
    /// Moved particles are evaluated on a copy of the swarm. When evaluation fails, the error is
    /// propagated and the swarm, the archive and the counters are left as they were.
    pub fn step(&mut self) -> GenericResult<()> {
        if self.state == OptimizerState::Terminated {
            return Err("cannot perform iteration: optimizer is terminated".into());
        }

        let iteration_time = Timer::start();
        let random = self.environment.random.clone();
        let swarm_size = self.particles.len();

        // all leaders come from the same archive snapshot
        let leaders = self.archive.select(swarm_size, random.as_ref());
        let roles = self.config.mutation_policy.roles(swarm_size, self.iteration);
        let context = MutationContext { random: random.as_ref(), evaluations: self.evaluations, swarm_size };

        let mut particles = self.particles.clone();
        particles.iter_mut().zip(roles).enumerate().for_each(|(idx, (particle, role))| {
            let factors = self.config.coefficients.sample(random.as_ref());
            let leader = leaders.get(idx).unwrap_or(&particle.personal_best).clone();

            particle.update_velocity(&leader, &factors);
            particle.update_position();

            match role {
                MutationRole::NonUniform => {
                    particle.position = self.config.non_uniform_mutation.mutate(&context, &particle.position)
                }
                MutationRole::Uniform => {
                    particle.position = self.config.uniform_mutation.mutate(&context, &particle.position)
                }
                MutationRole::None => {}
            }
        });

        evaluate_particles(self.problem.as_ref(), self.environment.parallelism, particles.as_mut_slice())?;
        self.particles = particles;
        self.evaluations += swarm_size;

        self.particles.iter_mut().for_each(|particle| particle.update_personal_best());
        self.particles.iter().for_each(|particle| {
            self.archive.offer(particle.position.clone());
        });

        self.iteration += 1;
        self.state = OptimizerState::Iterating;

        self.telemetry.on_iteration(&self.statistics(), iteration_time);

        Ok(())
    }

    /// Runs iterations until termination criteria is met, then terminates the optimizer.
    pub fn solve(&mut self, termination: &dyn Termination) -> GenericResult<OptimizationResult> {
        if self.state == OptimizerState::Terminated {
            return Err("cannot solve: optimizer is terminated".into());
        }

        while !termination.is_termination(&self.statistics()) {
            self.step()?;
        }

        self.terminate();

        Ok(self.result())
    }

    /// Moves the optimizer into terminated state.
    pub fn terminate(&mut self) {
        if self.state != OptimizerState::Terminated {
            self.state = OptimizerState::Terminated;
            self.telemetry.on_result(&self.statistics());
        }
    }

    /// Returns current result: a snapshot of the leader archive.
    pub fn result(&self) -> OptimizationResult {
        OptimizationResult { front: self.archive.solutions(), iterations: self.iteration, evaluations: self.evaluations }
    }

    /// Returns current statistics.
    pub fn statistics(&self) -> OptimizerStatistics {
        OptimizerStatistics {
            iteration: self.iteration,
            evaluations: self.evaluations,
            archive_size: self.archive.size(),
            improvements: self.archive.improvements(),
            time: self.time.clone(),
        }
    }

    /// Returns current state.
    pub fn state(&self) -> OptimizerState {
        self.state
    }

    /// Returns amount of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns total amount of objective evaluations.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Returns the leader archive.
    pub fn archive(&self) -> &EpsilonBoxArchive {
        &self.archive
    }

    /// Returns particles of the swarm.
    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    /// Returns the configuration used.
    pub fn config(&self) -> &OmopsoConfig {
        &self.config
    }
}

fn evaluate_particles(problem: &dyn Problem, parallelism: Parallelism, particles: &mut [Particle]) -> GenericResult<()> {
    let evaluate = |particle: &mut Particle| evaluate_solution(problem, &mut particle.position);

    match parallelism {
        Parallelism::Sequential => particles.iter_mut().try_for_each(evaluate),
        Parallelism::Parallel => parallel_try_foreach_mut(particles, evaluate),
    }
}

fn evaluate_solution(problem: &dyn Problem, solution: &mut Solution) -> GenericResult<()> {
    problem.evaluate(solution)?;

    if solution.objectives.len() != problem.objectives() {
        return Err(format!(
            "problem '{}' assigned {} objectives, expected {}",
            problem.name(),
            solution.objectives.len(),
            problem.objectives()
        )
        .into());
    }

    if solution.objectives.iter().any(|value| value.is_nan()) {
        return Err(format!("problem '{}' assigned NaN objective value", problem.name()).into());
    }

    Ok(())
}
