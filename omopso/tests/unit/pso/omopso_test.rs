use super::*;
use crate::algorithms::dominance::DominanceComparator;
use crate::helpers::operators::CountingMutation;
use crate::helpers::problems::{Fault, FaultyProblem, TwoSpheresProblem};
use crate::helpers::utils::create_test_environment;
use crate::operators::MutationPolicy;
use crate::problems::Zdt1;
use crate::termination::{MaxEvaluations, MaxIterations};

fn create_config(problem: &dyn Problem, swarm_size: usize) -> OmopsoConfig {
    OmopsoConfigBuilder::default()
        .with_swarm_size(swarm_size)
        .with_epsilons(vec![0.01, 0.01])
        .build(problem)
        .expect("cannot build config")
}

fn create_optimizer(problem: Arc<dyn Problem>, swarm_size: usize) -> Omopso {
    let config = create_config(problem.as_ref(), swarm_size);
    Omopso::new(problem, config, create_test_environment()).expect("cannot create optimizer")
}

fn run_with_seed(seed: u64, parallelism: Parallelism) -> OptimizationResult {
    let problem = Arc::new(Zdt1::new(10));
    let config = create_config(problem.as_ref(), 20);
    let environment = Arc::new(Environment { parallelism, logger: Arc::new(|_| {}), ..Environment::new_repeatable(seed) });

    let mut optimizer = Omopso::new(problem, config, environment).expect("cannot create optimizer");

    optimizer.solve(&MaxIterations::new(20)).expect("cannot solve")
}

#[test]
fn can_initialize_swarm() {
    let problem = Arc::new(TwoSpheresProblem::new(3));

    let optimizer = create_optimizer(problem.clone(), 10);

    assert_eq!(optimizer.state(), OptimizerState::Initialized);
    assert_eq!(optimizer.iteration(), 0);
    assert_eq!(optimizer.evaluations(), 10);
    assert_eq!(problem.evaluations(), 10);
    assert!(!optimizer.archive().is_empty());
    assert_eq!(optimizer.particles().len(), 10);
    optimizer.particles().iter().for_each(|particle| {
        assert_eq!(particle.velocity, vec![0.; 3]);
        assert_eq!(particle.personal_best, particle.position);
        assert!(particle.position.is_evaluated());
        assert!(particle.position.values().all(|value| (-1. ..=1.).contains(&value)));
    });
}

#[test]
fn can_perform_step() {
    let problem = Arc::new(TwoSpheresProblem::new(3));
    let mut optimizer = create_optimizer(problem.clone(), 10);

    optimizer.step().expect("cannot perform step");

    assert_eq!(optimizer.state(), OptimizerState::Iterating);
    assert_eq!(optimizer.iteration(), 1);
    assert_eq!(optimizer.evaluations(), 20);
    assert_eq!(problem.evaluations(), 20);
    assert_eq!(optimizer.statistics().archive_size, optimizer.archive().size());
}

#[test]
fn can_solve_two_objective_problem() {
    let problem = Arc::new(TwoSpheresProblem::new(2));
    let mut optimizer = create_optimizer(problem.clone(), 30);

    let result = optimizer.solve(&MaxIterations::new(100)).expect("cannot solve");

    assert_eq!(result.iterations, 100);
    assert_eq!(result.evaluations, 30 * 101);
    assert_eq!(problem.evaluations(), 30 * 101);
    assert_eq!(optimizer.state(), OptimizerState::Terminated);
    assert!(!result.front.is_empty());
    assert!(result.front.len() <= 100);

    let dominance = optimizer.archive().dominance();
    result.front.iter().for_each(|a| {
        assert!(a.values().all(|value| (-1. ..=1.).contains(&value)));
        result.front.iter().for_each(|b| assert!(!dominance.dominates(a, b)));
    });
}

#[test]
fn can_stop_by_evaluations_budget() {
    let problem = Arc::new(TwoSpheresProblem::new(2));
    let mut optimizer = create_optimizer(problem, 30);

    let result = optimizer.solve(&MaxEvaluations::new(100)).expect("cannot solve");

    assert_eq!(result.iterations, 3);
    assert_eq!(result.evaluations, 120);
}

parameterized_test! {can_rotate_mutation_roles_of_particle, (policy, expected_calls), {
    let problem = Arc::new(TwoSpheresProblem::new(2));
    let non_uniform = CountingMutation::new_shared();
    let uniform = CountingMutation::new_shared();
    let config = OmopsoConfigBuilder::default()
        .with_swarm_size(1)
        .with_mutation_policy(policy)
        .with_non_uniform_mutation(non_uniform.clone())
        .with_uniform_mutation(uniform.clone())
        .build(problem.as_ref())
        .expect("cannot build config");
    let mut optimizer = Omopso::new(problem, config, create_test_environment()).expect("cannot create optimizer");

    let calls = (0..3)
        .map(|_| {
            optimizer.step().expect("cannot perform step");
            (non_uniform.calls(), uniform.calls())
        })
        .collect::<Vec<_>>();

    assert_eq!(calls, expected_calls);
}}

can_rotate_mutation_roles_of_particle! {
    case01_rotating: (MutationPolicy::Rotating, vec![(1, 0), (1, 1), (1, 1)]),
    case02_static: (MutationPolicy::Static, vec![(1, 0), (2, 0), (3, 0)]),
}

#[test]
fn can_reject_step_when_terminated() {
    let mut optimizer = create_optimizer(Arc::new(TwoSpheresProblem::new(2)), 5);
    optimizer.solve(&MaxIterations::new(2)).expect("cannot solve");

    assert_eq!(optimizer.state(), OptimizerState::Terminated);
    assert!(optimizer.step().is_err());
    assert!(optimizer.solve(&MaxIterations::new(5)).is_err());
    assert_eq!(optimizer.iteration(), 2);
}

#[test]
fn can_produce_same_result_for_same_seed() {
    let first = run_with_seed(17, Parallelism::Sequential);
    let second = run_with_seed(17, Parallelism::Sequential);

    assert_eq!(first.front, second.front);
    assert_eq!(first.evaluations, second.evaluations);
}

#[test]
fn can_produce_same_result_in_parallel() {
    let sequential = run_with_seed(23, Parallelism::Sequential);
    let parallel = run_with_seed(23, Parallelism::Parallel);

    assert_eq!(sequential.front, parallel.front);
}

parameterized_test! {can_reject_faulty_evaluation_on_creation, (fault, expected), {
    let problem = Arc::new(FaultyProblem::new(fault));
    let config = create_config(problem.as_ref(), 4);

    let result = Omopso::new(problem, config, create_test_environment());

    let error = result.err().expect("no error returned").to_string();
    assert!(error.contains(expected), "'{error}' has no '{expected}'");
}}

can_reject_faulty_evaluation_on_creation! {
    case01_error: (Fault::ErrorAfter(0), "evaluation failed"),
    case02_wrong_objectives: (Fault::WrongObjectives, "assigned 1 objectives, expected 2"),
    case03_nan: (Fault::NanObjectives, "NaN"),
}

#[test]
fn can_propagate_evaluation_error_from_step() {
    let problem = Arc::new(FaultyProblem::new(Fault::ErrorAfter(4)));
    let config = create_config(problem.as_ref(), 4);
    let mut optimizer = Omopso::new(problem, config, create_test_environment()).expect("cannot create optimizer");

    let result = optimizer.solve(&MaxIterations::new(10));

    assert_eq!(result.err(), Some("evaluation failed".into()));
    assert_eq!(optimizer.iteration(), 0);
}

#[test]
fn can_keep_swarm_unchanged_when_step_fails_partway() {
    let problem = Arc::new(FaultyProblem::new(Fault::ErrorAfter(6)));
    let config = create_config(problem.as_ref(), 4);
    let mut optimizer = Omopso::new(problem, config, create_test_environment()).expect("cannot create optimizer");
    let before = optimizer.particles().to_vec();
    let archive_before = optimizer.archive().solutions();

    let result = optimizer.step();

    assert_eq!(result.err(), Some("evaluation failed".into()));
    assert_eq!(optimizer.evaluations(), 4);
    assert_eq!(optimizer.iteration(), 0);
    assert_eq!(optimizer.state(), OptimizerState::Initialized);
    assert_eq!(optimizer.archive().solutions(), archive_before);
    optimizer.particles().iter().zip(before.iter()).for_each(|(particle, original)| {
        assert_eq!(particle.position, original.position);
        assert_eq!(particle.velocity, original.velocity);
        assert_eq!(particle.personal_best, original.personal_best);
        assert_eq!(particle.position.objectives, particle.position.values().collect::<Vec<_>>());
    });
}

#[test]
fn can_reject_invalid_config() {
    let problem = Arc::new(TwoSpheresProblem::new(2));
    let mut config = create_config(problem.as_ref(), 4);
    config.swarm_size = 0;

    assert!(Omopso::new(problem, config, create_test_environment()).is_err());
}
