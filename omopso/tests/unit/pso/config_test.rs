use super::*;
use crate::helpers::operators::CountingMutation;
use crate::helpers::problems::TwoSpheresProblem;

#[test]
fn can_build_config_with_defaults() {
    let problem = TwoSpheresProblem::new(4);

    let config = OmopsoConfigBuilder::default().build(&problem).expect("cannot build config");

    assert_eq!(config.swarm_size, 100);
    assert_eq!(config.leader_archive_size, 100);
    assert_eq!(config.epsilons, vec![DEFAULT_EPSILON; 2]);
    assert_eq!(config.mutation_probability(), 0.25);
    assert_eq!(config.mutation_perturbation(), 0.5);
    assert_eq!(config.max_iterations(), 250);
    assert_eq!(config.mutation_policy, MutationPolicy::Rotating);
    assert_eq!(config.coefficients, SwarmCoefficients::default());
    assert!(matches!(config.telemetry_mode, TelemetryMode::None));
}

#[test]
fn can_override_defaults() {
    let problem = TwoSpheresProblem::new(4);
    let mutation = CountingMutation::new_shared();

    let config = OmopsoConfigBuilder::default()
        .with_swarm_size(10)
        .with_leader_archive_size(5)
        .with_epsilons(vec![0.1, 0.2])
        .with_mutation_probability(0.5)
        .with_mutation_perturbation(0.3)
        .with_max_iterations(20)
        .with_mutation_policy(MutationPolicy::Static)
        .with_uniform_mutation(mutation.clone())
        .build(&problem)
        .expect("cannot build config");

    assert_eq!(config.swarm_size, 10);
    assert_eq!(config.leader_archive_size, 5);
    assert_eq!(config.epsilons, vec![0.1, 0.2]);
    assert_eq!(config.mutation_probability(), 0.5);
    assert_eq!(config.mutation_perturbation(), 0.3);
    assert_eq!(config.max_iterations(), 20);
    assert_eq!(config.mutation_policy, MutationPolicy::Static);
    assert_eq!(Arc::strong_count(&mutation), 2);
}

parameterized_test! {can_reject_invalid_parameters, (builder, expected_errors), {
    let problem = TwoSpheresProblem::new(2);

    let result = builder.build(&problem);

    let error = result.err().expect("no error returned").to_string();
    expected_errors.iter().for_each(|expected: &&str| assert!(error.contains(expected), "'{error}' has no '{expected}'"));
}}

can_reject_invalid_parameters! {
    case01_empty_swarm: (OmopsoConfigBuilder::default().with_swarm_size(0), vec!["swarm size"]),
    case02_empty_archive: (OmopsoConfigBuilder::default().with_leader_archive_size(0), vec!["leader archive size"]),
    case03_wrong_epsilon_count: (OmopsoConfigBuilder::default().with_epsilons(vec![0.1]), vec!["expected 2 epsilons, got 1"]),
    case04_non_positive_epsilon: (OmopsoConfigBuilder::default().with_epsilons(vec![0.1, -0.1]), vec!["epsilon must be positive"]),
    case05_probability: (OmopsoConfigBuilder::default().with_mutation_probability(1.1), vec!["mutation probability"]),
    case06_perturbation: (OmopsoConfigBuilder::default().with_mutation_perturbation(0.), vec!["mutation perturbation"]),
    case07_max_iterations: (OmopsoConfigBuilder::default().with_max_iterations(0), vec!["max iterations"]),
    case08_coefficients: (
        OmopsoConfigBuilder::default().with_coefficients(SwarmCoefficients { inertia: (0.5, 0.1), ..SwarmCoefficients::default() }),
        vec!["invalid inertia range"]
    ),
    case09_many: (
        OmopsoConfigBuilder::default().with_swarm_size(0).with_epsilons(vec![]),
        vec!["swarm size must be positive; expected 2 epsilons, got 0"]
    ),
}

#[test]
fn can_validate_modified_config() {
    let problem = TwoSpheresProblem::new(2);
    let mut config = OmopsoConfigBuilder::default().build(&problem).expect("cannot build config");
    assert!(config.validate(&problem).is_ok());

    config.epsilons = vec![0.1, 0.1, 0.1];

    assert!(config.validate(&problem).is_err());
}
