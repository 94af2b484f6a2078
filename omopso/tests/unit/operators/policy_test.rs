use super::*;
use crate::utils::DefaultRandom;

#[test]
fn can_assign_static_roles_by_index() {
    let policy = MutationPolicy::Static;

    (0..5).for_each(|iteration| {
        assert_eq!(
            policy.roles(6, iteration),
            vec![
                MutationRole::NonUniform,
                MutationRole::Uniform,
                MutationRole::None,
                MutationRole::NonUniform,
                MutationRole::Uniform,
                MutationRole::None
            ]
        );
    });
}

#[test]
fn can_rotate_roles_of_particle_over_iterations() {
    let policy = MutationPolicy::default();

    let roles = (0..4).map(|iteration| policy.role(0, iteration)).collect::<Vec<_>>();

    assert_eq!(
        roles,
        vec![MutationRole::NonUniform, MutationRole::Uniform, MutationRole::None, MutationRole::NonUniform]
    );
}

parameterized_test! {can_split_swarm_into_equal_groups, (policy, swarm_size, iteration), {
    let roles = policy.roles(swarm_size, iteration);
    let count = |role: MutationRole| roles.iter().filter(|&&r| r == role).count();

    let counts = [count(MutationRole::NonUniform), count(MutationRole::Uniform), count(MutationRole::None)];

    assert_eq!(counts.iter().sum::<usize>(), swarm_size);
    assert!(counts.iter().max().unwrap() - counts.iter().min().unwrap() <= 1);
}}

can_split_swarm_into_equal_groups! {
    case01_static_even: (MutationPolicy::Static, 9, 0),
    case02_static_uneven: (MutationPolicy::Static, 10, 3),
    case03_rotating_even: (MutationPolicy::Rotating, 9, 1),
    case04_rotating_uneven: (MutationPolicy::Rotating, 10, 2),
    case05_rotating_small: (MutationPolicy::Rotating, 2, 5),
}

parameterized_test! {can_calculate_current_iteration, (evaluations, swarm_size, expected), {
    let random = DefaultRandom::new_repeatable(0);
    let context = MutationContext { random: &random, evaluations, swarm_size };

    assert_eq!(context.current_iteration(), expected);
}}

can_calculate_current_iteration! {
    case01_initial: (100, 100, 1),
    case02_rounded_down: (250, 100, 2),
    case03_empty_swarm: (7, 0, 7),
    case04_zero: (0, 10, 0),
}
