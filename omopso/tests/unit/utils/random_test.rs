use super::*;

#[test]
fn can_produce_repeatable_sequence() {
    let first = DefaultRandom::new_repeatable(7);
    let second = DefaultRandom::new_repeatable(7);

    let sample = |random: &DefaultRandom| {
        (0..10).map(|_| (random.uniform_int(0, 100), random.uniform_real(0., 1.).to_bits())).collect::<Vec<_>>()
    };

    assert_eq!(sample(&first), sample(&second));
}

#[test]
fn can_produce_uniform_int_on_closed_interval() {
    let random = DefaultRandom::new_repeatable(0);

    let values = (0..1000).map(|_| random.uniform_int(1, 3)).collect::<Vec<_>>();

    assert!(values.iter().all(|value| (1..=3).contains(value)));
    assert!(values.contains(&1));
    assert!(values.contains(&3));
}

parameterized_test! {can_produce_uniform_real_in_range, (min, max), {
    let random = DefaultRandom::new_repeatable(0);

    (0..1000).for_each(|_| {
        let value = random.uniform_real(min, max);
        assert!(value >= min && value < max);
    });
}}

can_produce_uniform_real_in_range! {
    case01_unit: (0., 1.),
    case02_negative: (-10., -5.),
    case03_mixed: (-1., 1.),
}

#[test]
fn can_return_min_when_range_is_degenerate() {
    let random = DefaultRandom::new_repeatable(0);

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}

#[test]
fn can_flip_both_sides_of_coin() {
    let random = DefaultRandom::new_repeatable(0);

    let heads = (0..1000).filter(|_| random.is_head_not_tails()).count();

    assert!(heads > 400 && heads < 600);
}
