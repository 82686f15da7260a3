use super::*;
use crate::evolution::create_initial_population;
use crate::helpers::models::create_test_path;
use crate::helpers::utils::random::{EchoRandom, FakeRandom};
use crate::utils::DefaultRandom;

parameterized_test! {can_recombine_with_cuts, (parent_a, parent_b, start, finish, expected), {
    let offspring = recombine_with_cuts(&create_test_path(parent_a), &create_test_path(parent_b), start, finish);

    assert_eq!(offspring.indices(), expected);
}}

can_recombine_with_cuts! {
    case_01_middle: (&[0, 1, 2, 3, 4], &[0, 4, 3, 2, 1], 1, 3, &[0, 1, 2, 4, 3]),
    case_02_empty_segment: (&[0, 1, 2, 3, 4], &[0, 4, 3, 2, 1], 2, 2, &[0, 4, 3, 2, 1]),
    case_03_whole_path: (&[0, 1, 2, 3, 4], &[0, 4, 3, 2, 1], 0, 5, &[0, 1, 2, 3, 4]),
    case_04_tail: (&[0, 3, 1, 4, 2], &[0, 1, 2, 3, 4], 3, 5, &[0, 1, 3, 4, 2]),
    case_05_head: (&[0, 3, 1, 4, 2], &[0, 1, 2, 3, 4], 0, 2, &[0, 3, 1, 2, 4]),
}

#[test]
fn can_produce_valid_offspring_for_any_cut_points() {
    let random = DefaultRandom::new_with_seed(5);
    let parents = create_initial_population(7, 10, &random).unwrap();

    parents.iter().zip(parents.iter().rev()).for_each(|(parent_a, parent_b)| {
        (0..parent_a.len()).for_each(|start| {
            (start..=parent_a.len()).for_each(|finish| {
                let offspring = recombine_with_cuts(parent_a, parent_b, start, finish);

                assert!(offspring.is_valid(), "{offspring:?} from {parent_a:?} and {parent_b:?}");
                assert_eq!(&offspring[start..finish], &parent_a[start..finish]);
            });
        });
    });
}

#[test]
fn can_recombine_using_random_cut_points() {
    let random = FakeRandom::new(vec![1, 3], vec![]);

    let offspring = recombine(&create_test_path(&[0, 1, 2, 3, 4]), &create_test_path(&[0, 4, 3, 2, 1]), &random);

    assert_eq!(offspring.indices(), &[0, 1, 2, 4, 3]);
}

#[test]
fn can_copy_second_parent_with_empty_segment() {
    let (parent_a, parent_b) = (create_test_path(&[0, 1, 2, 3]), create_test_path(&[0, 3, 1, 2]));

    let offspring = recombine(&parent_a, &parent_b, &EchoRandom::new(true));

    assert_eq!(offspring, parent_b);
}

#[test]
fn can_copy_first_parent_tail_with_max_cut_points() {
    let (parent_a, parent_b) = (create_test_path(&[0, 1, 2, 3]), create_test_path(&[0, 3, 1, 2]));

    // start is the last position, finish is the path end
    let offspring = recombine(&parent_a, &parent_b, &EchoRandom::new(false));

    assert_eq!(offspring, create_test_path(&[0, 1, 2, 3]));
}

#[test]
#[should_panic(expected = "DegenerateOffspring")]
fn can_fail_loudly_on_degenerate_offspring() {
    let parent_a = create_test_path(&[0, 1, 2]);
    let parent_b = Path::new_unchecked(vec![0, 1, 1]);

    recombine_with_cuts(&parent_a, &parent_b, 0, 0);
}

parameterized_test! {can_create_offspring_of_requested_size, (survivors_size, population_size), {
    can_create_offspring_of_requested_size_impl(survivors_size, population_size);
}}

can_create_offspring_of_requested_size! {
    case_01_even: (4, 8),
    case_02_odd_survivors: (5, 10),
    case_03_odd_population: (3, 7),
    case_04_single_survivor: (1, 2),
    case_05_more_than_one_round: (2, 11),
}

fn can_create_offspring_of_requested_size_impl(survivors_size: usize, population_size: usize) {
    let random = DefaultRandom::new_with_seed(9);
    let survivors = create_initial_population(6, survivors_size, &random).unwrap();

    let offspring = create_offspring(&survivors, population_size, &random);

    assert_eq!(offspring.len(), population_size);
    assert!(offspring.iter().all(|path| path.is_valid()));
}

#[test]
fn can_pair_first_half_with_second_half() {
    // cut points cover the whole path, so each offspring is a copy of its first parent
    let survivors = vec![
        create_test_path(&[0, 1, 2, 3]),
        create_test_path(&[0, 1, 3, 2]),
        create_test_path(&[0, 3, 2, 1]),
        create_test_path(&[0, 2, 3, 1]),
    ];
    let random = FakeRandom::new((0..8).flat_map(|_| [0, 4]).collect(), vec![]);

    let offspring = create_offspring(&survivors, 8, &random);

    let expected = [0, 2, 0, 2, 1, 3, 1, 3].iter().map(|&idx| survivors[idx].clone()).collect::<Vec<_>>();
    assert_eq!(offspring, expected);
}

#[test]
fn can_return_empty_offspring_without_survivors() {
    assert!(create_offspring(&[], 10, &DefaultRandom::default()).is_empty());
}
