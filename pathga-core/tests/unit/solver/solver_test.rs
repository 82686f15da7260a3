use super::*;
use crate::costs::EuclideanTravelCost;
use crate::helpers::costs::{CountingTravelCost, FailingTravelCost, create_abcd_problem};
use crate::helpers::models::create_test_locations;
use crate::models::{Coordinate, Fitness};
use crate::utils::{CancellationQuota, DefaultRandom, Quota};

fn create_counting_abcd_builder(seed: u64) -> (Builder, Arc<CountingTravelCost>) {
    let (locations, service) = create_abcd_problem();
    let counter = Arc::new(CountingTravelCost::new(service));
    let builder = Builder::new(locations, counter.clone(), Arc::new(Environment::new_with_seed(seed)))
        .with_max_generations(Some(100))
        .with_population_size(50)
        .with_telemetry(TelemetryMode::OnlyMetrics { track_best: 10 });

    (builder, counter)
}

fn get_permutations(tail: Vec<usize>) -> Vec<Vec<usize>> {
    if tail.len() <= 1 {
        return vec![tail];
    }

    (0..tail.len())
        .flat_map(|idx| {
            let mut rest = tail.clone();
            let head = rest.remove(idx);
            get_permutations(rest).into_iter().map(move |mut permutation| {
                permutation.insert(0, head);
                permutation
            })
        })
        .collect()
}

fn get_brute_force_minimum(locations: &[Location], service: &dyn TravelCostService) -> Fitness {
    get_permutations((1..locations.len()).collect())
        .into_iter()
        .map(|tail| {
            let indices = std::iter::once(0).chain(tail).collect::<Vec<_>>();
            indices.windows(2).map(|leg| service.cost(&locations[leg[0]], &locations[leg[1]]).unwrap()).sum::<f64>()
        })
        .min_by(|a, b| a.total_cmp(b))
        .unwrap()
}

#[test]
fn can_find_shortest_path_on_small_asymmetric_problem() {
    let (locations, service) = create_abcd_problem();
    let expected = get_brute_force_minimum(&locations, service.as_ref());

    let paths = optimize(locations, 100, 50, service, Arc::new(Environment::new_with_seed(1))).unwrap();

    assert_eq!(paths.len(), 50);
    assert_eq!(paths[0].path[0], 0);
    assert_eq!(paths[0].fitness, expected);
    assert!(paths.iter().all(|ranked| ranked.path.is_valid()));
}

#[test]
fn can_enumerate_all_paths_for_minimum() {
    assert_eq!(get_permutations(vec![1, 2, 3]).len(), 6);

    let (locations, service) = create_abcd_problem();
    assert_eq!(get_brute_force_minimum(&locations, service.as_ref()), 3.);
}

#[test]
fn can_solve_two_locations_without_evolution() {
    let (locations, service) = create_abcd_problem();
    let counter = Arc::new(CountingTravelCost::new(service));

    let solution = Builder::new(locations[..2].to_vec(), counter.clone(), Arc::new(Environment::new_with_seed(0)))
        .build()
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(solution.paths.len(), 1);
    assert_eq!(solution.paths[0].path.indices(), &[0, 1]);
    assert_eq!(solution.paths[0].fitness, 1.);
    assert_eq!(solution.metrics.generations, 0);
    assert_eq!(counter.calls(), 1);
}

#[test]
fn can_request_each_pair_at_most_once() {
    let (builder, counter) = create_counting_abcd_builder(0);

    let solution = builder.build().unwrap().solve().unwrap();

    // four locations have twelve ordered pairs, but legs to the origin are never used
    assert!(counter.calls() <= 9);
    assert_eq!(solution.metrics.oracle.service_calls, counter.calls());
    assert!(solution.metrics.oracle.cache_hits > 0);
    assert_eq!(solution.metrics.evolution.len(), 10);
}

#[test]
fn can_reuse_shared_cache_between_runs() {
    let cache = Arc::new(CostCache::default());
    let run = |seed| {
        let (builder, counter) = create_counting_abcd_builder(seed);
        builder.with_cost_cache(cache.clone()).build().unwrap().solve().unwrap();
        counter.calls()
    };

    let first = run(0);
    let second = run(0);

    assert!(first > 0);
    assert_eq!(second, 0);
    assert_eq!(cache.size(), first);
}

#[test]
fn can_reuse_reversed_pairs_with_symmetric_costs() {
    let locations = create_test_locations(6);
    let service = Arc::new(CountingTravelCost::new(Arc::new(EuclideanTravelCost::default())));

    Builder::new(locations, service.clone(), Arc::new(Environment::new_with_seed(0)))
        .with_max_generations(Some(50))
        .with_population_size(30)
        .with_symmetric_costs(true)
        .build()
        .unwrap()
        .solve()
        .unwrap();

    // 6 * 5 / 2 unordered pairs
    assert!(service.calls() <= 15);
}

#[test]
fn can_reproduce_solution_with_same_seed() {
    let run = |seed| {
        let (builder, _) = create_counting_abcd_builder(seed);
        builder.build().unwrap().solve().unwrap().paths.into_iter().map(|ranked| ranked.path).collect::<Vec<_>>()
    };

    assert_eq!(run(11), run(11));
}

#[test]
fn can_return_unavailable_oracle_error_with_generation() {
    let locations = vec![
        Location::new("a", Coordinate::new(0., 0.)),
        Location::new("b", Coordinate::new(1., 0.)),
        Location::new("c", Coordinate::new(2., 0.)),
    ];

    let result = optimize(locations, 10, 10, Arc::new(FailingTravelCost {}), Arc::new(Environment::new_with_seed(0)));

    match result {
        Err(OptimizationError::OracleUnavailable { origin, reason, generation, .. }) => {
            assert_eq!(origin, "a");
            assert_eq!(reason, "service is not reachable");
            assert_eq!(generation, Some(0));
        }
        other => unreachable!("unexpected result: {:?}", other.map(|_| ())),
    }
}

#[test]
fn can_stop_requesting_service_after_outage() {
    let run = |parallelism| {
        let counter = Arc::new(CountingTravelCost::new(Arc::new(FailingTravelCost {})));
        let environment = Arc::new(Environment::new(
            Arc::new(DefaultRandom::new_with_seed(0)),
            None,
            parallelism,
            Arc::new(|_| {}),
        ));

        let result = optimize(create_test_locations(3), 10, 100, counter.clone(), environment);

        assert!(matches!(result, Err(OptimizationError::OracleUnavailable { generation: Some(0), .. })));
        counter.calls()
    };

    assert_eq!(run(1), 1);
    // only two distinct first legs exist: loc0→loc1 and loc0→loc2
    assert!(run(4) <= 2);
}

#[test]
fn can_stop_on_cancelled_quota() {
    let quota = CancellationQuota::default();
    quota.cancel();
    let quota: Arc<dyn Quota + Send + Sync> = Arc::new(quota);
    let environment =
        Arc::new(Environment::new(Arc::new(DefaultRandom::new_with_seed(0)), Some(quota), 1, Arc::new(|_| {})));

    let result = optimize(create_test_locations(5), 10, 10, Arc::new(EuclideanTravelCost::default()), environment);

    assert_eq!(result.err(), Some(OptimizationError::Interrupted { generation: 0 }));
}

#[test]
fn can_reject_duplicate_location_ids() {
    let mut locations = create_test_locations(4);
    locations.push(locations[1].clone());

    let result = Builder::new(locations, Arc::new(EuclideanTravelCost::default()), Arc::new(Environment::default()))
        .build();

    assert!(matches!(result, Err(OptimizationError::InvalidConfiguration(_))));
}
