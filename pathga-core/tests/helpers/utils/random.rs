use crate::prelude::*;
use crate::utils::RandomGen;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A random which returns predefined values in order.
pub struct FakeRandom {
    ints: Mutex<VecDeque<i32>>,
    reals: Mutex<VecDeque<f64>>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<f64>) -> Self {
        Self { ints: Mutex::new(ints.into()), reals: Mutex::new(reals.into()) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        let value = self.ints.lock().unwrap().pop_front().expect("no more ints");
        assert!(value >= min && value <= max, "{value} is not in [{min}, {max}]");

        value
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        assert!(min < max);
        self.reals.lock().unwrap().pop_front().expect("no more reals")
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen::seed_from_u64(0)
    }
}

/// A random which always returns min or max of the requested range.
pub struct EchoRandom {
    use_min: bool,
}

impl EchoRandom {
    pub fn new(use_min: bool) -> Self {
        Self { use_min }
    }
}

impl Random for EchoRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if self.use_min { min } else { max }
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if self.use_min { min } else { max }
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen::seed_from_u64(0)
    }
}
