// Wed Jan 28 2026 - Alex

use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomError {
    #[error("Invalid range: {start} >= {end}")]
    EmptyIntRange { start: i64, end: i64 },
    #[error("Invalid range: {start} >= {end}")]
    EmptyUintRange { start: u64, end: u64 },
    #[error("Invalid range: {start} >= {end}")]
    EmptyFloatRange { start: f64, end: f64 },
    #[error("Probability {0} outside [0, 1]")]
    InvalidProbability(f64),
}

/// Convenience wrappers around the thread-local RNG. Bounded variants treat
/// the range as half-open [start, end) and reject empty ranges instead of
/// panicking the way `gen_range` would.
pub struct RandomUtils;

impl RandomUtils {
    pub fn next_i32() -> i32 {
        thread_rng().gen()
    }

    pub fn next_i64() -> i64 {
        thread_rng().gen()
    }

    pub fn next_u64() -> u64 {
        thread_rng().gen()
    }

    pub fn next_i32_range(start: i32, end: i32) -> Result<i32, RandomError> {
        if start >= end {
            return Err(RandomError::EmptyIntRange { start: start as i64, end: end as i64 });
        }
        Ok(thread_rng().gen_range(start..end))
    }

    pub fn next_i64_range(start: i64, end: i64) -> Result<i64, RandomError> {
        if start >= end {
            return Err(RandomError::EmptyIntRange { start, end });
        }
        Ok(thread_rng().gen_range(start..end))
    }

    pub fn next_u64_range(start: u64, end: u64) -> Result<u64, RandomError> {
        if start >= end {
            return Err(RandomError::EmptyUintRange { start, end });
        }
        Ok(thread_rng().gen_range(start..end))
    }

    pub fn next_f64() -> f64 {
        thread_rng().gen()
    }

    pub fn next_f64_range(start: f64, end: f64) -> Result<f64, RandomError> {
        if !(start < end) {
            return Err(RandomError::EmptyFloatRange { start, end });
        }
        Ok(thread_rng().gen_range(start..end))
    }

    pub fn next_bool() -> bool {
        thread_rng().gen()
    }

    pub fn next_bool_with(probability: f64) -> Result<bool, RandomError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(RandomError::InvalidProbability(probability));
        }
        Ok(thread_rng().gen_bool(probability))
    }

    pub fn bytes(len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        thread_rng().fill(out.as_mut_slice());
        out
    }

    pub fn pick<T>(slice: &[T]) -> Option<&T> {
        slice.choose(&mut thread_rng())
    }

    pub fn shuffle_in_place<T>(slice: &mut [T]) {
        slice.shuffle(&mut thread_rng());
    }

    pub fn alphanumeric(len: usize) -> String {
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    pub fn ascii_printable(len: usize) -> String {
        let mut rng = thread_rng();
        (0..len).map(|_| rng.gen_range(0x20u8..=0x7e) as char).collect()
    }

    pub fn numeric_string(len: usize) -> String {
        let mut rng = thread_rng();
        (0..len).map(|_| rng.gen_range(b'0'..=b'9') as char).collect()
    }
}
