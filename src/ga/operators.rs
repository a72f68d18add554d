//! Bit-string genetic operators.
//!
//! These operate on `&[bool]` chromosomes and never alias their inputs:
//! crossover builds a fresh vector, mutation only touches the offspring it
//! is handed.
//!
//! # Operators
//!
//! - [`random_bits`]: uniform initialization
//! - [`single_point_crossover`] / [`random_crossover`]: one-point recombination
//! - [`bit_flip_mutation`]: independent per-bit flips
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use rand::Rng;

/// Draws `len` bits independently and uniformly from {0, 1}.
pub fn random_bits<R: Rng>(len: usize, rng: &mut R) -> Vec<bool> {
    (0..len).map(|_| rng.random_bool(0.5)).collect()
}

/// Single-point crossover at a fixed cut point.
///
/// The child takes `parent1[..point]` followed by `parent2[point..]`.
///
/// # Panics
/// Panics if the parents differ in length or `point > len`.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::ga::operators::single_point_crossover;
///
/// let child = single_point_crossover(&[true; 4], &[false; 4], 1);
/// assert_eq!(child, vec![true, false, false, false]);
/// ```
pub fn single_point_crossover(parent1: &[bool], parent2: &[bool], point: usize) -> Vec<bool> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(point <= parent1.len(), "cut point out of range");

    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..point]);
    child.extend_from_slice(&parent2[point..]);
    child
}

/// Single-point crossover with the cut drawn uniformly from `[1, len - 1]`.
///
/// Both parents contribute at least one bit. Chromosomes shorter than two
/// bits cannot be cut, so the child is a copy of `parent1`.
pub fn random_crossover<R: Rng>(parent1: &[bool], parent2: &[bool], rng: &mut R) -> Vec<bool> {
    let n = parent1.len();
    if n < 2 {
        return parent1.to_vec();
    }
    let point = rng.random_range(1..n);
    single_point_crossover(parent1, parent2, point)
}

/// Flips each bit independently with probability `rate`.
///
/// `rate` must lie in `[0, 1]`; [`GaConfig`](super::GaConfig) clamps it.
pub fn bit_flip_mutation<R: Rng>(bits: &mut [bool], rate: f64, rng: &mut R) {
    for bit in bits.iter_mut() {
        if rng.random_bool(rate) {
            *bit = !*bit;
        }
    }
}
