//! Parallel expression evaluation.
//!
//! This module provides rayon-backed versions of the assignment family.
//! Every index of an expression is computed independently, so splitting
//! the destination into chunks gives bit-identical results to the
//! sequential loop.

use log::debug;
use rayon::prelude::*;

use fastarray_core::Element;

use crate::array::FastArray;
use crate::expr::{Expr, IntoExpr};

/// Configuration for parallel evaluation.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum destination size to enable parallelism.
    pub parallel_threshold: usize,
    /// Minimum number of consecutive indices handed to one task.
    pub min_chunk_len: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 1 << 14,
            min_chunk_len: 1 << 10,
        }
    }
}

impl<T: Element> FastArray<T> {
    /// Parallel [`assign`](Self::assign).
    pub fn par_assign<E>(&mut self, rhs: E, config: &ParallelConfig)
    where
        E: IntoExpr,
        E::Expr: Expr<Value = T> + Sync,
    {
        self.par_update(rhs, config, |slot, value| *slot = value);
    }

    /// Parallel `+=`.
    pub fn par_add_assign<E>(&mut self, rhs: E, config: &ParallelConfig)
    where
        E: IntoExpr,
        E::Expr: Expr<Value = T> + Sync,
    {
        self.par_update(rhs, config, |slot, value| *slot += value);
    }

    /// Parallel `-=`.
    pub fn par_sub_assign<E>(&mut self, rhs: E, config: &ParallelConfig)
    where
        E: IntoExpr,
        E::Expr: Expr<Value = T> + Sync,
    {
        self.par_update(rhs, config, |slot, value| *slot -= value);
    }

    /// Parallel `*=`.
    pub fn par_mul_assign<E>(&mut self, rhs: E, config: &ParallelConfig)
    where
        E: IntoExpr,
        E::Expr: Expr<Value = T> + Sync,
    {
        self.par_update(rhs, config, |slot, value| *slot *= value);
    }

    /// Parallel `/=`.
    pub fn par_div_assign<E>(&mut self, rhs: E, config: &ParallelConfig)
    where
        E: IntoExpr,
        E::Expr: Expr<Value = T> + Sync,
    {
        self.par_update(rhs, config, |slot, value| *slot /= value);
    }

    fn par_update<E, G>(&mut self, rhs: E, config: &ParallelConfig, combine: G)
    where
        E: IntoExpr,
        E::Expr: Expr<Value = T> + Sync,
        G: Fn(&mut T, T) + Send + Sync,
    {
        let rhs = rhs.into_expr();
        let slots = self.as_mut_slice();

        if slots.len() < config.parallel_threshold {
            // Fall back to sequential for small arrays
            debug!(
                "sequential evaluation: {} elements below threshold {}",
                slots.len(),
                config.parallel_threshold
            );
            for (index, slot) in slots.iter_mut().enumerate() {
                combine(slot, rhs.value_at(index));
            }
            return;
        }

        slots
            .par_iter_mut()
            .enumerate()
            .with_min_len(config.min_chunk_len.max(1))
            .for_each(|(index, slot)| combine(slot, rhs.value_at(index)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{exp, sqrt};

    fn eager_config() -> ParallelConfig {
        ParallelConfig {
            parallel_threshold: 1,
            min_chunk_len: 7,
        }
    }

    #[test]
    fn test_par_assign_matches_sequential() {
        let a: FastArray = (0..5000).map(f64::from).collect();
        let b = FastArray::filled(5000, 0.5_f64);

        let mut seq = FastArray::<f64>::with_size(5000);
        let mut par = FastArray::<f64>::with_size(5000);
        seq.assign(sqrt(&a) * &b + exp(-&b));
        par.par_assign(sqrt(&a) * &b + exp(-&b), &eager_config());

        assert_eq!(seq, par);
    }

    #[test]
    fn test_par_compound_assignment() {
        let a = FastArray::filled(3000, 3.0_f64);
        let b = FastArray::filled(3000, 4.0_f64);
        let config = eager_config();
        let mut c = FastArray::filled(3000, 11.0_f64);

        c.par_add_assign(&a + &b, &config);
        assert!(c.iter().all(|&v| v == 11.0 + 7.0));
        c.par_sub_assign(&a, &config);
        assert!(c.iter().all(|&v| v == 18.0 - 3.0));
        c.par_mul_assign(&b, &config);
        assert!(c.iter().all(|&v| v == 15.0 * 4.0));
        c.par_div_assign(2.0_f64, &config);
        assert!(c.iter().all(|&v| v == 60.0 / 2.0));
    }

    #[test]
    fn test_below_threshold_runs_sequentially() {
        let a = FastArray::filled(10, 2_i64);
        let mut c = FastArray::<i64>::with_size(10);
        c.par_assign(&a * &a, &ParallelConfig::default());
        assert!(c.iter().all(|&v| v == 4));
    }
}
