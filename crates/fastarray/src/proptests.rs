//! Property-based tests for arrays and fused evaluation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::array::FastArray;
    use crate::parallel::ParallelConfig;

    // Strategy for generating finite values
    fn value() -> impl Strategy<Value = f64> {
        -1.0e6_f64..1.0e6_f64
    }

    // Strategy for generating values safe to divide by
    fn non_zero() -> impl Strategy<Value = f64> {
        prop_oneof![(-1.0e6_f64..-1.0e-3_f64), (1.0e-3_f64..1.0e6_f64)]
    }

    fn len() -> impl Strategy<Value = usize> {
        0usize..256
    }

    proptest! {
        #[test]
        fn capacity_bounds_size(sizes in proptest::collection::vec(0usize..512, 1..32)) {
            let mut a = FastArray::<f64>::new();
            let mut last_capacity = a.capacity();
            for size in sizes {
                a.resize(size);
                prop_assert_eq!(a.size(), size);
                prop_assert!(a.capacity() >= a.size());
                prop_assert!(a.capacity() >= last_capacity);
                last_capacity = a.capacity();
            }
        }

        #[test]
        fn elementwise_matches_scalar(n in len(), a in value(), b in non_zero()) {
            let fa = FastArray::filled(n, a);
            let fb = FastArray::filled(n, b);
            let mut out = FastArray::<f64>::with_size(n);

            out.assign(&fa + &fb);
            prop_assert!(out.iter().all(|&v| v.to_bits() == (a + b).to_bits()));
            out.assign(&fa - &fb);
            prop_assert!(out.iter().all(|&v| v.to_bits() == (a - b).to_bits()));
            out.assign(&fa * &fb);
            prop_assert!(out.iter().all(|&v| v.to_bits() == (a * b).to_bits()));
            out.assign(&fa / &fb);
            prop_assert!(out.iter().all(|&v| v.to_bits() == (a / b).to_bits()));
        }

        #[test]
        fn fused_matches_scalar(
            n in len(),
            a in value(),
            b in value(),
            c in value(),
            d in value(),
            e in value()
        ) {
            let fa = FastArray::filled(n, a);
            let fb = FastArray::filled(n, b);
            let fc = FastArray::filled(n, c);
            let fd = FastArray::filled(n, d);
            let mut out = FastArray::<f64>::with_size(n);

            out.assign(&fa + &fb * &fc / (&fd + e));
            let expected = a + b * c / (d + e);
            prop_assert!(out.iter().all(|&v| v.to_bits() == expected.to_bits()));
        }

        #[test]
        fn broadcast_sets_logical_range(n in 1usize..256, shrink in 0usize..256, v in value()) {
            let mut a = FastArray::filled(n, -7.0_f64);
            let keep = shrink.min(n);
            a.resize(keep);
            a.fill(v);
            prop_assert!(a.iter().all(|&x| x == v));
            a.resize(n);
            prop_assert!(a.as_slice()[keep..].iter().all(|&x| x == -7.0));
        }

        #[test]
        fn copy_is_independent(values in proptest::collection::vec(value(), 1..128), v in value()) {
            let mut a: FastArray = values.iter().copied().collect();
            let b = a.clone();
            a.fill(v);
            prop_assert_eq!(b.as_slice(), values.as_slice());
        }

        #[test]
        fn resize_within_capacity_preserves_prefix(
            values in proptest::collection::vec(value(), 1..128),
            shrink in 0usize..128
        ) {
            let mut a: FastArray = values.iter().copied().collect();
            a.resize(shrink.min(values.len()));
            a.resize(values.len());
            prop_assert_eq!(a.as_slice(), values.as_slice());
        }

        #[test]
        fn parallel_matches_sequential(
            values in proptest::collection::vec(value(), 0..512),
            b in non_zero()
        ) {
            let a: FastArray = values.iter().copied().collect();
            let n = a.size();
            let config = ParallelConfig { parallel_threshold: 0, min_chunk_len: 8 };

            let mut seq = FastArray::<f64>::with_size(n);
            let mut par = FastArray::<f64>::with_size(n);
            seq.assign(-&a / b + &a * &a);
            par.par_assign(-&a / b + &a * &a, &config);
            prop_assert_eq!(seq, par);
        }
    }
}
