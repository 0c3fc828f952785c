use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` random floats in `[0, scale)`,
/// wrapped with a total order so they can be used as keys
pub struct FloatGenerator {
    remaining: usize,
    scale: f64,
    rng: Pcg64,
}

impl FloatGenerator {
    pub fn new(num: usize, scale: f64, seed: u64) -> FloatGenerator {
        assert!(scale.is_finite() && scale > 0., "Invalid scale {}", scale);
        FloatGenerator {
            remaining: num,
            scale,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for FloatGenerator {
    type Item = OrderedFloat<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let r: f64 = self.rng.gen();
        Some(OrderedFloat(r * self.scale))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for FloatGenerator {}

impl ExactSizeIterator for FloatGenerator {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn in_range() {
        let values: Vec<OrderedFloat<f64>> = FloatGenerator::new(100, 17., 3).collect();
        assert_eq!(values.len(), 100);
        assert!(values
            .iter()
            .all(|v| v.into_inner() >= 0. && v.into_inner() < 17.));
    }

    #[test]
    #[should_panic]
    fn invalid_scale() {
        FloatGenerator::new(1, std::f64::NAN, 0);
    }
}
