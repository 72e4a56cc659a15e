use crate::Float;

/// A compensated sum.
///
/// Adding with [Neumaier's variant of Kahan
/// summation](https://en.wikipedia.org/wiki/Kahan_summation_algorithm) keeps
/// the error independent of the number of terms, so that sums of adjective
/// deltas and color channels do not depend on word order.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Accumulator {
    sum: Float,
    carry: Float,
}

impl Accumulator {
    #[inline]
    pub fn total(&self) -> Float {
        self.sum + self.carry
    }
}

impl std::ops::AddAssign<Float> for Accumulator {
    fn add_assign(&mut self, term: Float) {
        let next = self.sum + term;
        let (big, small) = if self.sum.abs() < term.abs() {
            (term, self.sum)
        } else {
            (self.sum, term)
        };
        self.carry += (big - next) + small;
        self.sum = next;
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The channel-wise mean of `N`-element samples.
///
/// Colors are mixed by averaging their coordinates and alpha, which makes for
/// four channels.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Mean<const N: usize> {
    channels: [Accumulator; N],
    count: usize,
}

impl<const N: usize> Default for Mean<N> {
    fn default() -> Self {
        Self {
            channels: [Accumulator::default(); N],
            count: 0,
        }
    }
}

impl<const N: usize> Mean<N> {
    /// Add another sample.
    pub fn push(&mut self, sample: [Float; N]) {
        for (channel, value) in self.channels.iter_mut().zip(sample) {
            *channel += value;
        }
        self.count += 1;
    }

    /// Get the mean, which is undefined without samples.
    pub fn get(&self) -> Option<[Float; N]> {
        if self.count == 0 {
            return None;
        }

        let count = self.count as Float;
        Some(self.channels.map(|channel| channel.total() / count))
    }
}

#[cfg(test)]
mod test {
    use super::{Accumulator, Mean};
    use crate::Float;

    #[test]
    fn test_accumulator() {
        let (small, huge): (Float, Float) = (1.0, 1e20);
        assert_eq!(small + huge + small - huge, 0.0);

        let mut sum = Accumulator::default();
        for term in [small, huge, small, -huge] {
            sum += term;
        }
        assert_eq!(sum.total(), 2.0);
    }

    #[test]
    fn test_mean() {
        let mut mean = Mean::<2>::default();
        assert_eq!(mean.get(), None);

        mean.push([0.25, -1.0]);
        mean.push([0.75, 0.0]);
        mean.push([0.5, 4.0]);
        assert_eq!(mean.get(), Some([0.5, 1.0]));
    }
}
