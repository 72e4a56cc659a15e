use crate::Float;

/// Compute the squared Euclidian distance between two Oklab coordinates.
///
/// The reverse matcher ranks candidates by this quantity. Since it only ever
/// compares distances, it can skip the square root.
#[allow(non_snake_case)]
#[inline]
pub(crate) fn distance_squared(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = coordinates1;
    let [L2, a2, b2] = coordinates2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb))
}

/// Compute Delta-E for Oklab.
#[inline]
pub(crate) fn delta_e_ok(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    distance_squared(coordinates1, coordinates2).sqrt()
}

/// Find the candidate coordinates closest to the origin.
///
/// This function compares the origin to every candidate, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate—or `None` if there are no candidates. Ties go to the
/// earlier candidate.
pub(crate) fn find_closest<'c, C, F>(
    origin: &[Float; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

#[cfg(test)]
mod test {
    use super::{delta_e_ok, distance_squared, find_closest};
    use crate::assert_close_enough;
    use crate::Float;

    #[test]
    fn test_distance() {
        let origin: [Float; 3] = [0.5, 0.0, 0.0];
        let other: [Float; 3] = [0.5, 0.3, -0.4];
        assert_close_enough!(distance_squared(&origin, &other), 0.25);
        assert_close_enough!(delta_e_ok(&origin, &other), 0.5);
        assert_eq!(distance_squared(&other, &other), 0.0);
    }

    #[test]
    fn test_find_closest() {
        let candidates: [[Float; 3]; 4] = [
            [0.0, 0.0, 0.0],
            [0.6, 0.1, 0.0],
            [0.6, 0.0, 0.1],
            [1.0, 0.0, 0.0],
        ];

        assert_eq!(
            find_closest(&[0.6, 0.05, 0.05], candidates.iter(), delta_e_ok),
            Some(1)
        );
        assert_eq!(
            find_closest(&[0.9, 0.0, 0.0], candidates.iter(), delta_e_ok),
            Some(3)
        );
        assert_eq!(
            find_closest(&[0.9, 0.0, 0.0], [].iter(), delta_e_ok),
            None
        );
    }
}
