pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((expected - predicted)²)
    ///
    /// Both slices must have the same, non-zero length.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        debug_assert_eq!(predicted.len(), expected.len());
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (y - p).powi(2))
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::MseLoss;

    #[test]
    fn zero_iff_every_output_matches() {
        let expected = [0.0, 1.0, 1.0, 0.0];
        assert_eq!(MseLoss::loss(&expected, &expected), 0.0);
        assert!(MseLoss::loss(&[0.0, 1.0, 1.0, 1.0], &expected) > 0.0);
    }

    #[test]
    fn counts_each_wrong_boolean_output_as_a_quarter() {
        let expected = [0.0, 1.0, 1.0, 0.0];
        assert_eq!(MseLoss::loss(&[1.0, 1.0, 1.0, 0.0], &expected), 0.25);
        assert_eq!(MseLoss::loss(&[1.0, 0.0, 1.0, 0.0], &expected), 0.5);
        assert_eq!(MseLoss::loss(&[1.0, 0.0, 0.0, 1.0], &expected), 1.0);
    }

    #[test]
    fn never_negative() {
        let expected = [0.0, 1.0, 0.0, 1.0];
        for bits in 0..16u32 {
            let predicted: Vec<f64> = (0..4).map(|i| ((bits >> i) & 1) as f64).collect();
            assert!(MseLoss::loss(&predicted, &expected) >= 0.0);
        }
    }
}
