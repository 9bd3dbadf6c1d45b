/// Activation strategy applied by every non-input neuron.
///
/// The two methods form a pair with one contract between them:
/// `derivative()` receives the value most recently produced by `value()` —
/// the unit's *stored output*, never the raw weighted sum. The built-in
/// variants are written against that convention (tanh's derivative is the
/// `1 - y²` form, which is only correct for an already-activated value), and
/// any `Custom` pair must honor it too.
#[derive(Debug, Clone, Copy)]
pub enum TransferFunction {
    /// Hyperbolic tangent; output range [-1, 1].
    Tanh,
    /// Rectifier, `max(0, x)`; output range [0, ∞).
    Rectifier,
    /// User-supplied pair. `derivative` is handed the stored output of
    /// `value`, exactly like the built-ins.
    Custom {
        value: fn(f64) -> f64,
        derivative: fn(f64) -> f64,
    },
}

impl TransferFunction {
    /// Maps a raw weighted sum to the neuron's output value.
    pub fn value(&self, x: f64) -> f64 {
        match self {
            TransferFunction::Tanh => x.tanh(),
            TransferFunction::Rectifier => {
                if x > 0.0 {
                    x
                } else {
                    0.0
                }
            }
            TransferFunction::Custom { value, .. } => value(x),
        }
    }

    /// Slope at a point the function has already been evaluated at.
    ///
    /// `output` must be a value previously returned by [`value`], not a
    /// pre-activation sum. For tanh this makes the derivative `1 - y²`; for
    /// the rectifier the non-differentiable point at 0 resolves to 0.
    ///
    /// [`value`]: TransferFunction::value
    pub fn derivative(&self, output: f64) -> f64 {
        match self {
            TransferFunction::Tanh => 1.0 - output * output,
            TransferFunction::Rectifier => {
                if output > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            TransferFunction::Custom { derivative, .. } => derivative(output),
        }
    }
}

/// Built-in variants compare by kind. `Custom` never compares equal:
/// function pointers have no stable identity across codegen units, so
/// their addresses are not consulted.
impl PartialEq for TransferFunction {
    fn eq(&self, other: &TransferFunction) -> bool {
        matches!(
            (self, other),
            (TransferFunction::Tanh, TransferFunction::Tanh)
                | (TransferFunction::Rectifier, TransferFunction::Rectifier)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tanh_stays_inside_unit_range() {
        let transfer = TransferFunction::Tanh;
        for x in [-25.0, -3.0, -0.5, 0.0, 0.5, 3.0, 25.0] {
            let y = transfer.value(x);
            assert!((-1.0..=1.0).contains(&y), "tanh({x}) = {y} out of range");
        }
    }

    #[test]
    fn tanh_derivative_expects_the_stored_output() {
        let transfer = TransferFunction::Tanh;
        for x in [-2.0, -0.3, 0.0, 0.7, 1.9] {
            let y = transfer.value(x);
            // 1 - y² evaluated on the output equals sech²(x) on the raw sum.
            let expected = 1.0 / x.cosh().powi(2);
            assert_relative_eq!(transfer.derivative(y), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn rectifier_clamps_negatives_to_zero() {
        let transfer = TransferFunction::Rectifier;
        assert_eq!(transfer.value(-4.2), 0.0);
        assert_eq!(transfer.value(0.0), 0.0);
        assert_eq!(transfer.value(4.2), 4.2);

        assert_eq!(transfer.derivative(transfer.value(-4.2)), 0.0);
        assert_eq!(transfer.derivative(transfer.value(0.0)), 0.0);
        assert_eq!(transfer.derivative(transfer.value(4.2)), 1.0);
    }

    #[test]
    fn custom_pair_is_dispatched() {
        fn half(x: f64) -> f64 {
            0.5 * x
        }
        fn slope(_output: f64) -> f64 {
            0.5
        }
        let transfer = TransferFunction::Custom {
            value: half,
            derivative: slope,
        };
        assert_eq!(transfer.value(3.0), 1.5);
        assert_eq!(transfer.derivative(1.5), 0.5);
    }

    #[test]
    fn built_ins_compare_by_kind_custom_never_matches() {
        let tanh = TransferFunction::Tanh;
        assert_eq!(tanh, TransferFunction::Tanh);
        assert_ne!(tanh, TransferFunction::Rectifier);

        fn id(x: f64) -> f64 {
            x
        }
        let a = TransferFunction::Custom {
            value: id,
            derivative: id,
        };
        let b = TransferFunction::Custom {
            value: id,
            derivative: id,
        };
        assert_ne!(a, b);
        assert_ne!(a, tanh);
    }
}
