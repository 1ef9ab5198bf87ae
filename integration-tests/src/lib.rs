//! Shared parameter sets for the cross-crate decay tests.

pub mod scenarios {
    use decay_core::{Parameters, Theta};

    /// Crank-Nicolson with `I = 0.8, a = 1.2, T = 1.5, dt = 0.5`.
    ///
    /// The mesh is `[0, 0.5, 1.0, 1.5]` and the solution values are known to
    /// fourteen digits.
    #[must_use]
    pub fn crank_nicolson_reference() -> Parameters {
        Parameters::new(0.8, 1.2, 1.5, 0.5, Theta::CRANK_NICOLSON)
            .expect("reference parameters are valid")
    }

    /// The values of [`crank_nicolson_reference`] at each mesh point.
    pub const CRANK_NICOLSON_VALUES: [f64; 4] = [
        0.8,
        0.430_769_230_769_23,
        0.231_952_662_721_89,
        0.124_897_587_619_48,
    ];

    /// Backward Euler with `I = 1, a = 2, T = 4, dt = 0.4`.
    #[must_use]
    pub fn backward_euler_error() -> Parameters {
        Parameters::new(1, 2, 4, 0.4, Theta::BACKWARD_EULER).expect("parameters are valid")
    }

    /// Forward Euler with `a·dt = 2.4 > 2`, which is unstable.
    #[must_use]
    pub fn unstable_forward_euler() -> Parameters {
        Parameters::new(1, 2, 4, 1.2, Theta::FORWARD_EULER).expect("parameters are valid")
    }

    /// A grid of decaying problems `(I, a, T, dt, θ)` covering all three
    /// schemes and a non-standard theta.
    ///
    /// Every `|I| <= 1` and `a·dt < 2`, so solution values stay bounded by one
    /// and round-off stays far below `1e-14`.
    #[must_use]
    pub fn parameter_grid() -> Vec<Parameters> {
        let mut grid = Vec::new();
        for initial in [0.1, 1.0, -0.7] {
            for rate in [0.5, 1.2, 2.0] {
                for (end_time, dt) in [(8.0, 0.8), (1.0, 0.1), (3.0, 0.7), (2.2, 0.05)] {
                    for theta in [0.0, 0.5, 0.8, 1.0] {
                        grid.push(
                            Parameters::new(initial, rate, end_time, dt, theta)
                                .expect("grid parameters are valid"),
                        );
                    }
                }
            }
        }
        grid
    }
}
