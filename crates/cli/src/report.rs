use std::fmt;

use decay_core::Scheme;
use decay_solvers::{sweep::SweepEntry, theta_rule::Solution};

/// Summary of an experiment: one line per step size, then observed rates.
pub struct Report<'a> {
    scheme: Scheme,
    entries: &'a [SweepEntry],
    rates: &'a [f64],
}

impl<'a> Report<'a> {
    pub fn new(scheme: Scheme, entries: &'a [SweepEntry], rates: &'a [f64]) -> Self {
        Self {
            scheme,
            entries,
            rates,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "scheme {} (theta = {})",
            self.scheme,
            self.scheme.theta().value()
        )?;
        writeln!(f, "{:>12} {:>8} {:>14}", "dt", "Nt", "error")?;
        for entry in self.entries {
            writeln!(
                f,
                "{:>12} {:>8} {:>14.6e}",
                entry.dt, entry.steps, entry.error
            )?;
        }
        if !self.rates.is_empty() {
            let rates: Vec<String> = self.rates.iter().map(|r| format!("{r:.2}")).collect();
            writeln!(f, "convergence rates: {}", rates.join(" "))?;
        }
        Ok(())
    }
}

/// Mesh-point listing of one solution next to the exact solution.
pub struct SolutionTable<'a>(pub &'a Solution);

impl fmt::Display for SolutionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.0;
        writeln!(f, "dt = {}", solution.parameters.dt())?;
        for (n, (&t, &u)) in solution.times.iter().zip(&solution.values).enumerate() {
            writeln!(
                f,
                "t={t:.1}, u[{n}]={u:.14}, exact={:.14}",
                solution.parameters.exact(t)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use decay_core::Parameters;
    use decay_solvers::theta_rule;

    #[test]
    fn report_lists_entries_and_rates() {
        let entries = [
            SweepEntry {
                dt: 0.1,
                steps: 10,
                error: 1.0e-2,
            },
            SweepEntry {
                dt: 0.05,
                steps: 20,
                error: 2.5e-3,
            },
        ];
        let rates = [2.0];

        let text = Report::new(Scheme::CrankNicolson, &entries, &rates).to_string();

        assert!(text.starts_with("scheme CN (theta = 0.5)\n"));
        assert!(text.contains("1.000000e-2"));
        assert!(text.contains("2.500000e-3"));
        assert!(text.ends_with("convergence rates: 2.00\n"));
    }

    #[test]
    fn report_without_rates_omits_the_line() {
        let entries = [SweepEntry {
            dt: 0.1,
            steps: 10,
            error: 1.0e-2,
        }];

        let text = Report::new(Scheme::BackwardEuler, &entries, &[]).to_string();

        assert!(!text.contains("convergence"));
    }

    #[test]
    fn solution_table_matches_known_values() {
        let params = Parameters::new(0.8, 1.2, 1.5, 0.5, Scheme::CrankNicolson.theta()).unwrap();
        let solution = theta_rule::solve_unobserved(&params);

        let text = SolutionTable(&solution).to_string();

        assert!(text.contains("t=0.0, u[0]=0.80000000000000"));
        assert!(text.contains("t=0.5, u[1]=0.43076923076923"));
        assert!(text.contains("t=1.0, u[2]=0.23195266272189"));
        assert!(text.contains("t=1.5, u[3]=0.12489758761948"));
    }
}
