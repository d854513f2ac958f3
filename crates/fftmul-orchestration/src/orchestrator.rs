//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use fftmul_core::digits::Digits;
use fftmul_core::multiplier::{CoreError, Multiplier};

use crate::interfaces::MultiplicationResult;

fn run_one(multiplier: &dyn Multiplier, a: &Digits, b: &Digits) -> MultiplicationResult {
    let start = Instant::now();
    let outcome = multiplier.compute(a, b);
    let duration = start.elapsed();
    debug!(
        algorithm = multiplier.name(),
        ok = outcome.is_ok(),
        elapsed_ms = duration.as_millis(),
        "multiplication finished"
    );

    let (outcome, phases) = match outcome {
        Ok(product) => (Ok(product.digits), product.phases),
        Err(e) => (Err(e), None),
    };
    MultiplicationResult {
        algorithm: multiplier.name().to_string(),
        outcome,
        phases,
        duration,
    }
}

/// Multiply `a` by `b` with every given multiplier.
///
/// A single multiplier runs on the calling thread; several run in parallel.
/// Results keep the order of `multipliers`.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    a: &Digits,
    b: &Digits,
) -> Vec<MultiplicationResult> {
    if let [only] = multipliers {
        return vec![run_one(only.as_ref(), a, b)];
    }

    multipliers
        .par_iter()
        .map(|m| run_one(m.as_ref(), a, b))
        .collect()
}

/// Check that at least one multiplication succeeded and that all successful
/// products agree.
pub fn analyze_comparison_results(results: &[MultiplicationResult]) -> Result<(), CoreError> {
    let valid: Vec<(&str, &Digits)> = results
        .iter()
        .filter_map(|r| r.value().map(|v| (r.algorithm.as_str(), v)))
        .collect();

    let Some(((_, first), rest)) = valid.split_first() else {
        return Err(CoreError::Config("no valid results".into()));
    };

    for (algorithm, value) in rest {
        if value != first {
            warn!(algorithm, "product differs from first result");
            return Err(CoreError::Mismatch);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use fftmul_core::registry::DefaultFactory;
    use fftmul_core::registry::MultiplierFactory;

    fn ok(algorithm: &str, value: &str) -> MultiplicationResult {
        MultiplicationResult {
            algorithm: algorithm.into(),
            outcome: Ok(Digits::parse(value).unwrap()),
            phases: None,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn single_multiplier() {
        let factory = DefaultFactory::default();
        let ms = vec![factory.get("fft").unwrap()];
        let a = Digits::parse("999").unwrap();
        let results = execute_multiplications(&ms, &a, &a);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].value().unwrap().to_string(), "998001");
        assert!(results[0].phases.is_some());
    }

    #[test]
    fn all_multipliers_agree() {
        let factory = DefaultFactory::default();
        let ms = vec![factory.get("fft").unwrap(), factory.get("reference").unwrap()];
        let a = Digits::parse("123456789123456789").unwrap();
        let b = Digits::parse("987654321987654321").unwrap();
        let results = execute_multiplications(&ms, &a, &b);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].algorithm, "FFT");
        assert_eq!(results[1].algorithm, "Reference");
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn mismatch_detected() {
        let results = vec![ok("FFT", "56088"), ok("Reference", "56089")];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(CoreError::Mismatch)
        ));
    }

    #[test]
    fn errors_are_skipped() {
        let results = vec![
            MultiplicationResult {
                algorithm: "FFT".into(),
                outcome: Err(CoreError::Config("boom".into())),
                phases: None,
                duration: Duration::ZERO,
            },
            ok("Reference", "42"),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn no_valid_results() {
        assert!(analyze_comparison_results(&[]).is_err());
    }
}
