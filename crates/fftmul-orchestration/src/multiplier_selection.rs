//! Multiplier selection logic.

use std::sync::Arc;

use fftmul_core::multiplier::{CoreError, Multiplier};
use fftmul_core::registry::MultiplierFactory;

/// Get multipliers to run based on algorithm selection.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn Multiplier>>, CoreError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fftmul_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::default();
        let ms = get_multipliers_to_run("all", &factory).unwrap();
        assert_eq!(ms.len(), 2);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::default();
        let ms = get_multipliers_to_run("fft", &factory).unwrap();
        assert_eq!(ms.len(), 1);
        assert_eq!(ms[0].name(), "FFT");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::default();
        assert!(get_multipliers_to_run("unknown", &factory).is_err());
    }
}
