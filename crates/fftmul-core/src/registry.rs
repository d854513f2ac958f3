//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use fftmul_bigfft::MulOptions;
use parking_lot::RwLock;
use tracing::debug;

use crate::multiplier::{CoreError, FftDigitMultiplier, Multiplier, ReferenceMultiplier};

/// Factory trait for creating multipliers.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, CoreError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// FFT multipliers own a worker pool, so each one is built once and shared.
pub struct DefaultFactory {
    opts: MulOptions,
    cache: RwLock<HashMap<String, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a factory whose FFT multipliers use `opts`.
    #[must_use]
    pub fn new(opts: MulOptions) -> Self {
        Self {
            opts,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn Multiplier>, CoreError> {
        debug!(name, threads = self.opts.threads, "creating multiplier");
        match name {
            "fft" => Ok(Arc::new(FftDigitMultiplier::new(self.opts.clone())?)),
            "reference" | "ref" => Ok(Arc::new(ReferenceMultiplier::new())),
            _ => Err(CoreError::Config(format!("unknown multiplier: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new(MulOptions::default())
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, CoreError> {
        if let Some(m) = self.cache.read().get(name) {
            return Ok(Arc::clone(m));
        }

        let m = self.create_multiplier(name)?;
        self.cache.write().insert(name.to_string(), Arc::clone(&m));
        Ok(m)
    }

    fn available(&self) -> Vec<&str> {
        vec!["fft", "reference"]
    }
}
