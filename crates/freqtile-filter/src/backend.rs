use log::warn;

/// Which transform implementation a scheduler run would like to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    /// Pick the best backend available on this build.
    #[default]
    Auto,

    /// Force the CPU FFT path.
    Cpu,

    /// Request a device-accelerated transform if one is compiled in,
    /// falling back to the CPU path otherwise.
    Accelerated,
}

/// A transform backend that is actually available, resolved from a
/// [`BackendPreference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// The rustfft-based CPU transform.
    Cpu,
}

/// Resolve a preference to an available backend.
///
/// This runs once per scheduler invocation, not per block: a backend that
/// cannot serve the request (not compiled in, or out of device memory at
/// group entry) is swapped for the CPU path here, and the rest of the run
/// never has to care. The fallback is logged but otherwise transparent to
/// the caller's result contract.
pub fn resolve(preference: BackendPreference) -> Backend {
    match preference {
        BackendPreference::Auto | BackendPreference::Cpu => Backend::Cpu,
        BackendPreference::Accelerated => {
            warn!("no accelerated transform backend is compiled in, falling back to CPU");
            Backend::Cpu
        }
    }
}
