//! Greedy cover configuration.

/// Configuration for [`GreedyCoverRunner`](super::GreedyCoverRunner).
///
/// # Examples
///
/// ```
/// use u_setcover::cover::CoverConfig;
///
/// let config = CoverConfig::default().with_parallel(true);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverConfig {
    /// Whether to score candidates in parallel using rayon.
    ///
    /// Only takes effect when the crate is built with the `parallel`
    /// feature. Results are identical either way.
    pub parallel: bool,
}

impl CoverConfig {
    /// Enables or disables the parallel candidate scan.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
