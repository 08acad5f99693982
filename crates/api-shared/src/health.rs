use crate::HealthRes;

/// Simple health service shared by the REST server binaries
///
/// Provides a standardised way to check the health status of the inbox backend.
pub struct HealthService;

impl HealthService {
    /// Check health.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Inbox API is alive".into(),
        }
    }
}
