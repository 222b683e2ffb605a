//! Trait definitions for `apiagg`.

use crate::models::ProviderKind;

/// A client for one external provider.
///
/// `fetch` never fails. Implementations contain every transport, decode and
/// unexpected failure at this boundary and hand back their provider's
/// degraded value instead; failure detail only reaches the logs.
pub trait ProviderClient: Send + Sync {
    /// Per-call parameters (page limit, username, city).
    type Params: ?Sized + Sync;

    /// Success shape or degraded value.
    type Output: Send;

    /// Returns the kind of provider this client talks to.
    fn kind(&self) -> ProviderKind;

    /// Returns the display name for this provider.
    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Fetches from the provider, degrading instead of failing.
    fn fetch(
        &self,
        params: &Self::Params,
    ) -> impl std::future::Future<Output = Self::Output> + Send;
}
