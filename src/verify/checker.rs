use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Per-request timeout for reachability probes
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Redirect hops followed before a probe is considered failed
const MAX_REDIRECTS: usize = 10;

/// Decides whether a URL is reachable.
///
/// Implementations must never panic or surface errors: every failure mode
/// collapses to `false`.
pub trait Checker: Send + Sync {
    fn check(&self, url: &str) -> bool;
}

impl<F> Checker for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn check(&self, url: &str) -> bool {
        self(url)
    }
}

/// HEAD-request checker backed by a blocking HTTP client.
///
/// The client lives exactly as long as the checker, so one verification run
/// owns one client and releases it when the run ends. Idle connections are not
/// pooled: every probe is an independent request. If the client cannot be
/// built, every URL is reported unreachable.
pub struct HttpChecker {
    client: Option<Client>,
}

impl HttpChecker {
    pub fn new() -> Self {
        Self::with_timeout(CHECK_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| tracing::warn!("Failed to build HTTP client: {}", e))
            .ok();

        Self { client }
    }
}

impl Default for HttpChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for HttpChecker {
    fn check(&self, url: &str) -> bool {
        let Some(client) = self.client.as_ref() else {
            return false;
        };

        match client.head(url).send() {
            Ok(response) => {
                let status = response.status();
                let reachable = is_reachable_status(status.as_u16());
                tracing::debug!("HEAD {} -> {}", url, status);
                reachable
            }
            Err(e) => {
                tracing::debug!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }
}

/// 2xx and 3xx count as reachable.
pub fn is_reachable_status(status: u16) -> bool {
    (200..400).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_status_range() {
        assert!(!is_reachable_status(199));
        assert!(is_reachable_status(200));
        assert!(is_reachable_status(204));
        assert!(is_reachable_status(304));
        assert!(is_reachable_status(399));
        assert!(!is_reachable_status(400));
        assert!(!is_reachable_status(404));
        assert!(!is_reachable_status(503));
    }

    #[test]
    fn test_missing_client_is_unreachable() {
        let checker = HttpChecker { client: None };
        assert!(!checker.check("http://127.0.0.1:1/ep_01.mp3"));
    }

    #[test]
    fn test_closure_checker() {
        let checker = |url: &str| url.ends_with("2.mp3");
        assert!(checker.check("http://x.test/ep_2.mp3"));
        assert!(!checker.check("http://x.test/ep_1.mp3"));
    }

    #[test]
    fn test_invalid_url_is_unreachable() {
        let checker = HttpChecker::with_timeout(Duration::from_millis(200));
        assert!(!checker.check("not a url"));
        assert!(!checker.check(""));
    }
}
