// src/resolver.rs
use crate::error::Result;
use crate::types::{Outcome, TldScanError};
use async_trait::async_trait;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::error::ProtoErrorKind;
use trust_dns_resolver::TokioAsyncResolver;

/// Forward lookup of a single host name.
#[async_trait]
pub trait HostLookup: Send + Sync {
    async fn lookup(&self, hostname: &str) -> Result<Outcome>;
}

/// Host lookup backed by the system's resolver configuration.
pub struct DnsLookup {
    resolver: TokioAsyncResolver,
}

impl DnsLookup {
    pub fn from_system_conf() -> Result<Self> {
        let resolver = TokioAsyncResolver::tokio_from_system_conf()
            .map_err(|e| TldScanError::ResolutionError(format!("Failed to create system resolver: {}", e)))?;
        Ok(Self { resolver })
    }
}

#[async_trait]
impl HostLookup for DnsLookup {
    async fn lookup(&self, hostname: &str) -> Result<Outcome> {
        match self.resolver.lookup_ip(hostname).await {
            Ok(_) => Ok(Outcome::Resolved),
            Err(e) => classify_failure(hostname, &e),
        }
    }
}

/// Missing names, timeouts and socket errors all count as unresolved; anything
/// else is reported to the caller.
fn classify_failure(hostname: &str, err: &ResolveError) -> Result<Outcome> {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. }
        | ResolveErrorKind::Timeout
        | ResolveErrorKind::Io(_) => Ok(Outcome::Unresolved),
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::Timeout | ProtoErrorKind::Io(_) => Ok(Outcome::Unresolved),
            _ => Err(unexpected(hostname, err)),
        },
        _ => Err(unexpected(hostname, err)),
    }
}

fn unexpected(hostname: &str, err: &ResolveError) -> TldScanError {
    TldScanError::ResolutionError(format!("Failed to resolve {}: {}", hostname, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_timeout_is_unresolved() {
        let err = ResolveError::from(ResolveErrorKind::Timeout);
        assert_eq!(classify_failure("example.com.zz", &err).unwrap(), Outcome::Unresolved);
    }

    #[test]
    fn test_io_error_is_unresolved() {
        let err = ResolveError::from(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        assert_eq!(classify_failure("example.com.zz", &err).unwrap(), Outcome::Unresolved);
    }

    #[test]
    fn test_other_failures_are_reported() {
        let err = ResolveError::from("resolver misconfigured");
        match classify_failure("example.com.zz", &err) {
            Err(TldScanError::ResolutionError(msg)) => assert!(msg.contains("example.com.zz")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
