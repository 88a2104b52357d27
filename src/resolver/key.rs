/// What the resolver should do with an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// Resolve this hostname to an account.
    Domain(String),
    /// Not a profile request; leave it to the rest of the router.
    PassThrough,
}

/// Pick the lookup key for a request.
///
/// With domain routing the `Host` header is used, but only for the root
/// path. Without it (dev/staging) the first path segment is used, unless it
/// has no `.` or starts with `_`.
pub fn lookup_key(use_domain_routing: bool, host: Option<&str>, path: &str) -> LookupKey {
    if use_domain_routing {
        if path != "/" && !path.is_empty() {
            return LookupKey::PassThrough;
        }
        return match host.map(normalize_host) {
            Some(h) if !h.is_empty() => LookupKey::Domain(h),
            _ => LookupKey::PassThrough,
        };
    }

    let segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    if segment.starts_with('_') || !segment.contains('.') {
        return LookupKey::PassThrough;
    }
    LookupKey::Domain(normalize_host(segment))
}

/// Lowercase and drop any `:port` suffix.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let without_port = match host.rsplit_once(':') {
        // Leave bracketed IPv6 literals alone unless a port follows them.
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) && !name.ends_with(':') => {
            name
        }
        _ => host,
    };
    without_port.trim_end_matches('.').to_ascii_lowercase()
}
