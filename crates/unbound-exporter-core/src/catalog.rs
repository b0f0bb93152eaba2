//! Static catalog of the `unbound-control` statistics this exporter understands.
//!
//! Each entry binds a dotted resolver key to an exported metric name, help text
//! and kind. Names and kinds are part of the dashboard contract: change them and
//! existing queries break.

/// Namespace shared by every exported resolver metric.
pub const NAMESPACE: &str = "unbound";

/// Prometheus value semantics of an exported metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Monotonic total since resolver start (or last reset).
    Counter,
    /// Point-in-time value.
    Gauge,
}

impl MetricKind {
    /// Name used on `# TYPE` lines.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

/// One resolver statistic and its export identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDefinition {
    /// Dotted key as printed by `unbound-control`, e.g. `total.num.queries`.
    pub internal_key: &'static str,
    /// Fully qualified exported name, e.g. `unbound_total_num_queries`.
    pub exported_name: &'static str,
    pub help_text: &'static str,
    pub kind: MetricKind,
}

const fn counter(
    internal_key: &'static str,
    exported_name: &'static str,
    help_text: &'static str,
) -> MetricDefinition {
    MetricDefinition {
        internal_key,
        exported_name,
        help_text,
        kind: MetricKind::Counter,
    }
}

const fn gauge(
    internal_key: &'static str,
    exported_name: &'static str,
    help_text: &'static str,
) -> MetricDefinition {
    MetricDefinition {
        internal_key,
        exported_name,
        help_text,
        kind: MetricKind::Gauge,
    }
}

/// Every statistic the exporter publishes, in exposition order.
pub static CATALOG: &[MetricDefinition] = &[
    counter(
        "total.num.queries",
        "unbound_total_num_queries",
        "Number of queries for all threads.",
    ),
    counter(
        "total.num.cachehits",
        "unbound_total_num_cache_hits",
        "Number of cache hits for all threads.",
    ),
    counter(
        "total.num.cachemiss",
        "unbound_total_num_cache_miss",
        "Number of cache misses for all threads.",
    ),
    counter(
        "total.num.prefetch",
        "unbound_total_num_prefetch",
        "Number of prefetches for all threads.",
    ),
    counter(
        "total.num.recursivereplies",
        "unbound_total_num_recursive_replies",
        "Number of recursive replies for all threads.",
    ),
    gauge(
        "total.requestlist.avg",
        "unbound_total_requestlist_avg",
        "Average requestlist size for all threads.",
    ),
    gauge(
        "total.requestlist.max",
        "unbound_total_requestlist_max",
        "Maximum requestlist size for all threads",
    ),
    counter(
        "total.requestlist.overwritten",
        "unbound_total_requestlist_overwritten",
        "Number of items overwritten in requestlist for all threads",
    ),
    counter(
        "total.requestlist.exceeded",
        "unbound_total_requestlist_exceeded",
        "Number of items that exceeded the requestlist for all threads",
    ),
    gauge(
        "total.requestlist.current.all",
        "unbound_total_requestlist_current_all",
        "All current items on the requestlist for all threads",
    ),
    gauge(
        "total.requestlist.current.user",
        "unbound_total_requestlist_current_user",
        "User current items on the requestlist for all threads",
    ),
    gauge(
        "total.recursion.time.avg",
        "unbound_total_recurse_time_avg",
        "Average time spent recursing",
    ),
    gauge(
        "total.recursion.time.median",
        "unbound_total_recurse_time_median",
        "Median time spent recursing",
    ),
    counter(
        "total.num.expired",
        "unbound_total_num_expired",
        "Number of replies served from expired cache entries for all threads.",
    ),
    gauge(
        "total.tcpusage",
        "unbound_total_tcpusage",
        "Number of TCP buffers in use for all threads.",
    ),
    gauge(
        "time.up",
        "unbound_time_up",
        "Uptime of the resolver in seconds.",
    ),
    gauge(
        "mem.cache.rrset",
        "unbound_mem_cache_rrset",
        "Memory in bytes used by the RRset cache.",
    ),
    gauge(
        "mem.cache.message",
        "unbound_mem_cache_message",
        "Memory in bytes used by the message cache.",
    ),
    gauge(
        "mem.mod.iterator",
        "unbound_mem_mod_iterator",
        "Memory in bytes used by the iterator module.",
    ),
    gauge(
        "mem.mod.validator",
        "unbound_mem_mod_validator",
        "Memory in bytes used by the validator module.",
    ),
    counter(
        "num.query.tcp",
        "unbound_num_query_tcp",
        "Number of queries received over TCP.",
    ),
    counter(
        "num.query.ipv6",
        "unbound_num_query_ipv6",
        "Number of queries received over IPv6.",
    ),
    counter(
        "num.answer.rcode.NOERROR",
        "unbound_num_answer_rcode_noerror",
        "Number of answers with rcode NOERROR.",
    ),
    counter(
        "num.answer.rcode.NXDOMAIN",
        "unbound_num_answer_rcode_nxdomain",
        "Number of answers with rcode NXDOMAIN.",
    ),
    counter(
        "num.answer.rcode.SERVFAIL",
        "unbound_num_answer_rcode_servfail",
        "Number of answers with rcode SERVFAIL.",
    ),
    counter(
        "num.answer.secure",
        "unbound_num_answer_secure",
        "Number of answers that validated as secure.",
    ),
    counter(
        "num.answer.bogus",
        "unbound_num_answer_bogus",
        "Number of answers that failed validation.",
    ),
    counter(
        "num.rrset.bogus",
        "unbound_num_rrset_bogus",
        "Number of RRsets marked bogus by the validator.",
    ),
    counter(
        "unwanted.queries",
        "unbound_unwanted_queries",
        "Number of queries refused or dropped by access control.",
    ),
    counter(
        "unwanted.replies",
        "unbound_unwanted_replies",
        "Number of replies that were unwanted or unsolicited.",
    ),
];

/// The full catalog.
pub fn catalog() -> &'static [MetricDefinition] {
    CATALOG
}

/// Find the definition for a dotted resolver key.
pub fn lookup(internal_key: &str) -> Option<&'static MetricDefinition> {
    CATALOG.iter().find(|d| d.internal_key == internal_key)
}
