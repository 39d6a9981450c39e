//! Catalog data compiled into the binary

use super::model::Category;

/// JSON source of every category, in declared order
pub(crate) const EMBEDDED: [(Category, &str); 9] = [
    (Category::Network, include_str!("../../catalog/network.json")),
    (Category::Memory, include_str!("../../catalog/memory.json")),
    (Category::Gpu, include_str!("../../catalog/gpu.json")),
    (
        Category::WindowsFeatures,
        include_str!("../../catalog/windows_features.json"),
    ),
    (
        Category::FirewallSecurity,
        include_str!("../../catalog/firewall_security.json"),
    ),
    (
        Category::NagleAlgorithm,
        include_str!("../../catalog/nagle_algorithm.json"),
    ),
    (
        Category::NetworkThrottling,
        include_str!("../../catalog/network_throttling.json"),
    ),
    (
        Category::SystemResponsiveness,
        include_str!("../../catalog/system_responsiveness.json"),
    ),
    (
        Category::LatencyTimers,
        include_str!("../../catalog/latency_timers.json"),
    ),
];
