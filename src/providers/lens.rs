//! The `lens` provider: the stock template catalog for a Prometheus
//! backend deployed alongside the cluster.
//!
//! Templates are grouped per [`Category`]; each entry substitutes the
//! caller's parameters into fixed slots and returns the rendered PromQL
//! verbatim. Rendering never escapes, trims, or validates — parameter
//! values land in the output exactly as supplied.

use crate::error::{MuninnError, Result};
use crate::traits::MetricsProvider;
use crate::types::{Category, QueryParameters, ServiceBinding};

/// Namespace the stock deployment installs the backend into.
const SERVICE_NAMESPACE: &str = "lens-metrics";

/// Service name of the backend endpoint.
const SERVICE_NAME: &str = "prometheus";

/// Look-back window for every `rate()` template this provider emits.
const RATE_WINDOW: &str = "1m";

/// Query builder for the stock Prometheus deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct LensProvider;

impl LensProvider {
    /// Create the provider. Stateless; every instance is identical.
    pub fn new() -> Self {
        Self
    }

    fn cluster_query(&self, p: &QueryParameters, query_name: &str) -> Option<String> {
        let nodes = p.nodes.as_deref().unwrap_or_default();
        let w = self.rate_window();
        match query_name {
            "memoryUsage" => {
                // The node filter must land on every _bytes sub-metric, so it
                // is applied as a textual substitution over the whole template.
                let filtered = format!(r#"_bytes{{node=~"{nodes}"}}"#);
                Some(
                    "sum(node_memory_MemTotal_bytes - (node_memory_MemFree_bytes + node_memory_Buffers_bytes + node_memory_Cached_bytes)) by (kubernetes_name)"
                        .replace("_bytes", &filtered),
                )
            }
            "workloadMemoryUsage" => Some(format!(
                r#"sum(container_memory_working_set_bytes{{container!="POD",container!="",instance=~"{nodes}"}}) by (component)"#
            )),
            "memoryRequests" => Some(format!(
                r#"sum(kube_pod_container_resource_requests{{node=~"{nodes}", resource="memory"}}) by (component)"#
            )),
            "memoryLimits" => Some(format!(
                r#"sum(kube_pod_container_resource_limits{{node=~"{nodes}", resource="memory"}}) by (component)"#
            )),
            "memoryCapacity" => Some(format!(
                r#"sum(kube_node_status_capacity{{node=~"{nodes}", resource="memory"}}) by (component)"#
            )),
            "memoryAllocatableCapacity" => Some(format!(
                r#"sum(kube_node_status_allocatable{{node=~"{nodes}", resource="memory"}}) by (component)"#
            )),
            "cpuUsage" => Some(format!(
                r#"sum(rate(node_cpu_seconds_total{{node=~"{nodes}", mode=~"user|system"}}[{w}]))"#
            )),
            "cpuRequests" => Some(format!(
                r#"sum(kube_pod_container_resource_requests{{node=~"{nodes}", resource="cpu"}}) by (component)"#
            )),
            "cpuLimits" => Some(format!(
                r#"sum(kube_pod_container_resource_limits{{node=~"{nodes}", resource="cpu"}}) by (component)"#
            )),
            "cpuCapacity" => Some(format!(
                r#"sum(kube_node_status_capacity{{node=~"{nodes}", resource="cpu"}}) by (component)"#
            )),
            "cpuAllocatableCapacity" => Some(format!(
                r#"sum(kube_node_status_allocatable{{node=~"{nodes}", resource="cpu"}}) by (component)"#
            )),
            "podUsage" => Some(format!(
                r#"sum({{__name__=~"kubelet_running_pod_count|kubelet_running_pods", instance=~"{nodes}"}})"#
            )),
            "podCapacity" => Some(format!(
                r#"sum(kube_node_status_capacity{{node=~"{nodes}", resource="pods"}}) by (component)"#
            )),
            "podAllocatableCapacity" => Some(format!(
                r#"sum(kube_node_status_allocatable{{node=~"{nodes}", resource="pods"}}) by (component)"#
            )),
            "fsSize" => Some(format!(
                r#"sum(node_filesystem_size_bytes{{node=~"{nodes}", mountpoint="/"}}) by (node)"#
            )),
            "fsUsage" => Some(format!(
                r#"sum(node_filesystem_size_bytes{{node=~"{nodes}", mountpoint="/"}} - node_filesystem_avail_bytes{{node=~"{nodes}", mountpoint="/"}}) by (node)"#
            )),
            _ => None,
        }
    }

    // Same metric set as `cluster`, but labelled per node and without an
    // externally supplied node filter.
    fn node_query(&self, query_name: &str) -> Option<String> {
        let w = self.rate_window();
        match query_name {
            "memoryUsage" => Some(
                "sum (node_memory_MemTotal_bytes - (node_memory_MemFree_bytes + node_memory_Buffers_bytes + node_memory_Cached_bytes)) by (node)"
                    .to_string(),
            ),
            "workloadMemoryUsage" => Some(
                r#"sum(container_memory_working_set_bytes{container!="POD",container!=""}) by (instance)"#
                    .to_string(),
            ),
            "memoryCapacity" => {
                Some(r#"sum(kube_node_status_capacity{resource="memory"}) by (node)"#.to_string())
            }
            "memoryAllocatableCapacity" => Some(
                r#"sum(kube_node_status_allocatable{resource="memory"}) by (node)"#.to_string(),
            ),
            "cpuUsage" => Some(format!(
                r#"sum(rate(node_cpu_seconds_total{{mode=~"user|system"}}[{w}])) by(node)"#
            )),
            "cpuCapacity" => {
                Some(r#"sum(kube_node_status_allocatable{resource="cpu"}) by (node)"#.to_string())
            }
            "cpuAllocatableCapacity" => {
                Some(r#"sum(kube_node_status_allocatable{resource="cpu"}) by (node)"#.to_string())
            }
            "fsSize" => Some(
                r#"sum(node_filesystem_size_bytes{mountpoint="/"}) by (node)"#.to_string(),
            ),
            "fsUsage" => Some(
                r#"sum(node_filesystem_size_bytes{mountpoint="/"} - node_filesystem_avail_bytes{mountpoint="/"}) by (node)"#
                    .to_string(),
            ),
            _ => None,
        }
    }

    fn pod_query(&self, p: &QueryParameters, query_name: &str) -> Option<String> {
        let pods = p.pods.as_deref().unwrap_or_default();
        let namespace = p.namespace.as_deref().unwrap_or_default();
        let selector = p.selector.as_deref().unwrap_or_default();
        let w = self.rate_window();
        match query_name {
            "cpuUsage" => Some(format!(
                r#"sum(rate(container_cpu_usage_seconds_total{{container!="POD",container!="",pod=~"{pods}",namespace="{namespace}"}}[{w}])) by ({selector})"#
            )),
            "cpuRequests" => Some(format!(
                r#"sum(kube_pod_container_resource_requests{{pod=~"{pods}",resource="cpu",namespace="{namespace}"}}) by ({selector})"#
            )),
            "cpuLimits" => Some(format!(
                r#"sum(kube_pod_container_resource_limits{{pod=~"{pods}",resource="cpu",namespace="{namespace}"}}) by ({selector})"#
            )),
            "memoryUsage" => Some(format!(
                r#"sum(container_memory_working_set_bytes{{container!="POD",container!="",pod=~"{pods}",namespace="{namespace}"}}) by ({selector})"#
            )),
            "memoryRequests" => Some(format!(
                r#"sum(kube_pod_container_resource_requests{{pod=~"{pods}",resource="memory",namespace="{namespace}"}}) by ({selector})"#
            )),
            "memoryLimits" => Some(format!(
                r#"sum(kube_pod_container_resource_limits{{pod=~"{pods}",resource="memory",namespace="{namespace}"}}) by ({selector})"#
            )),
            "fsUsage" => Some(format!(
                r#"sum(container_fs_usage_bytes{{container!="POD",container!="",pod=~"{pods}",namespace="{namespace}"}}) by ({selector})"#
            )),
            "fsWrites" => Some(format!(
                r#"sum(rate(container_fs_writes_bytes_total{{container!="", pod=~"{pods}", namespace="{namespace}"}}[{w}])) by ({selector})"#
            )),
            "fsReads" => Some(format!(
                r#"sum(rate(container_fs_reads_bytes_total{{container!="", pod=~"{pods}", namespace="{namespace}"}}[{w}])) by ({selector})"#
            )),
            "networkReceive" => Some(format!(
                r#"sum(rate(container_network_receive_bytes_total{{pod=~"{pods}",namespace="{namespace}"}}[{w}])) by ({selector})"#
            )),
            "networkTransmit" => Some(format!(
                r#"sum(rate(container_network_transmit_bytes_total{{pod=~"{pods}",namespace="{namespace}"}}[{w}])) by ({selector})"#
            )),
            _ => None,
        }
    }

    fn pvc_query(&self, p: &QueryParameters, query_name: &str) -> Option<String> {
        let pvc = p.pvc.as_deref().unwrap_or_default();
        let namespace = p.namespace.as_deref().unwrap_or_default();
        match query_name {
            "diskUsage" => Some(format!(
                r#"sum(kubelet_volume_stats_used_bytes{{persistentvolumeclaim="{pvc}",namespace="{namespace}"}}) by (persistentvolumeclaim, namespace)"#
            )),
            "diskCapacity" => Some(format!(
                r#"sum(kubelet_volume_stats_capacity_bytes{{persistentvolumeclaim="{pvc}",namespace="{namespace}"}}) by (persistentvolumeclaim, namespace)"#
            )),
            _ => None,
        }
    }

    fn ingress_query(&self, p: &QueryParameters, query_name: &str) -> Option<String> {
        let ingress = p.ingress.as_deref().unwrap_or_default();
        let namespace = p.namespace.as_deref().unwrap_or_default();
        let w = self.rate_window();
        match query_name {
            // The rendered status regexes carry a literal backslash before
            // the `d` (`^2\\d*`), not a bare digit class.
            "bytesSentSuccess" => Some(self.bytes_sent(ingress, namespace, "^2\\\\d*")),
            "bytesSentFailure" => Some(self.bytes_sent(ingress, namespace, "^5\\\\d*")),
            "requestDurationSeconds" => Some(format!(
                r#"sum(rate(nginx_ingress_controller_request_duration_seconds_sum{{ingress="{ingress}",namespace="{namespace}"}}[{w}])) by (ingress, namespace)"#
            )),
            "responseDurationSeconds" => Some(format!(
                r#"sum(rate(nginx_ingress_controller_response_duration_seconds_sum{{ingress="{ingress}",namespace="{namespace}"}}[{w}])) by (ingress, namespace)"#
            )),
            _ => None,
        }
    }

    /// Bytes-sent rate for one ingress, split by an HTTP status-class regex.
    ///
    /// Backs the `bytesSentSuccess` / `bytesSentFailure` pair, which differ
    /// only in the regex supplied here.
    fn bytes_sent(&self, ingress: &str, namespace: &str, statuses: &str) -> String {
        let w = self.rate_window();
        format!(
            r#"sum(rate(nginx_ingress_controller_bytes_sent_sum{{ingress="{ingress}",namespace="{namespace}",status=~"{statuses}"}}[{w}])) by (ingress, namespace)"#
        )
    }
}

impl MetricsProvider for LensProvider {
    fn id(&self) -> &str {
        "lens"
    }

    fn name(&self) -> &str {
        "Lens"
    }

    fn rate_window(&self) -> &str {
        RATE_WINDOW
    }

    fn service_binding(&self) -> ServiceBinding {
        ServiceBinding::new(SERVICE_NAMESPACE, SERVICE_NAME)
    }

    fn build_query(&self, params: &QueryParameters, query_name: &str) -> Result<String> {
        let query = match params.category.as_deref().and_then(Category::parse) {
            Some(Category::Cluster) => self.cluster_query(params, query_name),
            Some(Category::Nodes) => self.node_query(query_name),
            Some(Category::Pods) => self.pod_query(params, query_name),
            Some(Category::Pvc) => self.pvc_query(params, query_name),
            Some(Category::Ingress) => self.ingress_query(params, query_name),
            None => None,
        };
        query.ok_or_else(|| MuninnError::UnknownQuery {
            query_name: query_name.to_string(),
            category: params.category.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_sent_varies_only_by_status_regex() {
        let provider = LensProvider::new();
        let success = provider.bytes_sent("web", "default", "^2\\\\d*");
        let failure = provider.bytes_sent("web", "default", "^5\\\\d*");
        assert_ne!(success, failure);
        assert_eq!(success.replace("^2", "^5"), failure);
    }

    #[test]
    fn bytes_sent_filters_and_groups() {
        let provider = LensProvider::new();
        let query = provider.bytes_sent("web", "prod", "^2\\\\d*");
        assert!(query.contains(r#"ingress="web""#));
        assert!(query.contains(r#"namespace="prod""#));
        assert!(query.contains(r#"status=~"^2\\d*""#));
        assert!(query.contains("[1m]"));
        assert!(query.ends_with("by (ingress, namespace)"));
    }
}
