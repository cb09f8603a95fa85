//! Search request construction

use url::form_urlencoded;

use crate::error::{ClientError, Result};
use crate::model::ClusterAssignment;

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    cluster: Option<String>,
}

impl SearchRequest {
    /// Build a request, or `None` when the query is blank
    ///
    /// The query is sent exactly as typed; trimming only decides whether
    /// there is anything to send.
    pub fn new(query: &str, clusters: Option<&ClusterAssignment>) -> Result<Option<Self>> {
        if query.trim().is_empty() {
            return Ok(None);
        }
        let cluster = clusters
            .map(ClusterAssignment::to_json)
            .transpose()
            .map_err(ClientError::into_search)?;

        Ok(Some(Self {
            query: query.to_string(),
            cluster,
        }))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Serialized cluster assignment, when one was available
    pub fn cluster(&self) -> Option<&str> {
        self.cluster.as_deref()
    }

    /// Query parameters in wire order
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![("query", self.query.as_str())];
        if let Some(cluster) = &self.cluster {
            params.push(("cluster", cluster.as_str()));
        }
        params
    }

    /// Full request URL for the given search endpoint
    pub fn url(&self, endpoint: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params())
            .finish();
        format!("{endpoint}?{query}")
    }
}
