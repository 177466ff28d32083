// Provider endpoints and query shapes.
// A query's parameters are kept sorted so its cache key is independent of insertion order.

use std::collections::BTreeMap;
use std::fmt;

/// Endpoint families exposed by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    TopHeadlines,
    Everything,
    Sources,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::TopHeadlines => "top-headlines",
            Endpoint::Everything => "everything",
            Endpoint::Sources => "sources",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// An endpoint plus its non-empty parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    endpoint: Endpoint,
    params: BTreeMap<String, String>,
}

impl Query {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: BTreeMap::new(),
        }
    }

    /// Set a parameter. `None` and empty values are dropped, never sent.
    pub fn param<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() => {
                self.params.insert(name.to_string(), v);
            }
            _ => {
                self.params.remove(name);
            }
        }
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Deterministic cache key: endpoint path plus the JSON-serialized parameters.
    pub fn cache_key(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|(k, v)| format!("{}:{}", json_string(k), json_string(v)))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}_{{{}}}", self.endpoint.path(), params)
    }
}

fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_ignores_insertion_order() {
        let a = Query::new(Endpoint::TopHeadlines)
            .param("country", Some("us"))
            .param("pageSize", Some(5))
            .param("page", Some(1));
        let b = Query::new(Endpoint::TopHeadlines)
            .param("page", Some(1))
            .param("country", Some("us"))
            .param("pageSize", Some(5));

        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(
            a.cache_key(),
            r#"top-headlines_{"country":"us","page":"1","pageSize":"5"}"#
        );
    }

    #[test]
    fn test_empty_and_absent_params_are_dropped() {
        let query = Query::new(Endpoint::Everything)
            .param("q", Some("rust"))
            .param("sources", None::<&str>)
            .param("domains", Some(""));

        assert_eq!(query.params().len(), 1);
        assert_eq!(query.params().get("q").map(String::as_str), Some("rust"));

        // "not set" and "empty string" produce the same key
        let unset = Query::new(Endpoint::Everything).param("q", Some("rust"));
        assert_eq!(query.cache_key(), unset.cache_key());
    }

    #[test]
    fn test_endpoints_distinguish_keys() {
        let a = Query::new(Endpoint::TopHeadlines).param("category", Some("business"));
        let b = Query::new(Endpoint::Sources).param("category", Some("business"));
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_param_values_are_escaped_in_key() {
        let a = Query::new(Endpoint::Everything).param("q", Some(r#"a","b":"c"#));
        let b = Query::new(Endpoint::Everything)
            .param("q", Some("a"))
            .param("b", Some("c"));
        assert_ne!(a.cache_key(), b.cache_key());
    }
}
