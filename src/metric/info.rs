use serde::Serialize;

/// One named input column a metric expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub name: &'static str,
    /// Element type, e.g. `"float32"`.
    pub dtype: &'static str,
}

/// Static metadata a harness reads for documentation and discovery.
/// Nothing here is computed; every field is a literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub citation: &'static str,
    /// Argument and return value documentation.
    pub inputs_description: &'static str,
    /// Expected input schema, in argument order.
    pub features: Vec<Feature>,
    pub reference_urls: Vec<&'static str>,
}

impl MetricInfo {
    /// Looks up an expected input field by name.
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.name == name)
    }
}
