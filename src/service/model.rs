use serde::Deserialize;

/// Entity types the extraction service is known to emit. The payload field is
/// an open string enum, so anything unrecognized lands in `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NodeKind {
    Person,
    Organization,
    Location,
    Event,
    Concept,
    Technology,
    Other,
}

impl NodeKind {
    pub const KNOWN: [NodeKind; 6] = [
        Self::Person,
        Self::Organization,
        Self::Location,
        Self::Event,
        Self::Concept,
        Self::Technology,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
            Self::Location => "location",
            Self::Event => "event",
            Self::Concept => "concept",
            Self::Technology => "technology",
            Self::Other => "other",
        }
    }
}

impl From<String> for NodeKind {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "person" => Self::Person,
            "organization" => Self::Organization,
            "location" => Self::Location,
            "event" => Self::Event,
            "concept" => Self::Concept,
            "technology" => Self::Technology,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub community_id: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub relation: String,
    #[serde(default)]
    pub evidence: String,
}

/// Immutable snapshot of one room's graph, exactly as the extraction service
/// returned it. Edges reference nodes by `name`, which is unique per load.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphModel {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(default)]
    pub node_count: usize,
    #[serde(default)]
    pub edge_count: usize,
}

impl GraphModel {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_by_name(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.name == name)
    }
}
