use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use super::model::GraphModel;

/// Reads the extraction service's payload for one room. Payloads are written
/// by the service as `<graph_dir>/<room_id>.json` and are treated as
/// already-validated: the only failure modes here are a missing document or
/// malformed JSON, both surfaced as a displayable fetch error.
pub fn fetch_graph(graph_dir: &Path, room_id: &str) -> Result<GraphModel> {
    if room_id.trim().is_empty() {
        return Err(anyhow!("no room selected"));
    }

    let path = graph_dir.join(format!("{room_id}.json"));
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read graph payload {}", path.display()))?;

    let model = parse_graph_payload(&raw)
        .with_context(|| format!("failed to parse graph payload for room {room_id}"))?;

    log::info!(
        "loaded graph for room {room_id}: {} nodes, {} edges",
        model.nodes.len(),
        model.edges.len()
    );

    Ok(model)
}

fn parse_graph_payload(raw: &str) -> Result<GraphModel> {
    let mut model: GraphModel =
        serde_json::from_str(raw).context("invalid JSON from graph service")?;

    // The service includes counts, but older payloads omit them.
    if model.node_count == 0 {
        model.node_count = model.nodes.len();
    }
    if model.edge_count == 0 {
        model.edge_count = model.edges.len();
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::parse_graph_payload;
    use crate::service::NodeKind;

    const PAYLOAD: &str = r#"{
        "nodes": [
            {
                "id": "n1",
                "name": "Ada Lovelace",
                "type": "PERSON",
                "description": "First programmer",
                "community_id": 3
            },
            {"id": "n2", "name": "Analytical Engine", "type": "machine"}
        ],
        "edges": [
            {
                "source": "Ada Lovelace",
                "target": "Analytical Engine",
                "relation": "wrote notes on",
                "evidence": "Note G"
            }
        ],
        "node_count": 2,
        "edge_count": 1
    }"#;

    #[test]
    fn parses_full_payload() {
        let model = parse_graph_payload(PAYLOAD).expect("payload parses");
        assert_eq!(model.nodes.len(), 2);
        assert_eq!(model.edges.len(), 1);
        assert_eq!(model.node_count, 2);
        assert_eq!(model.nodes[0].kind, NodeKind::Person);
        assert_eq!(model.nodes[0].community_id, Some(3));
        assert_eq!(model.edges[0].relation, "wrote notes on");
    }

    #[test]
    fn unknown_type_falls_back_to_other() {
        let model = parse_graph_payload(PAYLOAD).expect("payload parses");
        assert_eq!(model.nodes[1].kind, NodeKind::Other);
        assert_eq!(model.nodes[1].description, "");
        assert_eq!(model.nodes[1].community_id, None);
    }

    #[test]
    fn empty_graph_is_valid_not_an_error() {
        let model = parse_graph_payload(r#"{"nodes": [], "edges": []}"#).expect("empty is valid");
        assert!(model.is_empty());
        assert_eq!(model.node_count, 0);
    }

    #[test]
    fn missing_counts_are_backfilled() {
        let raw = r#"{
            "nodes": [{"id": "a", "name": "A", "type": "concept"}],
            "edges": []
        }"#;
        let model = parse_graph_payload(raw).expect("payload parses");
        assert_eq!(model.node_count, 1);
        assert_eq!(model.edge_count, 0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_graph_payload("{nodes: oops").is_err());
    }

    #[test]
    fn fetch_reads_room_payload_from_disk() {
        let dir = std::env::temp_dir().join("relgraph-fetch-test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("demo.json"), PAYLOAD).unwrap();

        let model = super::fetch_graph(&dir, "demo").expect("fetch succeeds");
        assert_eq!(model.nodes.len(), 2);

        assert!(super::fetch_graph(&dir, "missing-room").is_err());
        assert!(super::fetch_graph(&dir, "  ").is_err());
    }
}
