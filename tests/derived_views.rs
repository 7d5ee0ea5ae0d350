use vizgraph::graph::{EdgeView, NodeView};
use vizgraph_test_utils::builders::{graph_from_edges, SeedFileBuilder, SeedNodeBuilder};

#[test]
fn test_edges_flatten_in_per_source_order() {
    let graph = graph_from_edges(
        &["A", "B", "C"],
        &[("B", "A"), ("A", "C"), ("A", "B")],
    );

    // Sources come out in sorted node order; within a source, edges keep
    // insertion order.
    assert_eq!(
        graph.edges(),
        vec![
            EdgeView {
                source: "A".to_string(),
                target: "C".to_string(),
            },
            EdgeView {
                source: "A".to_string(),
                target: "B".to_string(),
            },
            EdgeView {
                source: "B".to_string(),
                target: "A".to_string(),
            },
        ]
    );
}

#[test]
fn test_view_pairs_nodes_with_payloads() {
    let graph = SeedFileBuilder::new()
        .with_node(
            "A",
            SeedNodeBuilder::new()
                .kind("TYPE_1")
                .tag("owner", "platform")
                .child("B")
                .build(),
        )
        .with_node("B", SeedNodeBuilder::new().kind("TYPE_2").build())
        .build_graph();

    let view = graph.view();

    assert_eq!(view.nodes.len(), 2);
    let a: &NodeView = &view.nodes[0];
    assert_eq!(a.id, "A");
    assert_eq!(
        a.payload.as_ref().map(|p| p.kind.as_str()),
        Some("TYPE_1")
    );
    assert_eq!(view.edges.len(), 1);
    assert_eq!(view.edges[0].source, "A");
    assert_eq!(view.edges[0].target, "B");
}

#[test]
fn test_views_recompute_after_mutation() {
    let mut graph = graph_from_edges(&["A", "B"], &[("A", "B")]);

    assert_eq!(graph.edges().len(), 1);

    graph.remove_edge("A", "B").unwrap();
    assert_eq!(graph.edges().len(), 0);

    graph.add_node("C").unwrap();
    assert_eq!(
        graph.nodes(),
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    );
}

#[test]
fn test_view_serializes_for_consumers() {
    let graph = SeedFileBuilder::new()
        .with_node(
            "A",
            SeedNodeBuilder::new().kind("TYPE_1").child("B").build(),
        )
        .with_node("B", SeedNodeBuilder::new().build())
        .build_graph();

    let rendered = toml::to_string(&graph.view()).expect("view serializes");

    assert!(rendered.contains("[[nodes]]"));
    assert!(rendered.contains("id = \"A\""));
    assert!(rendered.contains("source = \"A\""));
    assert!(rendered.contains("target = \"B\""));
}
