use ordered_float::OrderedFloat;
use path_discovery::{Error, Path, UndirectedGraph};

type Weight = OrderedFloat<f64>;

fn demo_graph() -> UndirectedGraph<Weight> {
    UndirectedGraph::build([
        (1, 2, OrderedFloat(20.0)),
        (1, 5, OrderedFloat(10.0)),
        (2, 5, OrderedFloat(20.0)),
        (2, 4, OrderedFloat(50.0)),
        (2, 3, OrderedFloat(20.0)),
        (3, 4, OrderedFloat(10.0)),
        (5, 4, OrderedFloat(50.0)),
    ])
    .unwrap()
}

#[test]
fn build_rejects_zero_length_edge() {
    let result = UndirectedGraph::build([(1, 2, OrderedFloat(0.0))]);
    assert!(matches!(result, Err(Error::InvalidEdge { a: 1, b: 2, .. })));
}

#[test]
fn build_rejects_negative_length_edge() {
    let result = UndirectedGraph::build([(3, 4, OrderedFloat(-1.5))]);
    assert!(matches!(result, Err(Error::InvalidEdge { a: 3, b: 4, .. })));
}

#[test]
fn build_rejects_duplicate_edge() {
    let result = UndirectedGraph::build([
        (1, 2, OrderedFloat(20.0)),
        (1, 2, OrderedFloat(30.0)),
    ]);
    assert!(matches!(result, Err(Error::DuplicateEdge(1, 2))));
}

#[test]
fn build_rejects_duplicate_edge_with_swapped_endpoints() {
    let result = UndirectedGraph::build([
        (1, 2, OrderedFloat(20.0)),
        (2, 1, OrderedFloat(30.0)),
    ]);
    assert!(matches!(result, Err(Error::DuplicateEdge(2, 1))));
}

#[test]
fn self_loop_is_stored_but_carries_no_adjacency() {
    let graph = UndirectedGraph::build([
        (1, 1, OrderedFloat(5.0)),
        (1, 2, OrderedFloat(3.0)),
    ])
    .unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.contains(1));
    assert!(!graph.are_adjacent(1, 1));
    assert!(graph.edge_between(1, 1).is_none());

    let neighbors: Vec<_> = graph.neighbors(1).collect();
    assert_eq!(neighbors, vec![(2, OrderedFloat(3.0))]);
}

#[test]
fn self_loop_endpoint_registers_as_node() {
    let graph = UndirectedGraph::build([
        (7, 7, OrderedFloat(1.0)),
        (1, 2, OrderedFloat(2.0)),
    ])
    .unwrap();

    assert!(graph.contains(7));
    assert_eq!(graph.neighbors(7).count(), 0);
}

#[test]
fn node_lookup_and_equality() {
    let graph = demo_graph();

    let node = graph.node(3).unwrap();
    assert_eq!(node.id(), 3);
    assert_eq!(node, graph.node(3).unwrap());
    assert_ne!(node, graph.node(4).unwrap());

    assert!(matches!(graph.node(42), Err(Error::UnknownNode(42))));
}

#[test]
fn node_adjacency_queries() {
    let graph = demo_graph();
    let node = graph.node(2).unwrap();

    assert!(node.is_adjacent(3));
    assert!(!node.is_adjacent(42));
    assert_eq!(node.edge_to(3).unwrap().length(), OrderedFloat(20.0));
    assert!(node.edge_to(42).is_none());
    assert_eq!(node.incident_edges().count(), 4);
}

#[test]
fn edge_lookup_is_symmetric() {
    let graph = demo_graph();

    let forward = graph.edge_between(3, 4).unwrap();
    let backward = graph.edge_between(4, 3).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(forward.length(), OrderedFloat(10.0));

    assert!(graph.edge_between(1, 3).is_none());
    assert!(graph.are_adjacent(1, 5));
    assert!(!graph.are_adjacent(1, 4));
}

#[test]
fn edge_endpoint_queries() {
    let graph = demo_graph();
    let edge = graph.edge_between(1, 2).unwrap();

    assert!(edge.connects(1));
    assert!(edge.connects(2));
    assert!(!edge.connects(3));
    assert_eq!(edge.other_end(1), 2);
    assert_eq!(edge.other_end(2), 1);

    let sharing = graph.edge_between(2, 3).unwrap();
    let disjoint = graph.edge_between(5, 4).unwrap();
    assert!(edge.is_adjacent(sharing));
    assert!(!edge.is_adjacent(disjoint));
}

#[test]
fn edges_are_kept_in_construction_order() {
    let graph = demo_graph();
    let edges = graph.edges();

    assert_eq!(edges.len(), 7);
    assert_eq!(edges[0].endpoints(), (1, 2));
    assert_eq!(edges[1].endpoints(), (1, 5));
    assert_eq!(edges[6].endpoints(), (5, 4));
    assert_eq!(edges[1].length(), OrderedFloat(10.0));
}

#[test]
fn graph_counts_and_node_ids() {
    let graph = demo_graph();

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 7);

    let mut ids: Vec<_> = graph.node_ids().collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn path_length_is_derived_from_graph_edges() {
    let graph = demo_graph();

    let path = Path::new(&graph, vec![1, 2, 3, 4]).unwrap();
    assert_eq!(path.length(), OrderedFloat(50.0));
    assert_eq!(path.start(), 1);
    assert_eq!(path.end(), 4);
    assert_eq!(path.nodes(), &[1, 2, 3, 4]);
}

#[test]
fn single_node_path_has_zero_length() {
    let graph = demo_graph();

    let path = Path::new(&graph, vec![3]).unwrap();
    assert_eq!(path.length(), OrderedFloat(0.0));
    assert_eq!(path.start(), 3);
    assert_eq!(path.end(), 3);
}

#[test]
fn single_node_path_requires_known_node() {
    let graph = demo_graph();
    assert!(matches!(
        Path::new(&graph, vec![42]),
        Err(Error::UnknownNode(42))
    ));
}

#[test]
fn path_construction_rejects_broken_chain() {
    let graph = demo_graph();
    assert!(matches!(
        Path::new(&graph, vec![1, 2, 4, 1]),
        Err(Error::DisconnectedPath(4, 1))
    ));
}

#[test]
fn append_extends_at_the_end() {
    let graph = demo_graph();
    let path = Path::new(&graph, vec![1, 2]).unwrap();

    let edge = graph.edge_between(2, 3).unwrap();
    let extended = path.append(&graph, edge).unwrap();

    assert_eq!(extended.nodes(), &[1, 2, 3]);
    assert_eq!(extended.length(), OrderedFloat(40.0));
    // Extension produces a new value; the original is untouched.
    assert_eq!(path.nodes(), &[1, 2]);
}

#[test]
fn prepend_extends_at_the_start() {
    let graph = demo_graph();
    let path = Path::new(&graph, vec![2, 3]).unwrap();

    let edge = graph.edge_between(1, 2).unwrap();
    let extended = path.prepend(&graph, edge).unwrap();

    assert_eq!(extended.nodes(), &[1, 2, 3]);
    assert_eq!(extended.length(), OrderedFloat(40.0));
}

#[test]
fn extension_rejects_non_adjacent_edge() {
    let graph = demo_graph();
    let path = Path::new(&graph, vec![1, 2]).unwrap();
    let edge = graph.edge_between(3, 4).unwrap();

    assert!(matches!(
        path.append(&graph, edge),
        Err(Error::NonAdjacentEdge { endpoint: 2, .. })
    ));
    assert!(matches!(
        path.prepend(&graph, edge),
        Err(Error::NonAdjacentEdge { endpoint: 1, .. })
    ));
}

#[test]
fn path_equality_compares_node_sequences() {
    let graph = demo_graph();

    let a = Path::new(&graph, vec![1, 2, 3]).unwrap();
    let b = Path::new(&graph, vec![1, 2, 3]).unwrap();
    let c = Path::new(&graph, vec![3, 2, 1]).unwrap();

    assert_eq!(a, b);
    // Same length, different sequence: tied under ordering, unequal values.
    assert_ne!(a, c);
    assert_eq!(a.length(), c.length());
}

#[test]
fn path_order_ranks_by_length_first() {
    let graph = demo_graph();

    let short = Path::new(&graph, vec![1, 5]).unwrap();
    let long = Path::new(&graph, vec![1, 2, 3]).unwrap();
    assert!(short < long);

    // Equal lengths fall back to the node sequence.
    let a = Path::new(&graph, vec![1, 2, 3]).unwrap();
    let c = Path::new(&graph, vec![3, 2, 1]).unwrap();
    assert!(a < c);
}

#[test]
fn path_display_lists_nodes() {
    let graph = demo_graph();
    let path = Path::new(&graph, vec![1, 2, 3, 4]).unwrap();
    assert_eq!(path.to_string(), "[1, 2, 3, 4]");
}
