use ordered_float::OrderedFloat;
use path_discovery::{PathFinder, UndirectedGraph};

fn main() {
    env_logger::init();

    let graph = UndirectedGraph::build([
        (1, 2, OrderedFloat(20.0)),
        (1, 5, OrderedFloat(10.0)),
        (2, 5, OrderedFloat(20.0)),
        (2, 4, OrderedFloat(50.0)),
        (2, 3, OrderedFloat(20.0)),
        (3, 4, OrderedFloat(10.0)),
        (5, 4, OrderedFloat(50.0)),
    ])
    .expect("demo graph is valid");

    println!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let finder = PathFinder::new();

    let queries = [
        (4, 1, 1.0),
        (4, 2, 1.0),
        (1, 3, 1.0),
        (2, 5, 1.0),
        (3, 5, 1.0),
        (1, 4, 1.0),
        (3, 5, 1.5),
    ];

    for (start, end, tolerance) in queries {
        println!("\n{start} -> {end} (tolerance {tolerance}):");
        match finder.find_paths(&graph, start, end, tolerance) {
            Ok(paths) if paths.is_empty() => println!("  unreachable"),
            Ok(paths) => {
                for path in paths {
                    println!("  {path} length {:.1}", path.length().into_inner());
                }
            }
            Err(err) => println!("  error: {err}"),
        }
    }

    println!(
        "\nQuery cache holds {} primary paths",
        finder.cache().len()
    );
}
