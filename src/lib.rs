pub mod algorithm;
pub mod analysis;
pub mod error;
pub mod graph;
pub mod parser;
pub mod report;

#[cfg(test)]
mod tests {
    use crate::{
        analysis::{analyze, analyze_from, Edge},
        graph::Graph,
        parser::parser,
    };
    use chumsky::Parser;

    // The 12-node exercise graph:
    //
    //   A---B    E---I      D
    //            |          |
    //            F----------C---H
    //           / \
    //          G---K---J
    //              |
    //              L
    fn demo_graph() -> Graph {
        let src = "
            A -- B
            E -- F
            E -- I
            F -- C
            F -- G
            F -- K
            C -- D
            C -- H
            G -- K
            J -- K
            K -- L
        ";
        let def = parser().parse(src).expect("cannot parse");

        Graph::from_def(&def).expect("cannot build graph")
    }

    fn normalized(edge: &Edge) -> (String, String) {
        if edge.0 <= edge.1 {
            (edge.0.clone(), edge.1.clone())
        } else {
            (edge.1.clone(), edge.0.clone())
        }
    }

    #[test]
    fn demo_analysis() {
        let graph = demo_graph();
        let analysis = analyze(&graph);

        let mut articulations = analysis.articulations.clone();
        articulations.sort();
        assert_eq!(articulations, vec!["C", "E", "F", "K"]);

        let mut bridges: Vec<_> = analysis.bridges.iter().map(normalized).collect();
        bridges.sort();
        let expected: Vec<(String, String)> = [
            ("A", "B"),
            ("C", "D"),
            ("C", "F"),
            ("C", "H"),
            ("E", "F"),
            ("E", "I"),
            ("J", "K"),
            ("K", "L"),
        ]
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
        assert_eq!(bridges, expected);

        assert_eq!(analysis.components.len(), 9);

        // every edge of the graph belongs to exactly one component
        let mut edges: Vec<_> = analysis
            .components
            .iter()
            .flatten()
            .map(normalized)
            .collect();
        edges.sort();
        assert_eq!(edges.len(), graph.edge_count());
        edges.dedup();
        assert_eq!(edges.len(), graph.edge_count());
    }

    #[test]
    fn demo_analysis_from_any_start() {
        let graph = demo_graph();
        let whole = analyze(&graph);

        for start in ["A", "E", "K", "J"] {
            let rooted = analyze_from(&graph, start).expect("start node exists");

            let mut articulations = rooted.articulations.clone();
            articulations.sort();
            assert_eq!(articulations, vec!["C", "E", "F", "K"]);

            let mut bridges: Vec<_> = rooted.bridges.iter().map(normalized).collect();
            bridges.sort();
            let mut expected: Vec<_> = whole.bridges.iter().map(normalized).collect();
            expected.sort();
            assert_eq!(bridges, expected);
        }
    }

    #[test]
    fn demo_analysis_is_repeatable() {
        let graph = demo_graph();

        assert_eq!(analyze(&graph), analyze(&graph));
    }
}
