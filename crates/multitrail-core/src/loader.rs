//! Edge-list loader
//!
//! Reads a whitespace-separated token stream into a [`MultiDiGraph`]. A token
//! containing `.` is an edge weight; every other token is an integer vertex.
//! Vertices accumulate into a pending edge group, and each weight closes the
//! group: the first vertex is the source, every later vertex a destination.
//!
//! ```text
//! 1 2 1.5     # edge 1 -> 2 with weight 1.5
//! 1 2 0.5     # parallel edge 1 -> 2
//! 2 3 2.0
//! ```
//!
//! A group holding a single vertex produces a self-loop. Comments are not
//! part of the format; the example above is annotated for reading only.

use crate::config::LoaderConfig;
use crate::error::Result;
use crate::graph::types::{VertexId, Weight};
use crate::graph::MultiDiGraph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// A classified input token
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Vertex(VertexId),
    Weight(Weight),
}

fn classify(token: &str, line: usize) -> Result<Token> {
    if token.contains('.') {
        let value: f64 = match token.parse() {
            Ok(value) => value,
            Err(_) => crate::bail_parse!(line, "invalid weight `{}`", token),
        };
        let weight = Weight::new(value);
        if !weight.is_valid() {
            crate::bail_parse!(line, "weight `{}` must be finite and non-negative", token);
        }
        Ok(Token::Weight(weight))
    } else {
        match token.parse() {
            Ok(vertex) => Ok(Token::Vertex(vertex)),
            Err(_) => crate::bail_parse!(
                line,
                "expected an integer vertex or a decimal weight, found `{}`",
                token
            ),
        }
    }
}

/// Builds a graph from edge-list text
#[derive(Debug, Clone, Default)]
pub struct GraphLoader {
    config: LoaderConfig,
}

/// Loading state: the graph under construction and the open edge group
struct LoadState<'a> {
    config: &'a LoaderConfig,
    graph: MultiDiGraph,
    pending: Vec<VertexId>,
    pending_since: usize,
}

impl LoadState<'_> {
    fn push_vertex(&mut self, vertex: VertexId, line: usize) {
        self.graph.add_vertex(vertex);
        if self.pending.is_empty() {
            self.pending_since = line;
        }
        self.pending.push(vertex);
    }

    fn close_group(&mut self, weight: Weight, line: usize) -> Result<()> {
        let Some((&source, destinations)) = self.pending.split_first() else {
            crate::bail_parse!(line, "weight {} has no endpoints before it", weight);
        };
        if !self.config.fan_out && destinations.len() > 1 {
            crate::bail_parse!(
                line,
                "edge group starting on line {} has {} endpoints but fan-out is disabled",
                self.pending_since,
                self.pending.len()
            );
        }

        if destinations.is_empty() {
            self.graph.add_edge(source, source, weight)?;
        } else {
            for &destination in destinations {
                self.graph.add_edge(source, destination, weight)?;
            }
        }
        self.pending.clear();
        Ok(())
    }

    fn finish(self, last_line: usize) -> Result<MultiDiGraph> {
        if !self.pending.is_empty() {
            crate::bail_parse!(
                last_line,
                "input ends with {} endpoint(s) from line {} but no weight",
                self.pending.len(),
                self.pending_since
            );
        }
        Ok(self.graph)
    }
}

impl GraphLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a graph from a file
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub fn load_path(&self, path: &Path) -> Result<MultiDiGraph> {
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    /// Load a graph from in-memory text
    pub fn load_str(&self, text: &str) -> Result<MultiDiGraph> {
        self.load_reader(text.as_bytes())
    }

    /// Load a graph from any buffered reader.
    ///
    /// Either the whole input is valid and a graph is returned, or an error is
    /// returned and no graph is produced.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<MultiDiGraph> {
        let start = Instant::now();
        let mut state = LoadState {
            config: &self.config,
            graph: MultiDiGraph::new(),
            pending: Vec::new(),
            pending_since: 0,
        };
        let mut last_line = 0;

        for (index, text) in reader.lines().enumerate() {
            let text = text?;
            let line = index + 1;
            last_line = line;

            for token in text.split_whitespace() {
                match classify(token, line)? {
                    Token::Vertex(vertex) => state.push_vertex(vertex, line),
                    Token::Weight(weight) => state.close_group(weight, line)?,
                }
            }
        }

        let graph = state.finish(last_line)?;
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        crate::trace_time!(start, "load_graph");
        Ok(graph)
    }
}

/// Load a graph from an edge-list file with the default loader settings
pub fn load_from_source(path: impl AsRef<Path>) -> Result<MultiDiGraph> {
    GraphLoader::new().load_path(path.as_ref())
}

/// Load a graph from edge-list text with the default loader settings
pub fn load_from_str(text: &str) -> Result<MultiDiGraph> {
    GraphLoader::new().load_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrailError;
    use crate::graph::types::EdgeKey;

    fn parse_line(err: TrailError) -> usize {
        match err {
            TrailError::Parse { line, .. } => line,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_tokens() {
        assert_eq!(classify("12", 1).unwrap(), Token::Vertex(12));
        assert_eq!(classify("-3", 1).unwrap(), Token::Vertex(-3));
        assert_eq!(classify("1.5", 1).unwrap(), Token::Weight(Weight::new(1.5)));
        assert_eq!(classify("2.", 1).unwrap(), Token::Weight(Weight::new(2.0)));
        assert!(classify("abc", 1).is_err());
        assert!(classify("1.2.3", 1).is_err());
        assert!(classify("-1.0", 1).is_err());
    }

    #[test]
    fn test_pairwise_edges() {
        let graph = load_from_str("1 2 1.5\n1 2 0.5\n2 3 2.0\n").unwrap();
        assert_eq!(graph.vertices(), &[1, 2, 3]);
        assert_eq!(graph.edge_count(), 3);

        let parallel: Vec<(EdgeKey, f64)> = graph
            .edges_between(1, 2)
            .map(|e| (e.key, e.weight.value()))
            .collect();
        assert_eq!(parallel, vec![(EdgeKey::new(0), 1.5), (EdgeKey::new(1), 0.5)]);
    }

    #[test]
    fn test_tokens_may_span_lines_and_blank_lines() {
        let graph = load_from_str("\n1\n\n   2\n1.5   \n\n3 4 2.0").unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges_between(1, 2).count(), 1);
        assert_eq!(graph.edges_between(3, 4).count(), 1);
    }

    #[test]
    fn test_lone_endpoint_makes_self_loop() {
        let graph = load_from_str("1 2 1.5 3 2.0").unwrap();
        assert_eq!(graph.edges_between(1, 2).count(), 1);
        let self_loop: Vec<f64> = graph.edges_between(3, 3).map(|e| e.weight.value()).collect();
        assert_eq!(self_loop, vec![2.0]);
    }

    #[test]
    fn test_fan_out_group() {
        let graph = load_from_str("1 2 3 4 0.5").unwrap();
        assert_eq!(graph.edge_count(), 3);
        for dest in [2, 3, 4] {
            let edge = graph.edges_between(1, dest).next().unwrap();
            assert_eq!(edge.weight, Weight::new(0.5));
        }
        assert!(graph.neighbors_of(2).is_empty());
    }

    #[test]
    fn test_fan_out_disabled() {
        let loader = GraphLoader::with_config(LoaderConfig { fan_out: false });
        assert!(loader.load_str("1 2 0.5").is_ok());
        let err = loader.load_str("1 2 0.5\n1 2 3 0.5").unwrap_err();
        assert_eq!(parse_line(err), 2);
    }

    #[test]
    fn test_weight_without_endpoints() {
        let err = load_from_str("1 2 1.0\n2.0").unwrap_err();
        assert_eq!(parse_line(err), 2);
        assert!(load_from_str("0.5").is_err());
    }

    #[test]
    fn test_invalid_token() {
        let err = load_from_str("1 2 1.0\n2 x 1.0").unwrap_err();
        assert_eq!(parse_line(err), 2);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = load_from_str("1 2 -1.5").unwrap_err();
        assert_eq!(parse_line(err), 1);
    }

    #[test]
    fn test_truncated_input() {
        let err = load_from_str("1 2 1.0\n2 3\n").unwrap_err();
        assert_eq!(parse_line(err), 2);
    }

    #[test]
    fn test_empty_input_gives_empty_graph() {
        let graph = load_from_str("").unwrap();
        assert_eq!(graph.vertex_count(), 0);
        let graph = load_from_str("\n\n  \n").unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_source(dir.path().join("missing.dat")).unwrap_err();
        assert!(matches!(err, TrailError::Io(_)));
    }
}
