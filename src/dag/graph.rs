// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, warn};

use crate::dag::layout::resolve_direction;
use crate::dag::node::{GraphEdge, GraphNode, JobSpec};
use crate::types::{NodeId, NodeStatus};

/// Node and edge set for one workflow run.
///
/// Built once from the host's job list. Nodes keep their input order; edges
/// are resolved by depth and de-duplicated, so a pair declared from both
/// sides yields a single edge.
#[derive(Debug, Clone, Default)]
pub struct DagGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<NodeId, usize>,
    edges: Vec<GraphEdge>,
    /// Edge indices keyed by their `from` endpoint.
    outgoing: HashMap<NodeId, Vec<usize>>,
}

impl DagGraph {
    /// Build the graph from the host's job list.
    ///
    /// Data problems never fail the build:
    /// - entries without an id or a finite position are reported and skipped
    /// - repeated ids keep the first occurrence
    /// - successors naming unknown ids (or the node itself) are reported and
    ///   their edge is dropped
    /// - a cycle in the declared successor relation is reported
    pub fn from_jobs(jobs: &[JobSpec], edge_color: &str) -> Self {
        let mut graph = DagGraph::default();

        for (position, job) in jobs.iter().enumerate() {
            let Some(id) = job.id.clone() else {
                warn!(position, "job entry without an id; excluding from canvas");
                continue;
            };

            let raw_position = match job.raw_position {
                Some(p) if p.is_finite() => p,
                Some(p) => {
                    warn!(node = %id, x = p.x, y = p.y, "non-finite position; excluding from canvas");
                    continue;
                }
                None => {
                    warn!(node = %id, "job entry without a position; excluding from canvas");
                    continue;
                }
            };

            if graph.index.contains_key(&id) {
                warn!(node = %id, position, "duplicate node id; keeping first occurrence");
                continue;
            }

            let label = job
                .label
                .clone()
                .unwrap_or_else(|| (position + 1).to_string());

            graph.index.insert(id.clone(), graph.nodes.len());
            graph.nodes.push(GraphNode {
                id,
                label,
                raw_position,
                canvas_position: raw_position,
                depth: job.depth,
                attributes: job.attributes.clone(),
                status: NodeStatus::Pending,
                successor_ids: job.successor_ids.clone(),
            });
        }

        graph.link_successors(edge_color);
        graph.report_declared_cycles();

        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "built workflow graph"
        );

        graph
    }

    /// Resolve every declared successor into a directed edge.
    fn link_successors(&mut self, edge_color: &str) {
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();

        for i in 0..self.nodes.len() {
            let declared = std::mem::take(&mut self.nodes[i].successor_ids);
            let mut kept = Vec::with_capacity(declared.len());

            for succ in declared {
                let node = &self.nodes[i];

                let Some(&j) = self.index.get(&succ) else {
                    warn!(node = %node.id, successor = %succ, "unknown successor; dropping edge");
                    continue;
                };
                if j == i {
                    warn!(node = %node.id, "node lists itself as successor; dropping edge");
                    continue;
                }

                let other = &self.nodes[j];
                let (from, to) = resolve_direction(
                    (node.id.as_str(), node.depth),
                    (other.id.as_str(), other.depth),
                );
                let key = (from.to_string(), to.to_string());

                if seen.insert(key.clone()) {
                    let edge_idx = self.edges.len();
                    self.outgoing.entry(key.0.clone()).or_default().push(edge_idx);
                    self.edges.push(GraphEdge {
                        from: key.0,
                        to: key.1,
                        color: edge_color.to_string(),
                    });
                }
                kept.push(succ);
            }

            self.nodes[i].successor_ids = kept;
        }
    }

    /// Warn if the declared successor relation is not acyclic.
    ///
    /// Resolved edges follow depth order and are acyclic by construction; a
    /// cycle here points at inconsistent upstream data.
    fn report_declared_cycles(&self) {
        let mut declared: DiGraphMap<&str, ()> = DiGraphMap::new();

        for node in &self.nodes {
            declared.add_node(node.id.as_str());
            for succ in &node.successor_ids {
                declared.add_edge(node.id.as_str(), succ.as_str(), ());
            }
        }

        if let Err(cycle) = toposort(&declared, None) {
            warn!(
                node = %cycle.node_id(),
                "declared successors contain a cycle; edges are oriented by depth"
            );
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut GraphNode> {
        self.nodes.iter_mut()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.nodes[i]),
            None => None,
        }
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&GraphEdge> {
        self.outgoing_edges(from).find(|e| e.to == to)
    }

    /// Edges whose resolved source is `id`.
    pub fn outgoing_edges(&self, id: &str) -> impl Iterator<Item = &GraphEdge> {
        self.outgoing
            .get(id)
            .map(|idxs| idxs.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&i| &self.edges[i])
    }

    /// Recolor every edge whose source is `id`. Returns the edges whose color
    /// actually changed.
    pub fn recolor_outgoing(&mut self, id: &str, color: &str) -> Vec<GraphEdge> {
        let Some(idxs) = self.outgoing.get(id) else {
            return Vec::new();
        };

        let mut changed = Vec::new();
        for &i in idxs {
            let edge = &mut self.edges[i];
            if edge.color != color {
                edge.color = color.to_string();
                changed.push(edge.clone());
            }
        }
        changed
    }
}
