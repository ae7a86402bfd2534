//! Structural rules for new connections.
//!
//! Rules live in one ordered table; the first match wins. Cycles are legal,
//! so there is no reachability check.

use tracing::debug;

use crate::model::{Connection, Edge, Node, NodeKind};
use crate::ConnectionError;

struct Candidate<'a> {
    source: Option<&'a str>,
    target: Option<&'a str>,
    nodes: &'a [Node],
    edges: &'a [Edge],
}

impl Candidate<'_> {
    fn kind_of(&self, id: Option<&str>) -> Option<NodeKind> {
        let id = id?;
        self.nodes.iter().find(|n| n.id == id).map(|n| n.kind)
    }
}

type Rule = fn(&Candidate<'_>) -> bool;

fn missing_endpoint(c: &Candidate<'_>) -> bool {
    c.source.is_none() || c.target.is_none()
}

fn self_loop(c: &Candidate<'_>) -> bool {
    c.source == c.target
}

fn into_capture(c: &Candidate<'_>) -> bool {
    c.kind_of(c.target) == Some(NodeKind::Capture)
}

fn out_of_termination(c: &Candidate<'_>) -> bool {
    c.kind_of(c.source) == Some(NodeKind::Termination)
}

// Only the exact (source, target) pair counts; the reverse edge is distinct.
fn already_connected(c: &Candidate<'_>) -> bool {
    c.edges
        .iter()
        .any(|e| Some(e.source.as_str()) == c.source && Some(e.target.as_str()) == c.target)
}

const RULES: &[(Rule, ConnectionError)] = &[
    (missing_endpoint, ConnectionError::MissingEndpoint),
    (self_loop, ConnectionError::SelfLoop),
    (into_capture, ConnectionError::CaptureTarget),
    (out_of_termination, ConnectionError::TerminationSource),
    (already_connected, ConnectionError::Duplicate),
];

pub fn get_connection_error(
    connection: &Connection,
    nodes: &[Node],
    edges: &[Edge],
) -> Option<ConnectionError> {
    let candidate = Candidate {
        source: present(&connection.source),
        target: present(&connection.target),
        nodes,
        edges,
    };
    let error = RULES
        .iter()
        .find(|(applies, _)| applies(&candidate))
        .map(|(_, error)| *error);
    if let Some(e) = error {
        debug!(source = ?candidate.source, target = ?candidate.target, reason = %e, "connection rejected");
    }
    error
}

fn present(id: &Option<String>) -> Option<&str> {
    id.as_deref().filter(|s| !s.is_empty())
}

pub fn is_valid_connection(connection: &Connection, nodes: &[Node], edges: &[Edge]) -> bool {
    get_connection_error(connection, nodes, edges).is_none()
}
