use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedKind {
    SelfLoop,
    DuplicateEdge,
    // edge is only listed by one of its endpoints
    Asymmetric,
}

impl Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedKind::SelfLoop => write!(f, "self-loop"),
            MalformedKind::DuplicateEdge => write!(f, "duplicate edge"),
            MalformedKind::Asymmetric => write!(f, "asymmetric edge"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MstError {
    EmptyGraph,
    UnknownStart(String),
    Disconnected {
        reached: usize,
        total: usize,
    },
    Malformed {
        kind: MalformedKind,
        from: String,
        to: String,
    },
}

impl Display for MstError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MstError::EmptyGraph => write!(f, "graph has no nodes"),
            MstError::UnknownStart(node) => write!(f, "start node {} is not in the graph", node),
            MstError::Disconnected { reached, total } => write!(
                f,
                "graph is not connected: reached {} of {} nodes",
                reached, total
            ),
            MstError::Malformed { kind, from, to } => {
                write!(f, "malformed graph: {} {} - {}", kind, from, to)
            }
        }
    }
}

impl std::error::Error for MstError {}
