//! Direction policy for point-to-graph connections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which edges join a merged point and its anchor node in a directed graph.
///
/// Undirected graphs ignore the policy and always get a single edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeDirection {
    /// `point → anchor` and `anchor → point`.
    #[default]
    Both,
    /// `point → anchor` only.
    In,
    /// `anchor → point` only.
    Out,
}

impl MergeDirection {
    /// Policy name as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for MergeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised direction policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown merge direction '{0}' (expected both, in or out)")]
pub struct ParseDirectionError(String);

impl FromStr for MergeDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "both" => Ok(Self::Both),
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Edges to add between a merged `point` and its `anchor`, as
/// `(from, to)` pairs.
pub fn connection_pairs<'a, T: ?Sized>(
    directed: bool,
    direction: MergeDirection,
    point: &'a T,
    anchor: &'a T,
) -> Vec<(&'a T, &'a T)> {
    if !directed {
        return vec![(point, anchor)];
    }
    match direction {
        MergeDirection::Both => vec![(point, anchor), (anchor, point)],
        MergeDirection::In => vec![(point, anchor)],
        MergeDirection::Out => vec![(anchor, point)],
    }
}
