//! The closed set of mesh construction phases.

use std::fmt;
use std::str::FromStr;

use crate::ParsePhaseError;

/// A construction phase of the mesh generation pipeline whose duration is tracked independently.
///
/// The set of phases is closed. Each phase corresponds to exactly one accumulator field of
/// [`PhaseTimers`][crate::PhaseTimers].
///
/// # Examples
///
/// ```
/// use mesh_timers::Phase;
///
/// let phase: Phase = "edge_init".parse().unwrap();
/// assert_eq!(phase, Phase::EdgeInit);
/// assert_eq!(phase.to_string(), "edge_init");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the phase set mirrors the fixed accumulator fields and cannot grow without a breaking change anyway"
)]
pub enum Phase {
    /// Generation of the initial point/seed set.
    Seed,

    /// Initialization of node (vertex) structures.
    NodeInit,

    /// Application of node refinement rules.
    NodeRule,

    /// Initialization of edge structures.
    EdgeInit,

    /// Application of edge refinement rules.
    EdgeRule,

    /// Initialization of face structures.
    FaceInit,

    /// Application of face refinement rules.
    FaceRule,

    /// Initialization of triangle/cell structures.
    TriaInit,

    /// Application of triangle refinement rules.
    TriaRule,
}

impl Phase {
    /// All phases, in the order the pipeline executes them.
    pub const ALL: [Self; 9] = [
        Self::Seed,
        Self::NodeInit,
        Self::NodeRule,
        Self::EdgeInit,
        Self::EdgeRule,
        Self::FaceInit,
        Self::FaceRule,
        Self::TriaInit,
        Self::TriaRule,
    ];

    /// The stable snake-case name of the phase, as used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::NodeInit => "node_init",
            Self::NodeRule => "node_rule",
            Self::EdgeInit => "edge_init",
            Self::EdgeRule => "edge_rule",
            Self::FaceInit => "face_init",
            Self::FaceRule => "face_rule",
            Self::TriaInit => "tria_init",
            Self::TriaRule => "tria_rule",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = ParsePhaseError;

    /// Parses a phase from its name (`edge_init`) or from its accumulator field name
    /// (`edge_init_time`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix("_time").unwrap_or(s);

        Self::ALL
            .into_iter()
            .find(|phase| phase.name() == name)
            .ok_or_else(|| ParsePhaseError::UnknownPhase {
                name: s.to_string(),
            })
    }
}
