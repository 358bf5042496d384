//! Rule switches and starting layouts

/// Tunable rule behaviour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Require the square a pawn skips on its double step to be empty.
    ///
    /// `true` is standard chess. `false` only checks the destination, so a
    /// pawn may jump over a piece directly in front of it.
    pub double_step_requires_clear_path: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            double_step_requires_clear_path: true,
        }
    }
}

/// Starting position of a new game
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    /// Full 32-piece opening position
    #[default]
    Standard,
    /// Kings on d1/d8 plus a black rook, bishop and knight on a8-c8
    Reduced,
}
