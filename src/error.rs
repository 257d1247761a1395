/// Everything that can go wrong in the rules engine or at its edges.
///
/// The first three are refusals a driver can recover from; the rest
/// are fail-fast content problems or I/O wrappers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Guess submitted with no class selected. Round state is unchanged.
    #[error("no class selected")]
    NoSelection,

    /// Guess submitted after the round settled. The terminal state
    /// stays frozen.
    #[error("round already settled")]
    RoundSettled,

    /// Guess submitted before any round was dealt.
    #[error("no round dealt")]
    NoRound,

    /// An actor without clues cannot be played. Caught at load time.
    #[error("actor {actor} has an empty clue pool")]
    EmptyCluePool { actor: String },

    /// A catalog without actors cannot deal a round. Caught at load time.
    #[error("actor catalog is empty")]
    EmptyCatalog,

    /// Content referenced a class code outside the catalog.
    #[error("unknown class code {code}")]
    UnknownClass { code: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
