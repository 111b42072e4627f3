/*!
Targets used with the [log] macros throughout the solver.

No logger is installed by the library itself.
*/

pub mod targets {
    /// The main search loop, see [dpll](crate::dpll)
    pub const SEARCH: &str = "search";

    /// Unit clause propagation
    pub const PROPAGATION: &str = "propagation";

    /// Pure literal elimination
    pub const PURE_LITERAL: &str = "pure_literal";

    /// Conflict resolution and pruning of the decision tree
    pub const BACKTRACK: &str = "backtrack";

    /// Model extraction
    pub const MODEL: &str = "model";
}
