/*!
Miscellaneous items related to [logging](log).

Calls to the [log] macros are made when building gate lists and when transforming gates to clauses.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For details on obtaining one, see [log].
*/

/// Targets to be used within a [log] macro.
pub mod targets {
    /// Logs related to [transforming gates to clauses](crate::procedures).
    pub const TRANSFORM: &str = "transform";

    /// Logs related to [building gate lists from text](crate::builder).
    pub const BUILD: &str = "build";
}
