/*!
(The representation of) variables.

A variable is identified with its name, and so is represented as a [String].
No registry of variables is kept: a gate or clause mentions whatever names it was built with, and two occurrences of a name are occurrences of the same variable.

As clause renderings are whitespace-separated lines of names, prefixed with `-` under negation and terminated by `0`, not every string works as a name.
[writable] picks out those which do.
*/

/// The variable type.
pub type Variable = String;

/// Whether a name may appear in a clause rendering without corrupting the line it appears on.
///
/// A writable name is non-empty, contains no whitespace, does not begin with `-`, and is not `0`.
///
/// ```rust
/// # use tseytin::structures::variable::writable;
/// assert!(writable("x1"));
/// assert!(writable("c_out"));
///
/// assert!(!writable(""));
/// assert!(!writable("-x1"));
/// assert!(!writable("x 1"));
/// assert!(!writable("0"));
/// ```
pub fn writable(name: &str) -> bool {
    !name.is_empty()
        && name != "0"
        && !name.starts_with('-')
        && !name.chars().any(char::is_whitespace)
}
