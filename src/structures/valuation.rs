/*!
Valuations, aka. (partial) functions from variables to truth values.

The canonical representation of a valuation is a map from variables to booleans, with a variable absent from the map having no value.
A valuation on which every variable of interest has a value is 'full', and 'partial' otherwise.

```rust
# use tseytin::structures::valuation::{CValuation, Valuation};
let valuation = CValuation::from([("x1".to_string(), true), ("x2".to_string(), false)]);

assert_eq!(valuation.value_of("x1"), Some(true));
assert_eq!(valuation.value_of("x2"), Some(false));
assert_eq!(valuation.value_of("x3"), None);
```
*/

use std::collections::HashMap;

use crate::structures::variable::Variable;

/// The valuation trait.
pub trait Valuation {
    /// The value of the given variable on the valuation, if any.
    fn value_of(&self, variable: &str) -> Option<bool>;
}

/// The canonical representation of a valuation.
pub type CValuation = HashMap<Variable, bool>;

impl Valuation for CValuation {
    fn value_of(&self, variable: &str) -> Option<bool> {
        self.get(variable).copied()
    }
}
