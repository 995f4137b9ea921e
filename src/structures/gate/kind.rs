//! The kinds of gate.

/// The kinds of gate equation which may be written.
///
/// The kind of a gate fixes the number of inputs the gate takes, and with this the clauses emitted for the gate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GateKind {
    /// The conjunction of two inputs.
    And,

    /// The disjunction of two inputs.
    Or,

    /// The negation of a single input.
    Not,

    /// The exclusive disjunction of two inputs.
    Xor,

    /// The equivalence of two inputs.
    Xnor,

    /// The joint denial of two inputs.
    Nor,

    /// The conditional from the first input to the second.
    Implication,

    /// The constant true, with no inputs.
    True,
}

impl GateKind {
    /// The number of inputs a gate of the kind takes.
    pub fn arity(self) -> usize {
        match self {
            Self::True => 0,
            Self::Not => 1,
            _ => 2,
        }
    }

    /// The glyph of the kind, as used in equation listings.
    ///
    /// Binary glyphs are written between the inputs of an equation, `¬` before the input of a negation, and `⊤` stands alone.
    pub fn symbol(self) -> char {
        match self {
            Self::And => '∧',
            Self::Or => '∨',
            Self::Not => '¬',
            Self::Xor => '⊕',
            Self::Xnor => '↔',
            Self::Nor => '↓',
            Self::Implication => '→',
            Self::True => '⊤',
        }
    }

    /// The kind named by a keyword, if any, matched without regard to case.
    ///
    /// ```rust
    /// # use tseytin::structures::gate::GateKind;
    /// assert_eq!(GateKind::from_keyword("XOR"), Some(GateKind::Xor));
    /// assert_eq!(GateKind::from_keyword("implication"), Some(GateKind::Implication));
    /// assert_eq!(GateKind::from_keyword("NAND"), None);
    /// ```
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "XOR" => Some(Self::Xor),
            "XNOR" => Some(Self::Xnor),
            "NOR" => Some(Self::Nor),
            "IMPLICATION" => Some(Self::Implication),
            "TRUE" => Some(Self::True),
            _ => None,
        }
    }
}
