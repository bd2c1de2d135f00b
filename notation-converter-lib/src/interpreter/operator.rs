use phf::phf_map;
use std::fmt;
use std::fmt::Formatter;

/// Which side equal-precedence operators group towards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// A binary infix operator and the rules for binding it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    pub symbol: &'static str,
    /// Higher binds tighter.
    pub precedence: u8,
    pub associativity: Associativity,
}

/// Every operator the converter understands, keyed by its own symbol.
pub static OPERATOR_TABLE: phf::Map<&'static str, Operator> = phf_map! {
    "<" => Operator {
        symbol: "<",
        precedence: 3,
        associativity: Associativity::Left,
    },
    ">" => Operator {
        symbol: ">",
        precedence: 3,
        associativity: Associativity::Left,
    },
    "|" => Operator {
        symbol: "|",
        precedence: 1,
        associativity: Associativity::Left,
    },
    "&" => Operator {
        symbol: "&",
        precedence: 1,
        associativity: Associativity::Left,
    },
    "*" => Operator {
        symbol: "*",
        precedence: 4,
        associativity: Associativity::Left,
    },
    "/" => Operator {
        symbol: "/",
        precedence: 4,
        associativity: Associativity::Left,
    },
    "+" => Operator {
        symbol: "+",
        precedence: 3,
        associativity: Associativity::Left,
    },
    "-" => Operator {
        symbol: "-",
        precedence: 3,
        associativity: Associativity::Left,
    },
    "^" => Operator {
        symbol: "^",
        precedence: 5,
        associativity: Associativity::Right,
    },
    "=" => Operator {
        symbol: "=",
        precedence: 2,
        associativity: Associativity::Left,
    },
};

/// Finds the descriptor of the operator written as `symbol`, if there is one.
pub fn lookup(symbol: &str) -> Option<&'static Operator> {
    OPERATOR_TABLE.get(symbol)
}

pub fn is_operator(symbol: &str) -> bool {
    OPERATOR_TABLE.contains_key(symbol)
}

impl Operator {
    /// Whether `top`, sitting on the operator stack, has to be emitted before `self` is pushed.
    ///
    /// Left-associative operators give way to anything of equal or higher precedence,
    /// right-associative ones only to strictly higher precedence so that they nest.
    pub fn yields_to(&self, top: &Operator) -> bool {
        match self.associativity {
            Associativity::Left => self.precedence_le(top),
            Associativity::Right => self.precedence_lt(top),
        }
    }

    pub(crate) fn precedence_lt(&self, other: &Self) -> bool {
        self.precedence.lt(&other.precedence)
    }

    pub(crate) fn precedence_le(&self, other: &Self) -> bool {
        self.precedence.le(&other.precedence)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
