/// `Op` represents a single column of a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Gap in the database row, i.e. only the query (first) sequence advances (v)
    GapFirst,
    /// Gap in the query row, i.e. only the database (second) sequence advances (^)
    GapSecond,
    /// Identical symbols (=)
    Match,
    /// Substitution (X)
    Mismatch,
}

impl Op {
    /// Returns `true` if the operation is represented by a diagonal movement in the alignment matrix.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Mismatch)
    }

    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// Same column with the roles of the sequences swapped.
    pub fn swapped(&self) -> Self {
        match self {
            Op::GapFirst => Op::GapSecond,
            Op::GapSecond => Op::GapFirst,
            x => *x,
        }
    }

    /// Number of symbols consumed in (query, database).
    pub fn consumes(&self) -> (usize, usize) {
        match self {
            Op::GapFirst => (1, 0),
            Op::GapSecond => (0, 1),
            Op::Match | Op::Mismatch => (1, 1),
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a character into an `Op`.
    /// Returns an error if the character does not represent a valid operation.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
