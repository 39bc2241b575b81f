//! Well-known patterns, with cell offsets relative to their top-left corner.

/// A named arrangement of live cells.
#[derive(Debug, PartialEq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BEEHIVE: Pattern = Pattern {
    name: "Beehive",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

/// Travels one cell down and one cell right every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BEEHIVE, BLINKER, TOAD, BEACON, GLIDER];

/// Looks up a pattern by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_finding_a_pattern_the_lookup_ignores_case() {
        assert_eq!(find("glider"), Some(&GLIDER));
        assert_eq!(find("BLINKER"), Some(&BLINKER));
        assert_eq!(find("Gosper"), None);
    }

    #[test]
    fn when_listing_patterns_every_name_is_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            for b in &PATTERNS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
