//! The unit table: the process-wide mapping between exponents and suffix
//! symbols.
//!
//! The table is built once on first access and is read-only afterward. It
//! holds four layers of symbols, added in priority order (the first entry for
//! a key wins, later duplicates are ignored):
//!
//! 1. the fixed symbols `K` (10^3), `M` (10^6), `B` (10^9), `T` (10^12);
//! 2. one-letter lowercase codes `a`, `c`, `d`, ..., `z` at exponents 15, 18,
//!    ..., 78 — the letters `b`, `k`, `m` and `t` are left out so the fixed
//!    symbols stay unambiguous under case folding;
//! 3. two-letter codes `AA` through `ZZ` at exponents `15 + 3 * i` in
//!    lexicographic order, up to `ZZ` = 10^2040. Codes below `AW` share their
//!    exponent with a one-letter code and act as parse aliases only.

use crate::defs::Exponent;
use itertools::iproduct;
use lazy_static::lazy_static;
use std::collections::HashMap;

const SINGLE_LETTERS: [char; 22] = [
    'a', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'l', 'n', 'o', 'p', 'q', 'r', 's', 'u', 'v',
    'w', 'x', 'y', 'z',
];

struct UnitTable {
    symbols: HashMap<Exponent, String>,
    exponents: HashMap<String, Exponent>,
    sorted: Vec<Exponent>,
    max: Exponent,
}

impl UnitTable {
    fn build() -> Self {
        let mut table = UnitTable {
            symbols: HashMap::new(),
            exponents: HashMap::new(),
            sorted: Vec::new(),
            max: 0,
        };

        table.add(3, "K".to_owned());
        table.add(6, "M".to_owned());
        table.add(9, "B".to_owned());
        table.add(12, "T".to_owned());

        for (i, letter) in SINGLE_LETTERS.iter().enumerate() {
            table.add(15 + 3 * i as Exponent, letter.to_string());
        }

        for (i, (first, second)) in iproduct!('A'..='Z', 'A'..='Z').enumerate() {
            let mut symbol = String::with_capacity(2);
            symbol.push(first);
            symbol.push(second);
            table.add(15 + 3 * i as Exponent, symbol);
        }

        table.sorted = table.symbols.keys().copied().collect();
        table.sorted.sort_unstable();
        table.max = table.sorted.last().copied().unwrap_or(0);

        table
    }

    // First entry for a key wins, later duplicates are ignored.
    fn add(&mut self, exponent: Exponent, symbol: String) {
        self.symbols.entry(exponent).or_insert_with(|| symbol.clone());
        self.exponents.entry(symbol).or_insert(exponent);
    }
}

lazy_static! {
    static ref UNITS: UnitTable = UnitTable::build();
}

/// Returns the display symbol for `exponent`, if one is defined.
pub fn symbol_for(exponent: Exponent) -> Option<&'static str> {
    UNITS.symbols.get(&exponent).map(|s| s.as_str())
}

/// Resolves a unit symbol to its exponent.
///
/// Lookup is case-insensitive: the exact spelling is tried first, then the
/// ASCII upper case form, then the lower case form. Unknown symbols yield
/// `None`.
pub fn exponent_for(symbol: &str) -> Option<Exponent> {
    UNITS
        .exponents
        .get(symbol)
        .or_else(|| UNITS.exponents.get(&symbol.to_ascii_uppercase()))
        .or_else(|| UNITS.exponents.get(&symbol.to_ascii_lowercase()))
        .copied()
}

/// All defined exponents in ascending order.
pub fn sorted_exponents() -> &'static [Exponent] {
    &UNITS.sorted
}

/// The largest defined exponent (the exponent of `ZZ`).
pub fn max_exponent() -> Exponent {
    UNITS.max
}

/// Picks the display exponent for a value of the given scale.
///
/// Scales at or above [max_exponent] clamp to it; otherwise the largest
/// defined exponent not above `scale` is chosen. Scales below the smallest
/// defined exponent keep exponent 0 (no suffix) — except negative scales,
/// which fall back to the smallest defined exponent at or above them.
pub fn best_display_exponent(scale: Exponent) -> Exponent {
    let table = sorted_exponents();

    if scale >= max_exponent() {
        return max_exponent();
    }

    let below = table.partition_point(|&e| e <= scale);
    if below > 0 {
        table[below - 1]
    } else if scale < 0 {
        table[0]
    } else {
        0
    }
}
