//! ScaledNumber formatting.

use crate::defs::EPSILON;
use crate::num::ScaledNumber;
use crate::units;
use core::fmt::Display;
use core::fmt::Formatter;

impl ScaledNumber {
    /// Formats the number with a fixed count of fractional digits, using the
    /// best display unit for its magnitude: `1230.format(2)` is `"1.23K"`.
    /// With `decimals == 0` the display value is rendered as a plain integer.
    /// Canonical zero formats as `"0"` regardless of `decimals`.
    pub fn format(&self, decimals: usize) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }

        let (display, best) = self.display_value();
        let suffix = units::symbol_for(best).unwrap_or("");

        format!("{:.*}{}", decimals, display, suffix)
    }

    // Default rendering: integral display values take no decimal point,
    // anything else gets two fractional digits.
    fn write_str(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let (display, best) = self.display_value();
        let suffix = units::symbol_for(best).unwrap_or("");
        let decimals = if (display - display.round()).abs() < EPSILON { 0 } else { 2 };

        write!(f, "{:.*}{}", decimals, display, suffix)
    }
}

impl Display for ScaledNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.write_str(f)
    }
}
