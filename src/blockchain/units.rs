//! Wei to ether conversion.

use alloy::primitives::U256;

/// Wei per ether (10^18).
pub const WEI_PER_ETHER: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Fractional digits in one ether.
pub const ETHER_DECIMALS: usize = 18;

/// An exact ether amount, kept as whole ether plus a wei remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ether {
    whole: U256,
    fraction_wei: U256,
}

impl Ether {
    pub fn whole(&self) -> U256 {
        self.whole
    }

    /// Remainder below one ether, in wei (always < 10^18).
    pub fn fraction_wei(&self) -> U256 {
        self.fraction_wei
    }

    /// Back to wei.
    pub fn to_wei(&self) -> U256 {
        self.whole * WEI_PER_ETHER + self.fraction_wei
    }

    pub fn is_zero(&self) -> bool {
        self.whole.is_zero() && self.fraction_wei.is_zero()
    }
}

/// Renders with exactly 18 fractional digits.
impl std::fmt::Display for Ether {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:0>width$}",
            self.whole,
            self.fraction_wei.to_string(),
            width = ETHER_DECIMALS
        )
    }
}

/// Convert a wei amount to ether without rounding.
pub fn to_ether(wei: U256) -> Ether {
    let (whole, fraction_wei) = wei.div_rem(WEI_PER_ETHER);
    Ether {
        whole,
        fraction_wei,
    }
}
