use zeroize::Zeroize;

/// A measured bit sequence, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bits {
    value: u64,
    width: u32,
}

impl Bits {
    /// Width is capped at 64; bits above `width` are masked off.
    pub fn new(value: u64, width: u32) -> Self {
        let width = width.min(64);
        let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
        Bits {
            value: value & mask,
            width,
        }
    }

    /// Collect measurement outcomes, first outcome as the most significant bit.
    pub fn from_msb_first<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        let mut value = 0u64;
        let mut width = 0u32;
        for bit in bits.into_iter().take(64) {
            value = (value << 1) | bit as u64;
            width += 1;
        }
        Bits { value, width }
    }

    /// The sequence read as an unsigned integer in `[0, 2^width)`.
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }
}

impl Zeroize for Bits {
    fn zeroize(&mut self) {
        self.value.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb_first_ordering() {
        let bits = Bits::from_msb_first([true, false, false, false, true, false, true]);
        assert_eq!(bits.width(), 7);
        assert_eq!(bits.value(), 0b1000101);
        assert_eq!(Bits::from_msb_first([false, false, true]), Bits::new(1, 3));
    }

    #[test]
    fn new_masks_excess_bits() {
        assert_eq!(Bits::new(0xff, 4).value(), 0x0f);
        assert_eq!(Bits::new(u64::MAX, 64).value(), u64::MAX);
        assert_eq!(Bits::new(1, 100).width(), 64);
    }

    #[test]
    fn zeroize_clears_value() {
        let mut bits = Bits::new(0b101, 3);
        bits.zeroize();
        assert_eq!(bits.value(), 0);
        assert_eq!(bits.width(), 3);
    }
}
