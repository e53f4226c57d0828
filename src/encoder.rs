//! Signed integer to text encoding into fixed-capacity buffers.
//!
//! Output is ASCII, most significant digit first, followed by a `0` byte
//! terminator. Digits use `0-9` then `a-z`, so any base from 2 to 36 works.
//! On any failure the destination buffer is left exactly as it was.

/// Digit alphabet for bases up to 36.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base.
pub const MAX_BASE: u32 = 36;

/// Longest digit run for an `i32` magnitude (base 2).
const MAX_DIGITS: usize = 32;

/// Text capacity that fits any `i32` in base 10 (`-2147483648` plus terminator).
pub const VALUE_TEXT_CAPACITY: usize = 12;

/// Reasons an integer could not be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Buffer cannot hold one digit and the terminator.
    CapacityTooSmall { capacity: usize },

    /// Base outside 2-36.
    InvalidBase { base: u32 },

    /// Text plus terminator does not fit in the buffer.
    Overflow { required: usize, capacity: usize },
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EncodeError::CapacityTooSmall { capacity } => {
                write!(f, "buffer capacity {} is below the minimum of 2", capacity)
            }
            EncodeError::InvalidBase { base } => {
                write!(f, "base {} is outside {}-{}", base, MIN_BASE, MAX_BASE)
            }
            EncodeError::Overflow { required, capacity } => {
                write!(
                    f,
                    "encoded value needs {} bytes but buffer holds {}",
                    required, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// Encodes `value` in `base` into `buf`, terminated by a `0` byte.
///
/// The capacity is `buf.len()`. Digits are first built least significant
/// first in a local scratch buffer, then copied in order once the total
/// length (`sign + digits + terminator`) is known to fit, so a failed call
/// never writes a partial result.
///
/// # Returns
/// * `Ok(len)` - Number of text bytes written, excluding the terminator
/// * `Err` - Capacity below 2, base outside 2-36, or text does not fit
///
/// # Example
/// ```
/// use bargraph_monitor::encode;
///
/// let mut buf = [0u8; 4];
/// assert_eq!(encode(-42, &mut buf, 10), Ok(3));
/// assert_eq!(&buf, b"-42\0");
/// ```
pub fn encode(value: i32, buf: &mut [u8], base: u32) -> Result<usize, EncodeError> {
    let capacity = buf.len();
    if capacity < 2 {
        return Err(EncodeError::CapacityTooSmall { capacity });
    }
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(EncodeError::InvalidBase { base });
    }

    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();

    let mut scratch = [0u8; MAX_DIGITS];
    let mut digits = 0;
    loop {
        scratch[digits] = DIGITS[(magnitude % base) as usize];
        digits += 1;
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }

    let len = digits + usize::from(negative);
    let required = len + 1;
    if required > capacity {
        return Err(EncodeError::Overflow { required, capacity });
    }

    let mut pos = 0;
    if negative {
        buf[pos] = b'-';
        pos += 1;
    }
    for &digit in scratch[..digits].iter().rev() {
        buf[pos] = digit;
        pos += 1;
    }
    buf[pos] = 0;

    Ok(len)
}

/// Fixed-capacity, zero-terminated text buffer for encoded numbers.
///
/// # Type Parameters
/// * `N` - Capacity in bytes, terminator included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBuffer<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> TextBuffer<N> {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// Encodes `value` in `base`, replacing the current text.
    ///
    /// On error the previous text is kept.
    pub fn encode(&mut self, value: i32, base: u32) -> Result<&str, EncodeError> {
        encode(value, &mut self.bytes, base)?;
        Ok(self.as_str())
    }

    /// Returns the text up to the terminator.
    pub fn as_str(&self) -> &str {
        let end = self.bytes.iter().position(|&b| b == 0).unwrap_or(N);
        // Only ASCII is ever written.
        core::str::from_utf8(&self.bytes[..end]).unwrap_or("")
    }

    /// Returns the raw bytes, terminator and unused tail included.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Total capacity in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for TextBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_single_digit() {
        let mut buf = [0xAAu8; 2];
        assert_eq!(encode(0, &mut buf, 10), Ok(1));
        assert_eq!(&buf, b"0\0");
    }

    #[test]
    fn negative_needs_room_for_sign() {
        let mut buf = [0u8; 4];
        assert_eq!(encode(-42, &mut buf, 10), Ok(3));
        assert_eq!(&buf, b"-42\0");

        let mut short = [0x55u8; 3];
        assert_eq!(
            encode(-42, &mut short, 10),
            Err(EncodeError::Overflow {
                required: 4,
                capacity: 3
            })
        );
        assert_eq!(short, [0x55; 3]);
    }

    #[test]
    fn exact_fit_succeeds() {
        let mut buf = [0u8; 4];
        assert_eq!(encode(999, &mut buf, 10), Ok(3));
        assert_eq!(&buf, b"999\0");

        let mut buf = [0xFFu8; 4];
        assert!(encode(1000, &mut buf, 10).is_err());
        assert_eq!(buf, [0xFF; 4]);
    }

    #[test]
    fn other_bases() {
        let mut buf = [0u8; 16];
        assert_eq!(encode(255, &mut buf, 16), Ok(2));
        assert_eq!(&buf[..3], b"ff\0");

        assert_eq!(encode(5, &mut buf, 2), Ok(3));
        assert_eq!(&buf[..4], b"101\0");

        assert_eq!(encode(-35, &mut buf, 36), Ok(2));
        assert_eq!(&buf[..3], b"-z\0");
    }

    #[test]
    fn extremes_of_i32() {
        let mut buf = [0u8; VALUE_TEXT_CAPACITY];
        assert_eq!(encode(i32::MIN, &mut buf, 10), Ok(11));
        assert_eq!(&buf, b"-2147483648\0");

        let mut bin = [0u8; 34];
        assert_eq!(encode(i32::MIN, &mut bin, 2), Ok(33));
        assert_eq!(bin[0], b'-');
        assert_eq!(bin[1], b'1');
        assert!(bin[2..33].iter().all(|&b| b == b'0'));
        assert_eq!(bin[33], 0);
    }

    #[test]
    fn precondition_errors() {
        let mut tiny = [0x11u8; 1];
        assert_eq!(
            encode(1, &mut tiny, 10),
            Err(EncodeError::CapacityTooSmall { capacity: 1 })
        );
        assert_eq!(tiny, [0x11]);

        let mut buf = [0x22u8; 8];
        assert_eq!(encode(1, &mut buf, 1), Err(EncodeError::InvalidBase { base: 1 }));
        assert_eq!(encode(1, &mut buf, 37), Err(EncodeError::InvalidBase { base: 37 }));
        assert_eq!(buf, [0x22; 8]);
    }

    #[test]
    fn text_buffer_keeps_old_text_on_error() {
        let mut text = TextBuffer::<4>::new();
        assert_eq!(text.as_str(), "");
        assert_eq!(text.encode(123, 10), Ok("123"));
        assert!(text.encode(-123, 10).is_err());
        assert_eq!(text.as_str(), "123");
        assert_eq!(text.capacity(), 4);
    }
}
