//! The 3 byte back-reference tokens the match engine writes into the buffer.
//!
//! ShortJump: `[0][offset 0..8][length 0..8]` - one byte offset, one byte length.
//! LongJump:  `[1][offset 4..12][offset 0..4 << 4 | length 0..4]` - 12 bit
//! offset, 4 bit length. Decoding recovers `offset = b1 << 4 | b2 >> 4` and
//! `length = b2 & 0xF`, so the pack round-trips exactly.

/// Both token forms occupy exactly three bytes in the buffer.
pub const TOKEN_SIZE: usize = 3;

/// Largest offset a ShortJump can carry. Offsets at or above this fall back to
/// a LongJump.
pub const MAX_SHORT_OFFSET: usize = 0xFF;
/// Largest match length a ShortJump can carry.
pub const MAX_SHORT_LENGTH: usize = 0xFF;
/// Largest offset a LongJump can carry (12 bits).
pub const MAX_LONG_OFFSET: usize = 0xFFF;
/// Largest match length a LongJump can carry (4 bits).
pub const MAX_LONG_LENGTH: usize = 0xF;

/// The two token encodings, also the tag byte values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpType {
    ShortJump = 0,
    LongJump = 1,
}

/// A back-reference to an earlier run: the repeated copy starts `offset` bytes
/// past the window start and runs for `length` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub jump: JumpType,
    pub offset: usize,
    pub length: usize,
}

impl Token {
    /// Pack the token into its 3 byte wire form.
    pub fn encode(&self) -> [u8; 3] {
        match self.jump {
            JumpType::ShortJump => [
                JumpType::ShortJump as u8,
                (self.offset & MAX_SHORT_OFFSET) as u8,
                (self.length & MAX_SHORT_LENGTH) as u8,
            ],
            JumpType::LongJump => [
                JumpType::LongJump as u8,
                ((self.offset & MAX_LONG_OFFSET) >> 4) as u8,
                (((self.offset & 0xF) << 4) | (self.length & MAX_LONG_LENGTH)) as u8,
            ],
        }
    }

    /// Unpack a 3 byte wire form token. Returns None for an unknown tag byte.
    pub fn decode(bytes: [u8; 3]) -> Option<Token> {
        match bytes[0] {
            0 => Some(Token {
                jump: JumpType::ShortJump,
                offset: bytes[1] as usize,
                length: bytes[2] as usize,
            }),
            1 => Some(Token {
                jump: JumpType::LongJump,
                offset: (bytes[1] as usize) << 4 | (bytes[2] >> 4) as usize,
                length: (bytes[2] & 0xF) as usize,
            }),
            _ => None,
        }
    }
}
