use log::{debug, trace};

use super::config::Lz77Config;
use super::token::{
    JumpType, Token, MAX_LONG_LENGTH, MAX_LONG_OFFSET, MAX_SHORT_LENGTH, MAX_SHORT_OFFSET,
    TOKEN_SIZE,
};
use crate::error::{Error, Result};

/// Compress the buffer in place with a greedy sliding-window parse and return
/// the new active length. The vec is truncated to that length; the folded-out
/// bytes are gone for good. An empty buffer is an error.
///
/// The engine makes a single pass with no backtracking: at each window start it
/// takes the first repeated run it sees, never searching for a better offset
/// once a candidate run has begun.
pub fn compress_in_place(buf: &mut Vec<u8>, config: &Lz77Config) -> Result<usize> {
    if buf.is_empty() {
        return Err(Error::EmptyInput);
    }

    // A token never pays for itself below 4 matched bytes, whatever the config
    // asks for.
    let min_match = config.minimum_match_length.max(TOKEN_SIZE);

    let mut active_length = buf.len();
    let mut window_start = 0;
    let mut window_end = active_length.min(config.window_size);
    let mut tokens = 0_usize;

    while window_start < window_end {
        let mut match_offset = 0;
        let mut match_length = 0;

        for cursor in window_start + 1..window_end {
            // A run at a long offset cannot extend past what a LongJump length
            // field holds, so stop collecting here.
            if match_length == MAX_LONG_LENGTH && match_offset >= MAX_SHORT_OFFSET {
                break;
            }

            if buf[window_start + match_length] == buf[cursor] {
                if match_length == 0 {
                    let offset = cursor - window_start;
                    // Offsets only grow with the cursor, so past the 12 bit
                    // limit nothing left in this window is encodable.
                    if offset > MAX_LONG_OFFSET {
                        break;
                    }
                    match_offset = offset;
                }
                if match_length == MAX_SHORT_LENGTH {
                    break;
                }
                match_length += 1;
            } else if match_length > 0 {
                // Greedy parse - the first run found is the only run considered.
                break;
            }
        }

        if match_length > min_match {
            let jump = if match_offset < MAX_SHORT_OFFSET {
                JumpType::ShortJump
            } else {
                JumpType::LongJump
            };
            let token = Token {
                jump,
                offset: match_offset,
                length: match_length,
            };

            // Overwrite the start of the repeated run with the token...
            let write_offset = window_start + match_offset;
            buf[write_offset..write_offset + TOKEN_SIZE].copy_from_slice(&token.encode());

            // ...then slide the tail left so it lands right behind the token.
            // The ranges may overlap; copy_within handles that.
            let tail_start = write_offset + match_length;
            if tail_start < active_length {
                buf.copy_within(tail_start..active_length, write_offset + TOKEN_SIZE);
            }
            active_length -= match_length - TOKEN_SIZE;
            window_end = active_length;
            tokens += 1;
            trace!(
                "{:?} at {}: offset {}, length {}, active length now {}",
                jump,
                write_offset,
                match_offset,
                match_length,
                active_length
            );
        } else {
            // Nothing worth encoding here - slide the window forward one byte.
            window_start += 1;
            window_end = (window_end + 1).min(active_length);
        }
    }

    debug!(
        "LZ77 pass done: {} -> {} bytes, {} tokens",
        buf.len(),
        active_length,
        tokens
    );
    buf.truncate(active_length);
    Ok(active_length)
}

#[cfg(test)]
mod test {
    use super::*;

    fn compress(data: &[u8]) -> Vec<u8> {
        let mut buf = data.to_vec();
        compress_in_place(&mut buf, &Lz77Config::default()).unwrap();
        buf
    }

    #[test]
    fn repeated_char_test() {
        // "aaaaaaaa": one literal 'a', then a ShortJump covering the other seven.
        let out = compress(b"aaaaaaaa");
        assert_eq!(out, vec![b'a', 0, 1, 7]);
        let token = Token::decode([out[1], out[2], out[3]]).unwrap();
        assert_eq!(token.jump, JumpType::ShortJump);
        assert_eq!((token.offset, token.length), (1, 7));
    }

    #[test]
    fn interrupted_match_test() {
        // The second "abcde" matches for 5 bytes and diverges at 'X'; only the
        // matching prefix run gets a token, the 'X' stays literal. The trailing
        // "abcde" then matches against the front of the (shrunken) buffer.
        let out = compress(b"abcdeabcdeXabcde");
        assert_eq!(
            out,
            vec![b'a', b'b', b'c', b'd', b'e', 0, 5, 5, b'X', 0, 9, 5]
        );
    }

    #[test]
    fn no_match_test() {
        // No run longer than the minimum anywhere: length and bytes untouched.
        let data = b"abcdefgh".to_vec();
        let mut buf = data.clone();
        let len = compress_in_place(&mut buf, &Lz77Config::default()).unwrap();
        assert_eq!(len, data.len());
        assert_eq!(buf, data);
    }

    #[test]
    fn short_runs_untouched_test() {
        // Runs of length <= 3 are not worth a 3 byte token (strict greater-than).
        let data = b"aabbaabb".to_vec();
        let mut buf = data.clone();
        let len = compress_in_place(&mut buf, &Lz77Config::default()).unwrap();
        assert_eq!(len, data.len());
        assert_eq!(buf, data);
    }

    #[test]
    fn max_length_cap_test() {
        // A 300 byte run: the first token is capped at length 255, a second
        // token covers the remainder back-to-back.
        let out = compress(&[b'x'; 300]);
        assert_eq!(out, vec![b'x', 0, 1, 255, b'x', 0, 1, 43]);
    }

    #[test]
    fn long_jump_test() {
        // Five marker bytes, 250 distinct filler bytes, then the markers again:
        // the repeat sits at offset 255, which only a LongJump can encode.
        let data: Vec<u8> = (250..255_u16)
            .chain(0..250)
            .chain(250..255)
            .map(|v| v as u8)
            .collect();
        assert_eq!(data.len(), 260);

        let mut buf = data.clone();
        let len = compress_in_place(&mut buf, &Lz77Config::default()).unwrap();
        assert_eq!(len, 258);
        assert_eq!(&buf[..255], &data[..255]);

        let token = Token::decode([buf[255], buf[256], buf[257]]).unwrap();
        assert_eq!(token.jump, JumpType::LongJump);
        assert_eq!((token.offset, token.length), (255, 5));
    }

    #[test]
    fn non_expansion_test() {
        // Every emitted token shrinks the buffer, so output never exceeds input.
        for data in [
            &b"aaaaaaaa"[..],
            b"abcdeabcdeXabcde",
            b"abcdefgh",
            b"to be or not to be, that is the question",
        ] {
            let mut buf = data.to_vec();
            let len = compress_in_place(&mut buf, &Lz77Config::default()).unwrap();
            assert!(len <= data.len());
            assert_eq!(buf.len(), len);
        }
    }

    #[test]
    fn single_byte_test() {
        // One byte is valid input; the window is empty so nothing happens.
        let mut buf = vec![42];
        assert_eq!(compress_in_place(&mut buf, &Lz77Config::default()).unwrap(), 1);
        assert_eq!(buf, vec![42]);
    }

    #[test]
    fn empty_buffer_test() {
        let mut buf = vec![];
        assert!(matches!(
            compress_in_place(&mut buf, &Lz77Config::default()),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn low_minimum_is_clamped_test() {
        // A minimum below the token size would let a length-3 token replace
        // 3 bytes with 3 bytes and loop forever; the engine clamps it.
        let config = Lz77Config {
            minimum_match_length: 0,
            ..Lz77Config::default()
        };
        let mut buf = b"abcabc".to_vec();
        let len = compress_in_place(&mut buf, &config).unwrap();
        assert_eq!(len, 6);
        assert_eq!(buf, b"abcabc");
    }
}
