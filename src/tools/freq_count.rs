/// Returns a frequency count of the input data. One bucket per possible byte value.
pub fn freqs(data: &[u8]) -> Vec<u64> {
    let mut freqs = vec![0_u64; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn freq_count_test() {
        let counts = freqs(b"abracadabra");
        assert_eq!(counts[b'a' as usize], 5);
        assert_eq!(counts[b'b' as usize], 2);
        assert_eq!(counts[b'r' as usize], 2);
        assert_eq!(counts[b'c' as usize], 1);
        assert_eq!(counts[b'd' as usize], 1);
        assert_eq!(counts.iter().sum::<u64>(), 11);
    }

    #[test]
    fn freq_count_empty_test() {
        assert!(freqs(b"").iter().all(|&c| c == 0));
    }
}
