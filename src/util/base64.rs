// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! Standard alphabet, `=` padded

use zeroize::Zeroizing;

pub fn encode<T>(input: T) -> Zeroizing<String>
where
    T: AsRef<[u8]>,
{
    Zeroizing::new(base64::encode(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_alphabet() {
        assert_eq!(encode([0xfb, 0xff, 0xbf]).as_str(), "+/+/");
        assert_eq!(encode("foobar").as_str(), "Zm9vYmFy");
    }

    #[test]
    fn test_padding() {
        assert_eq!(encode([0u8; 16]).as_str(), "AAAAAAAAAAAAAAAAAAAAAA==");
        assert_eq!(encode([0u8; 32]).len(), 44);
    }
}
