//! IPv4アドレスの 4オクテット表現と u32 (ネットワークバイトオーダー) の相互変換。
use std::net::Ipv4Addr;

/// 4オクテットをビッグエンディアンの u32 として解釈する。
pub fn addr_to_u32(octets: [u8; 4]) -> u32 {
    u32::from_be_bytes(octets)
}

/// u32 をビッグエンディアンの 4オクテットへ書き戻す。
pub fn u32_to_octets(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// u32 から `Ipv4Addr` を組み立てる。
pub fn u32_to_addr(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(u32_to_octets(value))
}
