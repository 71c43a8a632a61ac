use crate::address::{addr_to_u32, u32_to_addr};
use crate::error::IpcalcError;
use std::net::Ipv4Addr;

/// IPv4プレフィックス長の上限
pub const MAX_PREFIX_LEN: u8 = 32;

/// プレフィックス長が 0..=32 に収まっているか確認する。
pub fn check_prefix(prefix_len: u8) -> Result<u8, IpcalcError> {
    if prefix_len > MAX_PREFIX_LEN {
        return Err(IpcalcError::InvalidPrefix(prefix_len as u32));
    }
    Ok(prefix_len)
}

/// 上位 `prefix_len` ビットが 1 の u32 マスク。
/// u32::MAX << 32 はオーバーフローするので /0 は別扱い。
pub(crate) fn netmask_bits(prefix_len: u8) -> Result<u32, IpcalcError> {
    let prefix_len = check_prefix(prefix_len)?;
    if prefix_len == 0 {
        Ok(0)
    } else {
        Ok(u32::MAX << (MAX_PREFIX_LEN - prefix_len))
    }
}

/// プレフィックス長からネットマスクを作る。
///
/// /0 → 0.0.0.0, /32 → 255.255.255.255。範囲外は `InvalidPrefix`。
pub fn prefix_to_netmask(prefix_len: u8) -> Result<Ipv4Addr, IpcalcError> {
    netmask_bits(prefix_len).map(u32_to_addr)
}

/// プレフィックス長からワイルドカードマスク (ネットマスクのビット反転) を作る。
pub fn prefix_to_wildcard(prefix_len: u8) -> Result<Ipv4Addr, IpcalcError> {
    netmask_bits(prefix_len).map(|mask| u32_to_addr(!mask))
}

/// ネットマスク中の 1 ビットを数える。
///
/// ビットの並びが連続しているかは検証しない。
/// 255.0.255.0 のような不連続マスクでも単純に 16 を返す。
pub fn netmask_to_bits(mask: Ipv4Addr) -> u8 {
    addr_to_u32(mask.octets()).count_ones() as u8
}

/// ドット区切りのネットマスク文字列をパースしてビット数を返す。
pub fn netmask_str_to_bits(mask: &str) -> Result<u8, IpcalcError> {
    let mask = mask.parse::<Ipv4Addr>()?;
    Ok(netmask_to_bits(mask))
}
