use crate::error::IpcalcError;
use crate::netmask::{MAX_PREFIX_LEN, check_prefix};

/// プレフィックス長に対応するブロック内のアドレス総数 (2^(32 - prefix_len))。
/// /0 では 2^32 になるため u64 で返す。
pub fn max_subnets(prefix_len: u8) -> Result<u64, IpcalcError> {
    let prefix_len = check_prefix(prefix_len)?;
    Ok(1u64 << (MAX_PREFIX_LEN - prefix_len))
}

/// 利用可能なホストアドレス数。
///
/// /31 (ポイントツーポイント) と /32 (単一ホスト) は予約アドレスなし、
/// /1〜/30 はネットワークアドレスとブロードキャストアドレスの 2 つを除く。
/// /0 はアドレス空間全体を指すので 2^32 をそのまま返す。
pub fn max_addresses(prefix_len: u8) -> Result<u64, IpcalcError> {
    let total = max_subnets(prefix_len)?;
    match prefix_len {
        0 | 31 | 32 => Ok(total),
        _ => Ok(total - 2),
    }
}
