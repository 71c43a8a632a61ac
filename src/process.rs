use crate::cidr::{
    Cidr, describe_addr, describe_from_prefix_string, describe_with_netmask, parse_prefix_len,
};
use crate::error::IpcalcError;
use std::net::Ipv4Addr;
use tracing::info;

/// CLIの ADDRESS / MASK 引数の組をサブネット情報に変換する。
///
/// - "a.b.c.d/n"             : MASK は指定不可
/// - "a.b.c.d" + "n"         : プレフィックス長
/// - "a.b.c.d" + "w.x.y.z"   : ネットマスク (1ビットの数のみ使用)
pub fn process_input(address: &str, mask: Option<&str>) -> Result<Cidr, IpcalcError> {
    if address.contains('/') {
        if let Some(mask) = mask {
            return Err(IpcalcError::InvalidInput(format!(
                "MASK {mask:?} cannot be combined with CIDR notation {address:?}"
            )));
        }
        info!(input = address, "parsing CIDR literal");
        return describe_from_prefix_string(address);
    }

    let mask = mask.ok_or_else(|| {
        IpcalcError::InvalidInput(format!(
            "{address:?} has no prefix length; pass it as a.b.c.d/n or add a MASK argument"
        ))
    })?;

    if mask.contains('.') {
        info!(netmask = mask, "deriving prefix length from netmask");
        return describe_with_netmask(address, mask);
    }

    let addr = address.parse::<Ipv4Addr>()?;
    // CIDR 表記ではないので MASK の書式エラーは InvalidInput として返す
    let bits = parse_prefix_len(mask).map_err(|e| match e {
        IpcalcError::MalformedCidr(msg) => {
            IpcalcError::InvalidInput(format!("MASK argument: {msg}"))
        }
        other => other,
    })?;
    describe_addr(addr, bits)
}
