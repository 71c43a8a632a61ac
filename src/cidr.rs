use crate::address::{addr_to_u32, u32_to_addr};
use crate::capacity::{max_addresses, max_subnets};
use crate::error::IpcalcError;
use crate::netmask::{check_prefix, netmask_bits, netmask_str_to_bits};
use ipnet::Ipv4Net;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use tracing::debug;

/// アドレスとプレフィックス長から導出したサブネット情報一式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cidr {
    pub address: Ipv4Addr,
    pub bits: u8,
    pub netmask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    pub maximum_subnets: u64,
    pub maximum_addresses: u64,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
}

impl Cidr {
    /// ipnet の `Ipv4Net` に変換する (ホスト部はそのまま保持)。
    pub fn to_ipv4net(&self) -> Result<Ipv4Net, IpcalcError> {
        Ipv4Net::new(self.address, self.bits)
            .map_err(|_| IpcalcError::InvalidPrefix(self.bits as u32))
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.bits)
    }
}

impl FromStr for Cidr {
    type Err = IpcalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        describe_from_prefix_string(s)
    }
}

impl TryFrom<Ipv4Net> for Cidr {
    type Error = IpcalcError;

    fn try_from(net: Ipv4Net) -> Result<Self, Self::Error> {
        describe_addr(net.addr(), net.prefix_len())
    }
}

/// 共通の計算本体。
/// network = address & netmask, broadcast = network | !netmask
pub fn describe_addr(address: Ipv4Addr, bits: u8) -> Result<Cidr, IpcalcError> {
    let mask = netmask_bits(bits)?;
    let addr = addr_to_u32(address.octets());
    let network = addr & mask;
    let broadcast = network | !mask;

    let cidr = Cidr {
        address,
        bits,
        netmask: u32_to_addr(mask),
        wildcard_mask: u32_to_addr(!mask),
        maximum_subnets: max_subnets(bits)?,
        maximum_addresses: max_addresses(bits)?,
        network_address: u32_to_addr(network),
        broadcast_address: u32_to_addr(broadcast),
    };
    debug!(
        %cidr,
        network = %cidr.network_address,
        broadcast = %cidr.broadcast_address,
        "described subnet"
    );
    Ok(cidr)
}

/// アドレス文字列とプレフィックス長からサブネット情報を作る。
pub fn describe(address: &str, bits: u8) -> Result<Cidr, IpcalcError> {
    let address = address.parse::<Ipv4Addr>()?;
    describe_addr(address, bits)
}

/// アドレス文字列とドット区切りネットマスクからサブネット情報を作る。
/// ネットマスクは 1 ビットの数だけを見る (連続性は検証しない)。
pub fn describe_with_netmask(address: &str, netmask: &str) -> Result<Cidr, IpcalcError> {
    let bits = netmask_str_to_bits(netmask)?;
    describe(address, bits)
}

/// "a.b.c.d/n" 形式の文字列からサブネット情報を作る。
pub fn describe_from_prefix_string(cidr: &str) -> Result<Cidr, IpcalcError> {
    let (address, bits) = split_cidr(cidr)?;
    describe_addr(address, bits)
}

/// "a.b.c.d/n" をアドレスとプレフィックス長に分解する。
pub fn split_cidr(cidr: &str) -> Result<(Ipv4Addr, u8), IpcalcError> {
    let (addr_str, bits_str) = cidr
        .split_once('/')
        .ok_or_else(|| IpcalcError::MalformedCidr(format!("missing '/' in {cidr:?}")))?;

    if bits_str.contains('/') {
        return Err(IpcalcError::MalformedCidr(format!(
            "too many '/' in {cidr:?}"
        )));
    }
    let address = addr_str.parse::<Ipv4Addr>()?;
    Ok((address, parse_prefix_len(bits_str)?))
}

/// プレフィックス長の文字列 ("24" など) をパースする。
pub fn parse_prefix_len(bits_str: &str) -> Result<u8, IpcalcError> {
    // 符号や先頭ゼロ ("+24", "024") は受け付けない
    if bits_str.is_empty() || !bits_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IpcalcError::MalformedCidr(format!(
            "bad prefix length {bits_str:?}"
        )));
    }
    if bits_str.len() > 1 && bits_str.starts_with('0') {
        return Err(IpcalcError::MalformedCidr(format!(
            "leading zero in prefix length {bits_str:?}"
        )));
    }

    // u8 に収まらない大きな値も InvalidPrefix として扱う (u32 超えは u32::MAX に丸める)
    let bits = bits_str.parse::<u32>().unwrap_or(u32::MAX);
    let bits = u8::try_from(bits).map_err(|_| IpcalcError::InvalidPrefix(bits))?;
    check_prefix(bits)
}
