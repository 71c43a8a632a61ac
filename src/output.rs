use crate::cidr::Cidr;
use crate::common::OutputFormat;
use crate::error::IpcalcError;

/// 指定形式でサブネット情報を文字列化する。
pub fn render(cidr: &Cidr, format: OutputFormat) -> Result<String, IpcalcError> {
    match format {
        OutputFormat::Txt => Ok(render_txt(cidr)),
        OutputFormat::Json => render_json(cidr),
    }
}

/// "Label:     value" 形式の行を並べる
pub fn render_txt(cidr: &Cidr) -> String {
    let rows: [(&str, String); 8] = [
        ("Address", cidr.address.to_string()),
        ("Bits", cidr.bits.to_string()),
        ("Netmask", cidr.netmask.to_string()),
        ("Wildcard", cidr.wildcard_mask.to_string()),
        ("Network", cidr.network_address.to_string()),
        ("Broadcast", cidr.broadcast_address.to_string()),
        ("Subnets", cidr.maximum_subnets.to_string()),
        ("Hosts", cidr.maximum_addresses.to_string()),
    ];

    let mut content = String::new();
    for (label, value) in rows {
        content.push_str(&format!("{:<10} {}\n", format!("{label}:"), value));
    }
    content
}

pub fn render_json(cidr: &Cidr) -> Result<String, IpcalcError> {
    Ok(serde_json::to_string_pretty(cidr)?)
}
