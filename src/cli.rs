use clap::{ArgAction, Parser};

/// CLIの定義
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Calculate IPv4 subnet properties from an address and a prefix length or netmask."
)]
pub struct Cli {
    #[arg(
        value_name = "ADDRESS",
        help = "IPv4 address, optionally in CIDR notation.\nExample: 10.16.1.1 or 10.16.1.1/24"
    )]
    pub address: String,

    #[arg(
        value_name = "MASK",
        required = false,
        help = "Prefix length or dotted-quad netmask when ADDRESS has no '/'.\nExample: 24 or 255.255.255.0"
    )]
    pub mask: Option<String>,

    #[arg(
        short = 'f',
        long = "format",
        default_value = "txt",
        required = false,
        hide_default_value = true,
        help = "Select output format: 'txt' or 'json'.\ndefault: txt"
    )]
    pub output_format: String,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v: info, -vv: debug)."
    )]
    pub verbose: u8,
}
