use ipcalc::address::{addr_to_u32, u32_to_addr, u32_to_octets};
use std::net::Ipv4Addr;

#[test]
fn converts_octets_to_big_endian_u32() {
    assert_eq!(addr_to_u32([10, 16, 1, 1]), 168_820_993);
    assert_eq!(addr_to_u32([0, 0, 0, 0]), 0);
    assert_eq!(addr_to_u32([255, 255, 255, 255]), u32::MAX);
    assert_eq!(addr_to_u32([0, 0, 0, 1]), 1);
    assert_eq!(addr_to_u32([128, 0, 0, 0]), 0x8000_0000);
}

#[test]
fn converts_u32_to_address() {
    assert_eq!(u32_to_addr(168_820_993), Ipv4Addr::new(10, 16, 1, 1));
    assert_eq!(u32_to_octets(0xC0A8_0001), [192, 168, 0, 1]);
}

#[test]
fn round_trips_in_both_directions() {
    // 境界値と適当な値をいくつか
    let values = [0u32, 1, 255, 256, 0x00FF_FF00, 0x7FFF_FFFF, 0x8000_0000, 0xDEAD_BEEF, u32::MAX];
    for v in values {
        assert_eq!(addr_to_u32(u32_to_addr(v).octets()), v);
        assert_eq!(addr_to_u32(u32_to_octets(v)), v);
    }

    let octets = [[10, 16, 1, 1], [0, 0, 0, 0], [255, 255, 255, 255], [1, 2, 3, 4]];
    for o in octets {
        assert_eq!(u32_to_octets(addr_to_u32(o)), o);
    }
}
