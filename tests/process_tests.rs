use ipcalc::cidr::describe;
use ipcalc::error::IpcalcError;
use ipcalc::process::process_input;

#[test]
fn accepts_cidr_literal() -> Result<(), IpcalcError> {
    assert_eq!(process_input("10.16.1.1/24", None)?, describe("10.16.1.1", 24)?);
    Ok(())
}

#[test]
fn accepts_prefix_length_argument() -> Result<(), IpcalcError> {
    assert_eq!(process_input("10.16.1.1", Some("24"))?, describe("10.16.1.1", 24)?);
    Ok(())
}

#[test]
fn accepts_netmask_argument() -> Result<(), IpcalcError> {
    assert_eq!(
        process_input("10.16.1.1", Some("255.255.255.0"))?,
        describe("10.16.1.1", 24)?
    );
    // 不連続マスクはビット数だけ使う
    assert_eq!(
        process_input("10.16.1.1", Some("255.0.255.0"))?,
        describe("10.16.1.1", 16)?
    );
    Ok(())
}

#[test]
fn rejects_inconsistent_arguments() {
    // CIDR 表記と MASK の併用
    assert!(matches!(
        process_input("10.16.1.1/24", Some("24")),
        Err(IpcalcError::InvalidInput(_))
    ));
    // プレフィックス長なし
    assert!(matches!(process_input("10.16.1.1", None), Err(IpcalcError::InvalidInput(_))));
    // 範囲外
    assert!(matches!(
        process_input("10.16.1.1", Some("33")),
        Err(IpcalcError::InvalidPrefix(33))
    ));
    // MASK の書式エラーは CIDR ではなく入力エラー
    assert!(matches!(
        process_input("10.16.1.1", Some("abc")),
        Err(IpcalcError::InvalidInput(_))
    ));
    assert!(matches!(
        process_input("10.16.1.1", Some("024")),
        Err(IpcalcError::InvalidInput(_))
    ));
    assert!(matches!(
        process_input("10.16.1.1", Some("255.255.0")),
        Err(IpcalcError::AddrParseError(_))
    ));
    assert!(matches!(
        process_input("10.16.1", Some("255.255.255.0")),
        Err(IpcalcError::AddrParseError(_))
    ));
    assert!(matches!(
        process_input("10.16.1", Some("24")),
        Err(IpcalcError::AddrParseError(_))
    ));
}
