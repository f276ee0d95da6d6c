use std::process::Command;

const TRANSCRIPT: &str = "\
Draw Square!
Draw Circle!
Manufacturer: Nokia
Smarphone: Nokia Smartphone
Basic phone: Nokia Basic Phone
Manufacturer: Samsung
Smarphone: Samsung Smartphone
Basic phone: Samsung Basic Phone
Manufacturer: HTC
Smarphone: HTC Smartphone
Basic phone: HTC Basic Phone
";

fn run(bin: &str, args: &[&str]) -> std::process::Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_patterns_demo_prints_transcript() {
    let output = run(env!("CARGO_BIN_EXE_patterns_demo"), &[]);
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), TRANSCRIPT);
}

#[test]
fn test_patterns_demo_stdout_unaffected_by_logging() {
    let output = Command::new(env!("CARGO_BIN_EXE_patterns_demo"))
        .env("RUST_LOG", "trace")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), TRANSCRIPT);
}

#[test]
fn test_shapes_demo() {
    let output = run(env!("CARGO_BIN_EXE_shapes_demo"), &[]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Draw Square!\nDraw Circle!\n"
    );
}

#[test]
fn test_phone_factory_demo_defaults_to_full_catalog() {
    let output = run(env!("CARGO_BIN_EXE_phone_factory_demo"), &[]);
    assert!(output.status.success());
    let expected: String = TRANSCRIPT.lines().skip(2).map(|l| format!("{l}\n")).collect();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn test_phone_factory_demo_selected_manufacturers() {
    let output = run(env!("CARGO_BIN_EXE_phone_factory_demo"), &["htc", "Nokia"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Manufacturer: HTC\nSmarphone: HTC Smartphone\nBasic phone: HTC Basic Phone\n\
         Manufacturer: Nokia\nSmarphone: Nokia Smartphone\nBasic phone: Nokia Basic Phone\n"
    );
}

#[test]
fn test_phone_factory_demo_rejects_unknown_manufacturer() {
    let output = run(env!("CARGO_BIN_EXE_phone_factory_demo"), &["Motorola"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Motorola"));
}
