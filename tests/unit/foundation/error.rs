use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BeatpathError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BeatpathError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        BeatpathError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BeatpathError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
