//! Integration smoke tests for `uni_registry`

use uni_registry::get_version;

#[test]
fn test_version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
