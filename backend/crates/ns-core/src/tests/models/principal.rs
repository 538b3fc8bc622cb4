use crate::{CoreError, Principal, Role};

use googletest::prelude::*;

#[test]
fn given_mixed_case_email_when_principal_created_then_email_is_lowercase() {
    // When
    let principal = Principal::new(" Foo@Bar.com ", "Foo", "tenant-1", Role::User).unwrap();

    // Then
    assert_that!(principal.email.as_str(), eq("foo@bar.com"));
    assert_that!(principal.is_admin(), eq(false));
}

#[test]
fn given_empty_email_when_principal_created_then_validation_error() {
    // When
    let result = Principal::new("  ", "Foo", "tenant-1", Role::Admin);

    // Then
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_empty_tenant_when_principal_created_then_validation_error() {
    // When
    let result = Principal::new("a@b.com", "A", "", Role::Admin);

    // Then
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}
