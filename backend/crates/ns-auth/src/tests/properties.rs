use crate::tests::{TENANT, claims, resolver_with};
use crate::{ClaimsResolver, InMemoryAdminStore, ProfileClaims, SessionToken};

use std::sync::Arc;

use proptest::prelude::*;

fn email_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._]{1,16}@[A-Za-z0-9]{1,12}\\.[A-Za-z]{2,4}"
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9@. -]{0,20}")
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #[test]
    fn given_claims_without_tenant_when_admit_then_rejected(
        email in optional_text(),
        username in optional_text(),
        name in optional_text(),
    ) {
        let resolver = resolver_with(&InMemoryAdminStore::new());
        let claims = ProfileClaims { tid: None, email, preferred_username: username, name };

        prop_assert!(!resolver.admit(&claims));
    }

    #[test]
    fn given_matching_tenant_and_identifier_when_admit_then_accepted(
        email in email_strategy(),
        use_username in any::<bool>(),
    ) {
        let resolver = resolver_with(&InMemoryAdminStore::new());
        let claims = if use_username {
            ProfileClaims {
                tid: Some(TENANT.to_string()),
                preferred_username: Some(email),
                ..Default::default()
            }
        } else {
            claims(Some(TENANT), Some(&email))
        };

        prop_assert!(resolver.admit(&claims));
    }

    #[test]
    fn given_mismatched_tenant_when_admit_then_rejected(
        tid in "[a-z0-9-]{1,36}",
        email in proptest::option::of(email_strategy()),
    ) {
        prop_assume!(tid != TENANT);
        let resolver = resolver_with(&InMemoryAdminStore::new());

        prop_assert!(!resolver.admit(&claims(Some(&tid), email.as_deref())));
    }

    #[test]
    fn given_whitespace_padded_tenant_when_admit_then_rejected(
        prefix in "[ \t\n]{0,3}",
        suffix in "[ \t\n]{0,3}",
        email in email_strategy(),
    ) {
        prop_assume!(!prefix.is_empty() || !suffix.is_empty());
        let resolver = resolver_with(&InMemoryAdminStore::new());
        let padded = format!("{prefix}{TENANT}{suffix}");

        prop_assert!(!resolver.admit(&claims(Some(&padded), Some(&email))));
    }

    #[test]
    fn given_unconfigured_tenant_when_admit_then_rejected(
        tid in proptest::option::of("[a-z0-9-]{1,36}"),
        email in proptest::option::of(email_strategy()),
    ) {
        let resolver = ClaimsResolver::new(None, Arc::new(InMemoryAdminStore::new()));

        prop_assert!(!resolver.admit(&claims(tid.as_deref(), email.as_deref())));
    }

    #[test]
    fn given_any_email_when_resolved_then_stored_lowercase(email in email_strategy()) {
        let resolver = resolver_with(&InMemoryAdminStore::new());

        let token = block_on(resolver.resolve_token(
            SessionToken::default(),
            Some(&claims(Some(TENANT), Some(&email))),
        ))
        .unwrap();

        prop_assert_eq!(token.email, Some(email.to_lowercase()));
    }

    #[test]
    fn given_identical_claims_when_resolved_twice_then_same_token(
        email in email_strategy(),
        name in optional_text(),
        is_admin in any::<bool>(),
    ) {
        let store = InMemoryAdminStore::new();
        if is_admin {
            block_on(store.insert(ns_core::AdminRecord::new(&email, "Admin", "test")));
        }
        let resolver = resolver_with(&store);
        let claims = ProfileClaims {
            tid: Some(TENANT.to_string()),
            email: Some(email),
            preferred_username: None,
            name,
        };

        let once = block_on(resolver.resolve_token(SessionToken::default(), Some(&claims))).unwrap();
        let twice = block_on(resolver.resolve_token(once.clone(), Some(&claims))).unwrap();

        prop_assert_eq!(once, twice);
    }
}
