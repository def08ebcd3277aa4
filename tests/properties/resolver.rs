//! Property tests for release target resolution.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::Index;

use shipmate::catalog::Catalog;
use shipmate::models::App;
use shipmate::resolver::{resolve, ResolveOptions};

/// Small random catalogs: 1-7 apps over lowercase identifiers, with the
/// first app's domain sometimes marked as excluded from `all`.
fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    (
        proptest::collection::vec(("[a-z][a-z0-9_]{0,6}", "[a-z][a-z0-9_]{0,6}"), 1..8),
        any::<bool>(),
    )
        .prop_map(|(pairs, exclude_first)| {
            let mut seen = HashSet::new();
            let apps: Vec<App> = pairs
                .into_iter()
                .filter(|(domain, name)| seen.insert(format!("{domain}-{name}")))
                .map(|(domain, name)| App::new(domain, name))
                .collect();
            let excluded = exclude_first.then(|| apps[0].domain.clone());
            Catalog::new(apps, excluded)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution never panics, whatever the tokens look like.
    #[test]
    fn property_resolution_never_panics(
        catalog in catalog_strategy(),
        tokens in proptest::collection::vec(".{0,12}", 0..6),
        include_excluded in any::<bool>(),
    ) {
        let _ = resolve(&tokens, &catalog, ResolveOptions { include_excluded });
    }

    /// PROPERTY: Every resolved app belongs to the catalog and appears once.
    #[test]
    fn property_resolved_apps_come_from_catalog(
        catalog in catalog_strategy(),
        tokens in proptest::collection::vec("[a-z0-9_/-]{0,10}", 0..6),
        include_excluded in any::<bool>(),
    ) {
        if let Ok(apps) = resolve(&tokens, &catalog, ResolveOptions { include_excluded }) {
            let known = catalog.app_ids();
            let mut seen = HashSet::new();
            for app in apps {
                prop_assert!(known.contains(&app.full_id()));
                prop_assert!(seen.insert(app.full_id()), "app resolved twice: {}", app.full_id());
            }
        }
    }

    /// PROPERTY: The same tokens against the same catalog always give the
    /// same answer, error or not.
    #[test]
    fn property_resolution_is_deterministic(
        catalog in catalog_strategy(),
        tokens in proptest::collection::vec("[a-z0-9_/-]{0,10}", 0..6),
        include_excluded in any::<bool>(),
    ) {
        let options = ResolveOptions { include_excluded };
        let first = resolve(&tokens, &catalog, options);
        let second = resolve(&tokens, &catalog, options);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Doubling the token list never changes a successful
    /// resolution; on failure every occurrence of a bad token is reported.
    #[test]
    fn property_repeated_tokens_resolve_once(
        catalog in catalog_strategy(),
        tokens in proptest::collection::vec("[a-z0-9_/-]{0,10}", 0..6),
        include_excluded in any::<bool>(),
    ) {
        let options = ResolveOptions { include_excluded };
        let doubled: Vec<String> = tokens.iter().chain(tokens.iter()).cloned().collect();

        match (resolve(&tokens, &catalog, options), resolve(&doubled, &catalog, options)) {
            (Ok(once), Ok(twice)) => prop_assert_eq!(once, twice),
            (Err(once), Err(twice)) => {
                let repeated = [once.tokens.clone(), once.tokens].concat();
                prop_assert_eq!(twice.tokens, repeated);
            }
            (once, twice) => {
                prop_assert!(false, "doubling flipped the outcome: {:?} vs {:?}", once, twice);
            }
        }
    }

    /// PROPERTY: Full ids always resolve, in token order with repeats dropped.
    #[test]
    fn property_full_ids_always_resolve(
        catalog in catalog_strategy(),
        picks in proptest::collection::vec(any::<Index>(), 1..8),
        include_excluded in any::<bool>(),
    ) {
        let apps = catalog.apps();
        let tokens: Vec<String> = picks
            .iter()
            .map(|pick| apps[pick.index(apps.len())].full_id())
            .collect();

        let result = resolve(&tokens, &catalog, ResolveOptions { include_excluded });
        prop_assert!(result.is_ok(), "full ids failed to resolve: {:?}", result);

        let mut expected: Vec<String> = Vec::new();
        for token in &tokens {
            if !expected.contains(token) {
                expected.push(token.clone());
            }
        }
        let got: Vec<String> = result.unwrap().iter().map(|app| app.full_id()).collect();
        prop_assert_eq!(got, expected);
    }

    /// PROPERTY: One failure reports every bad token, in input order, with
    /// the full app and domain lists attached.
    #[test]
    fn property_every_bad_token_is_reported(
        catalog in catalog_strategy(),
        plan in proptest::collection::vec((any::<bool>(), any::<Index>()), 1..8),
    ) {
        let apps = catalog.apps();
        let mut tokens: Vec<String> = Vec::new();
        let mut bad: Vec<String> = Vec::new();
        for (i, (valid, pick)) in plan.iter().enumerate() {
            if *valid {
                tokens.push(apps[pick.index(apps.len())].full_id());
            } else {
                // '!' sits outside the identifier alphabet, so these can
                // never collide with an app, domain, name, or the wildcard.
                let token = format!("!bogus{i}");
                bad.push(token.clone());
                tokens.push(token);
            }
        }

        let result = resolve(&tokens, &catalog, ResolveOptions::default());
        if bad.is_empty() {
            prop_assert!(result.is_ok());
        } else {
            let err = result.unwrap_err();
            let reported: Vec<String> = err.tokens.iter().map(|t| t.token.clone()).collect();
            prop_assert_eq!(reported, bad);
            prop_assert_eq!(err.known_apps, catalog.app_ids());
            prop_assert_eq!(err.known_domains, catalog.domains());
        }
    }

    /// PROPERTY: `all` expands to the catalog in file order, minus the
    /// excluded domain unless the option lifts it.
    #[test]
    fn property_all_expands_in_catalog_order(
        catalog in catalog_strategy(),
        include_excluded in any::<bool>(),
    ) {
        let tokens = vec!["all".to_string()];
        let resolved = resolve(&tokens, &catalog, ResolveOptions { include_excluded }).unwrap();
        let got: Vec<String> = resolved.iter().map(|app| app.full_id()).collect();

        let expected: Vec<String> = catalog
            .apps()
            .iter()
            .filter(|app| include_excluded || catalog.default_excluded() != Some(app.domain.as_str()))
            .map(|app| app.full_id())
            .collect();
        prop_assert_eq!(got, expected);

        if include_excluded {
            prop_assert_eq!(resolved.len(), catalog.len());
        }
    }
}
