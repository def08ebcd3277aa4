#![no_main]

use libfuzzer_sys::fuzz_target;

use shipmate::catalog::Catalog;
use shipmate::models::App;
use shipmate::resolver::{resolve, split_tokens, ResolveOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(selection) = std::str::from_utf8(data) {
        let catalog = Catalog::new(
            vec![
                App::new("demo", "hello_python"),
                App::new("demo", "hello_go"),
                App::new("manman", "worker"),
                App::new("manman", "migration"),
            ],
            Some("demo".to_string()),
        );

        // Fuzz token splitting and resolution - neither should ever panic
        let tokens = split_tokens(selection);
        let _ = resolve(&tokens, &catalog, ResolveOptions::default());
        let _ = resolve(
            &tokens,
            &catalog,
            ResolveOptions {
                include_excluded: true,
            },
        );
    }
});
