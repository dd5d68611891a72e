//! Property tests for component synthesis.

use std::path::Path;

use proptest::prelude::*;

use iconpack::adapters::component::synthesize;
use iconpack::adapters::declaration::declaration;
use iconpack::models::Format;

fn path_data() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[MLHVZmlhvz0-9 .,-]{1,40}").unwrap()
}

fn markup(paths: &[String], title: &Option<String>) -> String {
    let mut svg = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"#);
    if let Some(title) = title {
        svg.push_str(&format!("<title>{title}</title>"));
    }
    for d in paths {
        svg.push_str(&format!(r#"<path d="{d}"/>"#));
    }
    svg.push_str("</svg>");
    svg
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Synthesis is deterministic and each format keeps to its module system.
    #[test]
    fn property_synthesis_deterministic(
        paths in proptest::collection::vec(path_data(), 0..=4),
        title in proptest::option::of("[A-Za-z]{1,12}"),
        deprecated in any::<bool>(),
    ) {
        let svg = markup(&paths, &title);
        let file = Path::new("icon.svg");

        let esm = synthesize(&svg, "Icon", Format::Esm, deprecated, file).unwrap();
        let cjs = synthesize(&svg, "Icon", Format::Cjs, deprecated, file).unwrap();

        prop_assert_eq!(&esm, &synthesize(&svg, "Icon", Format::Esm, deprecated, file).unwrap());
        prop_assert_eq!(&cjs, &synthesize(&svg, "Icon", Format::Cjs, deprecated, file).unwrap());

        prop_assert!(!esm.contains("require("));
        prop_assert!(!esm.contains("module.exports"));
        prop_assert!(!cjs.contains("import "));
        prop_assert!(!cjs.contains("export "));
        prop_assert_eq!(esm.matches("React.createElement(\"path\"").count(), paths.len());
    }

    /// PROPERTY: The deprecation marker appears in source and declaration iff deprecated.
    #[test]
    fn property_deprecation_marker_iff_deprecated(deprecated in any::<bool>()) {
        let svg = markup(&["M0 0".to_string()], &None);
        for format in [Format::Esm, Format::Cjs] {
            let source = synthesize(&svg, "Icon", format, deprecated, Path::new("icon.svg")).unwrap();
            prop_assert_eq!(source.contains("/** @deprecated */"), deprecated);
        }
        prop_assert_eq!(declaration("Icon", deprecated).contains("/** @deprecated */"), deprecated);
    }
}
