use std::fs;
use std::sync::Arc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use icon_resolver::{
    BundleCache, CatalogKind, DirectoryBundleLoader, IconPicker, IconResolver, IconSetRenderer,
    LibraryPicker, Normalizer, RenderParams, ResolverConfig, SelectionSource, TabState,
    DEFAULT_FALLBACK_IDENTIFIER,
};

const MDI: &str = r#"{
    "prefix": "mdi",
    "width": 24,
    "height": 24,
    "icons": {
        "school": { "body": "<path d=\"school\"/>" },
        "star": { "body": "<path d=\"star\"/>" }
    }
}"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_documented_scenarios() {
    init_logging();
    let normalizer = Normalizer::default();

    assert_eq!(normalizer.normalize("TbBrandMysql"), "tabler:brand-mysql");
    assert_eq!(normalizer.normalize("FaReact"), "builtin:react-logo");
    assert_eq!(normalizer.normalize("XyUnknownIcon"), DEFAULT_FALLBACK_IDENTIFIER);
    assert_eq!(normalizer.normalize("Fa6Github"), "fa6:github");
    assert_eq!(normalizer.normalize(""), DEFAULT_FALLBACK_IDENTIFIER);
    assert_eq!(normalizer.normalize("   "), DEFAULT_FALLBACK_IDENTIFIER);
}

#[test]
fn test_every_alias_is_returned_verbatim() {
    let config = ResolverConfig::default()
        .with_alias("TbBrandMysql", "simple-icons:mysql")
        .with_alias("Nonsense!", "mdi:star");
    let normalizer = Normalizer::new(config.clone());

    for (identifier, canonical) in config.aliases.iter() {
        assert_eq!(normalizer.normalize(identifier), canonical);
    }
}

#[test]
fn test_stored_curated_names_normalize_deterministically() {
    let normalizer = Normalizer::default();
    for kind in [CatalogKind::Skill, CatalogKind::Competence] {
        for icon in kind.icons() {
            let first = normalizer.normalize(icon.name);
            assert_eq!(normalizer.normalize(icon.name), first);
            assert_ne!(first, DEFAULT_FALLBACK_IDENTIFIER, "{} has no known prefix", icon.name);
        }
    }
}

#[test]
fn test_list_with_one_invalid_identifier() {
    init_logging();
    let renderer = IconSetRenderer::new();
    renderer.add_json(MDI).unwrap();
    let resolver = IconResolver::new(ResolverConfig::default(), renderer);

    let identifiers = ["MdSchool", "MdStar", "XyUnknownIcon", "mdi:star", "FaReact"];
    let params = RenderParams::new(48, "#0ea5e9");
    let rendered = resolver.load_icons(&identifiers, &params);

    assert_eq!(rendered.len(), identifiers.len());
    let fallbacks: Vec<usize> = rendered
        .iter()
        .enumerate()
        .filter(|(_, icon)| icon.is_fallback)
        .map(|(idx, _)| idx)
        .collect();
    assert_eq!(fallbacks, vec![2]);
    assert!(rendered.iter().all(|icon| icon.params == params));
}

#[test]
fn test_custom_configuration_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("resolver.json");
    fs::write(
        &path,
        r#"{
            "prefixes": { "Md": "mdi", "Pfx": "custom" },
            "aliases": { "Favourite": "mdi:star" },
            "fallback_identifier": "mdi:help-circle"
        }"#,
    )
    .unwrap();

    let config = ResolverConfig::from_path(&path).unwrap();
    let normalizer = Normalizer::new(config);
    assert_eq!(normalizer.normalize("PfxThing"), "custom:thing");
    assert_eq!(normalizer.normalize("Favourite"), "mdi:star");
    assert_eq!(normalizer.normalize("TbBrandMysql"), "mdi:help-circle");
}

#[test]
fn test_picker_round_trip_through_resolver() {
    let renderer = IconSetRenderer::new();
    renderer.add_json(MDI).unwrap();
    let resolver = IconResolver::new(ResolverConfig::default(), renderer);

    let mut picker = IconPicker::new(CatalogKind::Competence);
    picker.set_search("school");
    let cells = picker.grid(&resolver);
    assert_eq!(cells.len(), 1);
    assert!(!cells[0].icon.is_fallback);

    let stored = picker.select(cells[0].name).unwrap();
    assert_eq!(stored.value, "MdSchool");

    // The stored display name renders the same icon later
    let later = resolver.load_icon(&stored.value);
    assert_eq!(&*later.identifier, "mdi:school");
    assert!(!later.is_fallback);
}

#[tokio::test]
async fn test_library_picker_with_directory_bundles() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("Si.json"),
        r#"{ "prefix": "Si", "icons": { "SiDocker": "<path/>", "SiRust": "<path/>" } }"#,
    )
    .unwrap();

    let bundles = BundleCache::new(DirectoryBundleLoader::new(temp_dir.path()));
    let mut picker = LibraryPicker::new(["Si", "Fa"]);

    assert!(picker.open_tab("Si", &bundles).await);
    assert_eq!(picker.filtered(), vec!["SiDocker", "SiRust"]);
    let selection = picker.select("SiRust").unwrap();
    assert_eq!(selection.source, SelectionSource::Library);

    // Missing bundle degrades to an empty tab
    assert!(picker.open_tab("Fa", &bundles).await);
    match picker.state() {
        TabState::Ready(bundle) => assert!(bundle.is_empty()),
        other => panic!("unexpected state {other:?}"),
    }

    // Returning to a loaded tab is served from the cache
    assert!(picker.open_tab("Si", &bundles).await);
    assert!(bundles.is_loaded("Si"));
    assert!(!bundles.is_loaded("Fa"));
    assert_eq!(bundles.statistics().hits, 1);
}

#[tokio::test]
async fn test_shared_resolver_across_tasks() {
    let renderer = IconSetRenderer::new();
    renderer.add_json(MDI).unwrap();
    let resolver = Arc::new(IconResolver::new(ResolverConfig::default(), renderer));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let resolver = resolver.clone();
        handles.push(tokio::spawn(async move {
            resolver.load_icon_async("MdStar", RenderParams::default()).await
        }));
    }

    for handle in handles {
        let rendered = handle.await.unwrap();
        assert_eq!(&*rendered.identifier, "mdi:star");
    }
    assert_eq!(resolver.names().cache().len(), 1);
}
