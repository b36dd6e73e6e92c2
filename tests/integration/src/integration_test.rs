//! Cross-crate scenarios: a modded installation on top of packed game files.

use pretty_assertions::assert_eq;
use tsedit_config::{ConfigFile, EditorSettings, GameConfig, GameConfigLoader};
use tsedit_fs::{ArchiveSet, MemoryArchive, SourceResolver};
use tsedit_ini::{ParseOptions, ParsedConfig};
use tsedit_test_utils::TestGame;
use tsedit_test_utils::fixtures::{
    ART_INI, ART_OVERRIDES_INI, ARTFS_INI, EVENTS_INI, FIRESTORM_INI, RULES_INI,
};

/// Shipped files in two archives, a mod's loose `firestrm.ini` on top.
fn modded_game() -> (TestGame, SourceResolver) {
    let game = TestGame::new()
        .loose("FIRESTRM.INI", "[E1]\nCost=90\nSpeed=5\n")
        .editor_file("ArtOverrides.ini", ART_OVERRIDES_INI)
        .editor_file("Events.ini", EVENTS_INI);

    let archives = ArchiveSet::new()
        .with(
            MemoryArchive::new("expand01.mix")
                .with_entry("firestrm.ini", FIRESTORM_INI)
                .with_entry("artfs.ini", ARTFS_INI),
        )
        .with(
            MemoryArchive::new("local.mix")
                .with_entry("rules.ini", RULES_INI)
                .with_entry("art.ini", ART_INI),
        );
    let resolver = SourceResolver::with_archives(game.game_dir(), archives);
    (game, resolver)
}

#[test]
fn modded_installation_resolves_each_file_from_the_right_place() {
    let (game, resolver) = modded_game();
    let config = GameConfigLoader::new(resolver, game.config_dir())
        .load()
        .unwrap();

    // Loose mod file shadows the archived Firestorm rules entirely
    assert!(!config.firestorm().contains_section("CYBORG"));
    assert_eq!(config.firestorm().get("E1", "Cost"), Some("90"));

    let e1 = config.techno("E1").unwrap().unwrap();
    assert_eq!(e1.cost, 90);
    assert_eq!(e1.speed, 5);
    assert_eq!(e1.strength, 125);

    assert_eq!(config.art_fs().get("GAFSDF", "Foundation"), Some("2x1"));
    assert!(config.ai().is_empty());
}

#[test]
fn overrides_consolidation_matches_manual_merge() {
    let (game, resolver) = modded_game();
    let loader = GameConfigLoader::new(resolver, game.config_dir());
    let config = loader.load().unwrap();

    let mut expected = ParsedConfig::parse(ARTFS_INI).unwrap();
    expected.consolidate(&ParsedConfig::parse(ART_OVERRIDES_INI).unwrap());

    assert_eq!(config.art_fs(), &expected);

    // Applying the overrides again changes nothing
    let mut again = config.art_fs().clone();
    again.consolidate(&loader.art_overrides().unwrap());
    assert_eq!(&again, config.art_fs());
}

#[test]
fn saved_files_load_back_identically() {
    let (_game, resolver) = modded_game();
    let config = GameConfig::load(
        &resolver,
        &ParsedConfig::parse(ART_OVERRIDES_INI).unwrap(),
        ParseOptions::default(),
    )
    .unwrap();

    let export_dir = tempfile::TempDir::new().unwrap();
    for file in ConfigFile::ALL {
        config
            .get(file)
            .save(&export_dir.path().join(file.file_name()))
            .unwrap();
    }

    // The saved artfs.ini already contains the overrides
    let exported = GameConfig::load(
        &SourceResolver::new(export_dir.path()),
        &ParsedConfig::new(),
        ParseOptions::default(),
    )
    .unwrap();
    for file in ConfigFile::ALL {
        assert_eq!(exported.get(file), config.get(file), "{file} differs");
    }
}

#[test]
fn settings_file_drives_the_loader() {
    let game = TestGame::new()
        .loose("rules.ini", RULES_INI)
        .loose("ai.ini", "[TaskForces]\nstray\n")
        .editor_file("Events.ini", EVENTS_INI);

    let settings_path = game.root().join("settings.toml");
    EditorSettings {
        game_directory: game.game_dir(),
        config_directory: "Config".into(),
        allow_bare_lines: true,
    }
    .save(&settings_path)
    .unwrap();

    let settings = EditorSettings::load(&settings_path).unwrap();
    assert_eq!(settings.config_directory, game.config_dir());

    let loader = settings.loader();
    let config = loader.load().unwrap();
    assert!(config.ai().contains_section("TaskForces"));
    assert_eq!(loader.load_event_types().unwrap().len(), 4);
}
