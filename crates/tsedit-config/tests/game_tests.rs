//! Tests for loading the game configuration aggregate

use tsedit_config::{
    ArtConfig, ConfigFile, Error, GameConfig, GameConfigLoader, TechnoRules,
};
use tsedit_ini::{Foundation, ParseOptions, ParsedConfig};
use tsedit_test_utils::TestGame;
use tsedit_test_utils::fixtures::{
    ART_INI, ART_OVERRIDES_INI, ARTFS_INI, EVENTS_INI, FIRESTORM_INI, RULES_INI,
};

fn full_game() -> TestGame {
    TestGame::new()
        .loose("rules.ini", RULES_INI)
        .loose("firestrm.ini", FIRESTORM_INI)
        .packed("art.ini", ART_INI)
        .packed("artfs.ini", ARTFS_INI)
        .editor_file("ArtOverrides.ini", ART_OVERRIDES_INI)
        .editor_file("Events.ini", EVENTS_INI)
}

fn loader(game: &TestGame) -> GameConfigLoader {
    GameConfigLoader::new(game.resolver(), game.config_dir())
}

mod mandatory_rules {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn both_rules_files_missing_fails() {
        let game = TestGame::new().loose("art.ini", ART_INI);

        let err = loader(&game).load().unwrap_err();

        match err {
            Error::NoRulesConfiguration { searched } => {
                assert_eq!(searched, vec!["rules.ini", "firestrm.ini"]);
            }
            other => panic!("expected NoRulesConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn only_firestorm_rules_present() {
        let game = TestGame::new().loose("firestrm.ini", FIRESTORM_INI);

        let config = loader(&game).load().unwrap();

        assert!(config.rules().is_empty());
        assert!(config.rules().section("General").is_none());
        assert!(config.firestorm().contains_section("CYBORG"));
    }

    #[test]
    fn only_base_rules_present_in_archive() {
        let game = TestGame::new().packed("RULES.INI", RULES_INI);

        let config = loader(&game).load().unwrap();

        assert_eq!(config.rules().get("General", "Name"), Some("Tiberian Sun"));
        assert!(config.firestorm().is_empty());
        assert_eq!(config.firestorm().get("E1", "Cost"), None);
    }

    #[test]
    fn optional_files_default_to_empty() {
        let game = TestGame::new().loose("rules.ini", RULES_INI);

        let config = loader(&game).load().unwrap();

        for file in [ConfigFile::Art, ConfigFile::Ai, ConfigFile::FirestormAi] {
            assert!(config.get(file).is_empty(), "{file} should be empty");
        }
    }
}

mod sources {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loose_file_overrides_archive_copy() {
        let game = TestGame::new()
            .loose("rules.ini", "[General]\nName=Modded\n")
            .packed("rules.ini", RULES_INI);

        let config = loader(&game).load().unwrap();

        assert_eq!(config.rules().get("General", "Name"), Some("Modded"));
        assert!(!config.rules().contains_section("E1"));
    }

    #[test]
    fn malformed_file_fails_with_its_name() {
        let game = TestGame::new()
            .loose("rules.ini", RULES_INI)
            .loose("ai.ini", "[TeamTypes]\nstray line\n");

        let err = loader(&game).load().unwrap_err();
        assert!(matches!(err, Error::Parse { ref name, .. } if name == "ai.ini"));

        let lenient = loader(&game).with_parse_options(ParseOptions::lenient());
        assert!(lenient.load().unwrap().ai().contains_section("TeamTypes"));
    }
}

mod art_overrides {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overrides_are_consolidated_into_firestorm_art() {
        let game = full_game();

        let config = loader(&game).load().unwrap();
        let art_fs = config.art_fs();

        assert_eq!(art_fs.get("GAFSDF", "Foundation"), Some("2x1"));
        assert_eq!(art_fs.get("GAFSDF", "Voxel"), Some("no"));
        assert_eq!(art_fs.get("EDITORONLY", "Image"), Some("MARKER"));
        assert_eq!(
            art_fs.section_names().collect::<Vec<_>>(),
            vec!["GAPOWR", "GAFSDF", "EDITORONLY"]
        );
        // Base art is not touched by the overrides
        assert!(!config.art().contains_section("EDITORONLY"));
    }

    #[test]
    fn applied_count_matches_loaded_overrides() {
        let game = full_game();

        let config = loader(&game).load().unwrap();
        assert_eq!(config.art_overrides_applied(), 2);

        // Edits to the overrides file after loading do not change the report
        std::fs::write(
            game.config_dir().join("ArtOverrides.ini"),
            "[ONE]\nImage=A\n[TWO]\nImage=B\n[THREE]\nImage=C\n",
        )
        .unwrap();
        assert_eq!(config.art_overrides_applied(), 2);

        let empty = TestGame::new().loose("rules.ini", RULES_INI);
        assert_eq!(loader(&empty).load().unwrap().art_overrides_applied(), 0);
    }

    #[test]
    fn missing_overrides_file_is_empty() {
        let game = TestGame::new()
            .loose("rules.ini", RULES_INI)
            .packed("artfs.ini", ARTFS_INI);

        let loader = loader(&game);
        assert!(loader.art_overrides().unwrap().is_empty());
        assert_eq!(
            loader.load().unwrap().art_fs(),
            &ParsedConfig::parse(ARTFS_INI).unwrap()
        );
    }

    #[test]
    fn overrides_input_is_unchanged_by_load() {
        let game = TestGame::new().loose("rules.ini", RULES_INI);
        let overrides = ParsedConfig::parse(ART_OVERRIDES_INI).unwrap();
        let before = overrides.clone();

        let config =
            GameConfig::load(&game.resolver(), &overrides, ParseOptions::default()).unwrap();

        assert_eq!(overrides, before);
        assert_eq!(config.art_fs(), &before);
    }
}

mod layered_objects {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn techno_layers_firestorm_over_rules() {
        let config = loader(&full_game()).load().unwrap();

        let e1 = config.techno("E1").unwrap().unwrap();
        assert_eq!(e1.cost, 100);
        assert_eq!(e1.strength, 125);
        assert_eq!(e1.ui_name.as_deref(), Some("Name:E1"));
        assert_eq!(e1.owner, vec!["GDI", "Nod"]);
    }

    #[test]
    fn firestorm_only_techno_is_found() {
        let config = loader(&full_game()).load().unwrap();

        let cyborg: TechnoRules = config.read_rules_object("cyborg").unwrap().unwrap();
        assert_eq!(cyborg.name, "Cyborg");
        assert_eq!(cyborg.tech_level, 4);
    }

    #[test]
    fn unknown_object_is_none() {
        let config = loader(&full_game()).load().unwrap();
        assert!(config.techno("NOSUCH").unwrap().is_none());
        assert!(config.art_config("NOSUCH").unwrap().is_none());
    }

    #[test]
    fn art_layers_firestorm_over_base() {
        let config = loader(&full_game()).load().unwrap();

        let gapowr: ArtConfig = config.art_config("GAPOWR").unwrap().unwrap();
        assert_eq!(gapowr.height, 4);
        assert_eq!(gapowr.foundation, Foundation::new(2, 2));
        assert!(gapowr.new_theater);

        let gafsdf = config.art_config("GAFSDF").unwrap().unwrap();
        assert_eq!(gafsdf.foundation, Foundation::new(2, 1));
    }

    #[test]
    fn conversion_error_aborts_object_read() {
        let game = TestGame::new()
            .loose("rules.ini", RULES_INI)
            .loose("firestrm.ini", "[E1]\nCost=free\n");

        let config = loader(&game).load().unwrap();
        let err = config.techno("E1").unwrap_err();

        assert!(matches!(err, Error::Field { ref section, .. } if section == "E1"));
    }
}

mod event_catalog {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_catalog_from_config_dir() {
        let registry = loader(&full_game()).load_event_types().unwrap();

        assert_eq!(registry.len(), 4);
        let waypoint = registry.get(40).unwrap();
        assert_eq!(waypoint.name, "ReachedWaypoint");
        assert_eq!(waypoint.parameters[2].name_override(), Some("Waypoint"));
        assert_eq!(
            waypoint.parameters[3].presets().unwrap(),
            ["0", "1", "2"]
        );
        assert_eq!(waypoint.additional_param_count(), 2);

        let destroyed = registry.get(2).unwrap();
        assert!(destroyed.parameters[0].is_unused());
        assert_eq!(destroyed.parameters[1].display_name(), "All");
        assert_eq!(destroyed.default_param_count(), 1);
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let game = TestGame::new().loose("rules.ini", RULES_INI);
        let err = loader(&game).load_event_types().unwrap_err();
        assert!(matches!(err, Error::Fs(tsedit_fs::Error::SourceNotFound { .. })));
    }
}
