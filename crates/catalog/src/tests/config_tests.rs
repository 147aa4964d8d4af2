use std::collections::HashMap;

use super::*;

#[test]
fn empty_file_keeps_defaults() {
    assert_eq!(parse_settings("").expect("settings"), Settings::default());
}

#[test]
fn parses_players_media_and_groups() {
    let settings = parse_settings(
        r#"
        [players]
        video_player = "vlc"
        launch = true

        [[media]]
        kind = "photo"
        name = "beach"
        path = "pics/beach.jpg"
        latitude = 43.5
        longitude = 7.0

        [[media]]
        kind = "film"
        name = "Heat"
        path = "films/heat.mkv"
        duration = 170
        chapters = [30, 60, 80]

        [[groups]]
        name = "Summer"
        members = ["beach"]
        "#,
    )
    .expect("settings");

    assert_eq!(settings.players.photo_viewer, "imagej");
    assert_eq!(settings.players.video_player, "vlc");
    assert!(settings.players.launch);
    assert_eq!(settings.media.len(), 2);
    assert!(matches!(
        &settings.media[1],
        MediaEntry::Film { chapters, .. } if chapters == &[30, 60, 80]
    ));
    assert_eq!(
        settings.groups,
        [GroupEntry {
            name: "Summer".into(),
            members: vec!["beach".into()],
        }]
    );
}

#[test]
fn rejects_unknown_media_kind() {
    let err = parse_settings(
        r#"
        [[media]]
        kind = "hologram"
        name = "x"
        path = "x"
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("hologram"), "{err}");
}

#[test]
fn env_overrides_win_over_file_values() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("APP__PHOTO_VIEWER", "feh"),
        ("APP__LAUNCH_PLAYERS", "true"),
    ]);
    let mut settings = Settings::default();

    apply_env_overrides(&mut settings, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(settings.players.photo_viewer, "feh");
    assert_eq!(settings.players.video_player, "mpv");
    assert!(settings.players.launch);
}

#[test]
fn ignores_unparsable_launch_flag() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |key| {
        (key == "APP__LAUNCH_PLAYERS").then(|| "sometimes".to_string())
    });
    assert!(!settings.players.launch);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("media_client_missing_settings.toml");
    let err = load_settings(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("failed to read settings file"));
}

#[test]
fn shipped_example_matches_builtin_defaults() {
    let settings =
        parse_settings(include_str!("../../../../media.example.toml")).expect("example settings");
    assert_eq!(settings, Settings::default());
}
