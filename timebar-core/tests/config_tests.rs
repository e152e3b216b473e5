use std::env;
use std::path::PathBuf;

use timebar_core::config::{
    CoreConfig, CoreConfigBuilder, ENV_AGENDA_DIR, ENV_FINISHED_LABEL, ENV_SOUND, ENV_TICK_MS,
};

#[test]
fn test_builder_overrides_defaults() {
    let config = CoreConfigBuilder::new()
        .agenda_dir(PathBuf::from("/tmp/agendas"))
        .tick_ms(25)
        .sound_enabled(false)
        .finished_label("Done")
        .date_format("%Y-%m-%d")
        .build();

    assert_eq!(config.agenda_dir, PathBuf::from("/tmp/agendas"));
    assert_eq!(config.tick_ms, 25);
    assert!(!config.sound_enabled);
    assert_eq!(config.finished_label, "Done");
    assert_eq!(config.date_format, "%Y-%m-%d");
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_from_config_keeps_values() {
    let base = CoreConfigBuilder::new().tick_ms(40).build();
    let config = CoreConfigBuilder::from_config(base).sound_enabled(false).build();
    assert_eq!(config.tick_ms, 40);
    assert!(!config.sound_enabled);
}

#[test]
fn test_env_var_overrides() {
    // SAFETY: this is the only test in this binary touching the environment.
    unsafe {
        env::set_var(ENV_AGENDA_DIR, "/srv/meetings");
        env::set_var(ENV_TICK_MS, "20");
        env::set_var(ENV_SOUND, "off");
        env::set_var(ENV_FINISHED_LABEL, "Terminé");
    }

    let config = CoreConfig::from_env();
    assert_eq!(config.agenda_dir, PathBuf::from("/srv/meetings"));
    assert_eq!(config.tick_ms, 20);
    assert!(!config.sound_enabled);
    assert_eq!(config.finished_label, "Terminé");

    // Unparseable values fall back to the defaults
    unsafe {
        env::set_var(ENV_TICK_MS, "fast");
        env::set_var(ENV_SOUND, "maybe");
    }
    let config = CoreConfig::from_env();
    assert_eq!(config.tick_ms, 10);
    assert!(config.sound_enabled);

    unsafe {
        env::remove_var(ENV_AGENDA_DIR);
        env::remove_var(ENV_TICK_MS);
        env::remove_var(ENV_SOUND);
        env::remove_var(ENV_FINISHED_LABEL);
    }
    assert_eq!(CoreConfig::from_env(), CoreConfig::default());
}
