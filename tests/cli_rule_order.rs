//! Legacy vs corrected rule ordering, via flag and config file

mod common;

use common::fixtures;
use common::TestEnv;

const FORMS: &str = "Frontend/src/pages/Forms";

#[test]
fn default_legacy_order_lets_the_generic_rule_win() {
    let env = TestEnv::new();
    env.write_file(&format!("{FORMS}/Uploader.tsx"), fixtures::FORM_PHOTO_LIMIT_ONLY);

    let result = env.run(&["run"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let migrated = env.read_file(&format!("{FORMS}/Uploader.tsx"));
    assert!(migrated.contains("title: 'Bilgi'"), "got: {migrated}");
    assert!(migrated.contains("severity: 'info'"));
    assert!(!migrated.contains("Fotoğraf Limiti"));
}

#[test]
fn specific_first_flag_applies_the_photo_limit_rule() {
    let env = TestEnv::new();
    env.write_file(&format!("{FORMS}/Uploader.tsx"), fixtures::FORM_PHOTO_LIMIT_ONLY);

    let result = env.run(&["run", "--rule-order", "specific-first"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let migrated = env.read_file(&format!("{FORMS}/Uploader.tsx"));
    assert!(migrated.contains("title: 'Fotoğraf Limiti'"), "got: {migrated}");
    assert!(migrated.contains("severity: 'warning'"));
}

#[test]
fn config_file_can_select_the_corrected_order() {
    let env = TestEnv::new();
    env.write_file("confirmify.toml", "[rules]\norder = \"specific-first\"\n");
    env.write_file(&format!("{FORMS}/Uploader.tsx"), fixtures::FORM_PHOTO_LIMIT_ONLY);

    let result = env.run(&["run"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Rule order: specific-first"));

    let migrated = env.read_file(&format!("{FORMS}/Uploader.tsx"));
    assert!(migrated.contains("title: 'Fotoğraf Limiti'"));
}

#[test]
fn flag_overrides_config_file() {
    let env = TestEnv::new();
    env.write_file("confirmify.toml", "[rules]\norder = \"specific-first\"\n");
    env.write_file(&format!("{FORMS}/Uploader.tsx"), fixtures::FORM_PHOTO_LIMIT_ONLY);

    let result = env.run(&["run", "--rule-order", "legacy"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let migrated = env.read_file(&format!("{FORMS}/Uploader.tsx"));
    assert!(migrated.contains("title: 'Bilgi'"));
}

#[test]
fn unknown_rule_order_is_a_usage_error() {
    let env = TestEnv::new();

    let result = env.run(&["run", "--rule-order", "newest"]);
    assert!(!result.success);
    assert!(result.stderr.contains("unknown rule order"), "stderr: {}", result.stderr);
}

#[test]
fn unknown_config_key_warns_but_runs() {
    let env = TestEnv::new();
    env.write_file("confirmify.toml", "[paths]\nglob = \"**/*.tsx\"\n");

    let result = env.run(&["run"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("unknown config key 'paths.glob'"));
}
