// build.rs

//! Compiles the user-facing message catalog (`locales/*.toml`) into the `t!`
//! macro, so every message used by open-in-mpv is checked at build time.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // --- 1. Pick the catalog language: `lang_*` feature, then OPEN_IN_MPV_LANG, then English ---
    // Cargo exposes each enabled `lang_*` feature as CARGO_FEATURE_LANG_<CODE>.
    let mut requested: Vec<String> = env::vars()
        .filter_map(|(key, _)| key.strip_prefix("CARGO_FEATURE_LANG_").map(str::to_lowercase))
        .collect();
    requested.sort();

    if let [first, _, ..] = requested.as_slice() {
        println!(
            "cargo:warning=open-in-mpv: several message catalogs requested ({:?}), using '{}'.",
            requested, first
        );
    }
    let lang = match requested.into_iter().next() {
        Some(lang) => lang,
        None => env::var("OPEN_IN_MPV_LANG").unwrap_or_else(|_| "en".to_string()),
    };

    println!("cargo:rustc-env=OPEN_IN_MPV_LANG_EFFECTIVE={}", lang);

    // --- 2. Rebuild when the catalogs or the language choice change ---
    println!("cargo:rerun-if-env-changed=OPEN_IN_MPV_LANG");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=locales/");

    // --- 3. The English catalog defines every key ---
    let fallback_file_path = "locales/en.toml";
    let fallback_content = fs::read_to_string(fallback_file_path)
        .expect("open-in-mpv: the base message catalog locales/en.toml is missing");
    let mut messages: BTreeMap<String, String> =
        toml::from_str(&fallback_content).expect("open-in-mpv: locales/en.toml is not a flat key/value table");

    // --- 4. Other catalogs only override keys; missing ones stay in English ---
    if lang != "en" {
        let lang_file_path = format!("locales/{}.toml", lang);
        if let Ok(content) = fs::read_to_string(&lang_file_path) {
            let overrides: BTreeMap<String, String> = toml::from_str(&content)
                .unwrap_or_else(|_| panic!("open-in-mpv: {} is not a flat key/value table", lang_file_path));
            messages.extend(overrides);
        } else {
            println!(
                "cargo:warning=open-in-mpv: message catalog '{}' not found, messages stay in English.",
                lang_file_path
            );
        }
    }

    // --- 5. One macro arm per message key ---
    let mut macro_code = String::from("#[macro_export]\nmacro_rules! t {\n");
    for (key, message) in &messages {
        // Messages become string literals usable as `format!` templates.
        let literal = message.replace('\\', "\\\\").replace('"', "\\\"");
        macro_code.push_str(&format!("    (\"{}\") => {{ \"{}\" }};\n", key, literal));
    }
    // Unknown keys fail the build instead of printing a placeholder at runtime.
    macro_code.push_str(
        "    ($key:expr) => {{ compile_error!(concat!(\"Missing translation key: \", $key)) }};\n",
    );
    macro_code.push('}');

    // --- 6. Included by src/lib.rs ---
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is always set by Cargo");
    let dest_path = Path::new(&out_dir).join("translations.rs");
    fs::write(&dest_path, macro_code).expect("open-in-mpv: could not write the message macro");
}
