use std::env;
use std::fs;
use std::path::Path;

// Places config.toml beside the built binary so Config::load finds it
// through the executable's directory.
fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return;
    }

    // OUT_DIR is target/<profile>/build/<crate>-<hash>/out
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let Some(profile_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        println!("cargo:warning=unexpected OUT_DIR layout, config.toml not copied");
        return;
    };

    if let Err(err) = fs::copy(config_path, profile_dir.join("config.toml")) {
        println!("cargo:warning=failed to copy config.toml: {}", err);
    }
}
