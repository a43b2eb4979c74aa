//! `ccl-gallery [script.json]`
//!
//! Without a script the gallery only renders.

use ccl::{Gallery, GalleryConfig, Script};

fn main() {
    let (config, source) = GalleryConfig::load_from_default_path();

    // RUST_LOG wins over the configured level
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();
    source.log();

    if let Err(e) = run(config) {
        log::error!("{}", e);
        eprintln!("Gallery error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: GalleryConfig) -> ccl::Result<()> {
    let mut gallery = Gallery::new(config)?;

    if let Some(path) = std::env::args().nth(1) {
        let script = Script::load(&path)?;
        gallery.run_script(&script);
        for message in gallery.messages() {
            println!("{:?}", message);
        }
    }

    let paths = gallery.render_all()?;
    println!("Wrote {} snapshots to {:?}", paths.len(), gallery.config().snapshot_dir);
    Ok(())
}
