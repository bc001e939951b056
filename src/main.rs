//! solid-light - headless animation driver
//!
//! Runs one installation for a fixed number of frames. With an output path
//! set, every frame's outlines and membranes are streamed as JSON Lines for
//! an external viewer.
//!
//! Usage: `solid-light [settings.json]`

use std::path::PathBuf;

use solid_light::render::{HeadlessTarget, JsonFrameTarget};
use solid_light::{Animation, DriverSettings};

fn main() -> solid_light::Result<()> {
    env_logger::init();
    log::info!("Starting solid-light");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = DriverSettings::load(settings_path.as_deref());

    let mut animation = Animation::new(settings.installation)?;
    if settings.show_vertex_normals {
        animation.toggle_vertex_normals();
    }

    match &settings.output {
        Some(path) => {
            let mut target = JsonFrameTarget::create(path)?;
            animation.run(settings.frames, &mut target)?;
            let frames = target.frame_count();
            target.finish()?;
            log::info!("Wrote {} frames to {}", frames, path.display());
        }
        None => {
            let mut target = HeadlessTarget::new();
            animation.run(settings.frames, &mut target)?;
            log::info!(
                "{} frames, {} membranes, {} vertices",
                target.frame_count(),
                target.membrane_count(),
                target.vertex_count()
            );
        }
    }

    log::info!(
        "Finished {} after {} frames",
        animation.installation().name(),
        animation.frame()
    );
    Ok(())
}
