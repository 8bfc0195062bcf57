//! Shape Motion entry point
//!
//! Native builds run the scene headless: input is scripted into the event
//! queue, each frame is ticked and its draw list logged. A windowed host
//! drives the same `tick` / `build_frame` pair from its render loop.
//!
//! Rotation and pulse run on summed `motion_dt` by default, so headless runs
//! are reproducible; set `wall_clock` to feed real elapsed time instead.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(not(target_arch = "wasm32"))]
use shape_motion::Settings;
#[cfg(not(target_arch = "wasm32"))]
use shape_motion::renderer::{build_frame_with_clear, mesh_data};
#[cfg(not(target_arch = "wasm32"))]
use shape_motion::sim::{EventQueue, InputEvent, Key, ScenePreset, SceneState, TickInput, tick};

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::new();
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

/// Input fed to the textured scene so both shapes show and blend
#[cfg(not(target_arch = "wasm32"))]
fn scripted_input(frame: u32, queue: &mut EventQueue) {
    match frame {
        0 => queue.push(InputEvent::KeyPressed(Key::B)),
        f if f % 60 == 30 => queue.push(InputEvent::Scroll { delta_y: 1.0 }),
        _ => {}
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Parse before the logger exists (it may carry the filter), report after
    let loaded = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .map(|path| Settings::try_load(&path).map(|settings| (path, settings)));
    let settings = match &loaded {
        Some(Ok((_, settings))) => settings.clone(),
        _ => Settings::default(),
    };
    init_logging(settings.log_filter.as_deref());

    log::info!("Shape Motion (native) starting...");
    match &loaded {
        Some(Ok((path, _))) => log::info!("Loaded settings from {}", path.display()),
        Some(Err(e)) => log::warn!("{} - using defaults", e),
        None => log::info!("No settings file given - using defaults"),
    }
    log::info!(
        "Window {}x{} '{}' - rendering is left to the host, running headless",
        settings.window.width,
        settings.window.height,
        settings.window.title
    );

    let mut state = SceneState::new(settings.preset);
    for shape in &state.shapes {
        let mesh = mesh_data(shape.mesh);
        let texture = shape.texture.and_then(|slot| settings.texture_path(slot));
        log::debug!(
            "Shape '{}': {:?}, {} vertices, texture {:?}",
            shape.name,
            shape.mesh,
            mesh.vertex_count,
            texture
        );
    }

    let mut queue = EventQueue::new();
    let start = Instant::now();
    let mut draws = 0usize;
    for frame_index in 0..settings.frames {
        if settings.preset == ScenePreset::Textured {
            scripted_input(frame_index, &mut queue);
        }

        let input = TickInput {
            events: queue.drain(),
            elapsed: settings
                .wall_clock
                .then(|| start.elapsed().as_secs_f32()),
            scroll_step: Some(settings.scroll_step),
        };
        tick(&mut state, &input, settings.motion_dt);

        let frame = build_frame_with_clear(&state, settings.clear_color);
        draws += frame.commands.len();
        for cmd in &frame.commands {
            log::trace!(
                "frame {} {:?} at ({:.3}, {:.3})",
                frame_index,
                cmd.mesh,
                cmd.uniforms.transform[3][0],
                cmd.uniforms.transform[3][1]
            );
        }
    }

    log::info!(
        "Ran {} frames ({:.2}s of animation), {} draw calls, mix factor {:.2}",
        state.ticks,
        state.elapsed,
        draws,
        state.mix_factor
    );
    for shape in &state.shapes {
        let pos = shape.placement.position();
        log::info!("  {} ends at ({:.3}, {:.3})", shape.name, pos.x, pos.y);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is driven directly
}
