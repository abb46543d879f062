//! Brio Engine demo
//!
//! Loads a small scene, spawns a wave of bots by instancing, and runs a few
//! frames of collision queries. Output goes through the log backend.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod demo {
    use brio_engine::renderer::CollisionOverlay;
    use brio_engine::sim::{ColliderType, Entity, Scene};
    use brio_engine::{EngineSettings, Result};
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    const BOT_COUNT: usize = 6;
    const FRAMES: u32 = 120;
    const BOT_SPEED: f32 = 90.0;
    const DT: f32 = 1.0 / 60.0;

    fn build_scene(settings: &EngineSettings) -> Result<Scene> {
        let canvas = Vec2::new(settings.width as f32, settings.height as f32);

        let spawn = canvas * 0.5 - Vec2::splat(16.0);
        let mut player = Entity::new("player", spawn, Vec2::splat(32.0), 2.0)?;
        player.add_rectangle_collider(
            ColliderType::Solid,
            Vec2::new(4.0, 2.0),
            Vec2::new(24.0, 30.0),
        );

        let mut pit = Entity::new("pit", Vec2::new(40.0, 40.0), Vec2::splat(48.0), 0.0)?;
        pit.add_square_collider(ColliderType::Intangible, Vec2::ZERO, 48.0);

        let mut bot = Entity::new("bot", Vec2::ZERO, Vec2::splat(16.0), 1.0)?;
        bot.add_circle_collider(ColliderType::Solid, Vec2::splat(8.0), 16.0);

        let mut scene = Scene::new();
        scene.load([player, pit, bot])?;
        Ok(scene)
    }

    /// Run the demo. Returns the number of player hits observed.
    pub fn run(seed: u64, settings: &EngineSettings) -> Result<u32> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut scene = build_scene(settings)?;
        let canvas = Vec2::new(settings.width as f32, settings.height as f32);

        let wave = scene.instantiate_many("bot", BOT_COUNT)?;
        let mut bots: Vec<(String, Vec2)> = Vec::with_capacity(wave.len());
        for instance in &wave {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let velocity = Vec2::from_angle(angle) * BOT_SPEED;
            if let Some(bot) = scene.get_mut(instance.name()) {
                bot.position = Vec2::new(
                    rng.random_range(0.0..canvas.x - bot.size.x),
                    rng.random_range(0.0..canvas.y - bot.size.y),
                );
            }
            bots.push((instance.name().to_string(), velocity));
        }
        log::info!("Spawned {} bots (seed {})", bots.len(), seed);

        let mut hits = 0;
        for frame in 0..FRAMES {
            for (name, velocity) in bots.iter_mut() {
                let Some(bot) = scene.get_mut(name) else {
                    continue;
                };
                bot.translate(*velocity * DT);

                // Bounce off the canvas edges
                if bot.position.x < 0.0 || bot.position.x + bot.size.x > canvas.x {
                    velocity.x = -velocity.x;
                }
                if bot.position.y < 0.0 || bot.position.y + bot.size.y > canvas.y {
                    velocity.y = -velocity.y;
                }
            }

            for (name, _) in &bots {
                if let Some(contact) = scene.contact(name, "player") {
                    hits += 1;
                    log::debug!("frame {}: '{}' hit the player", frame, name);
                    // Push the bot out so the next frame starts separated
                    if let Some(bot) = scene.get_mut(name) {
                        bot.translate(contact.separation());
                    }
                }
                if scene.is_colliding(name, "pit") {
                    log::debug!("frame {}: '{}' is over the pit", frame, name);
                }
            }
        }

        if settings.show_collisions || settings.show_borders {
            let overlay = CollisionOverlay::from_settings(settings);
            let stride = CollisionOverlay::vertex_layout().array_stride;
            log::info!(
                "Overlay: {} bytes ({} byte stride)",
                overlay.vertex_bytes(&scene).len(),
                stride
            );
        }

        log::info!("{} player hits over {} frames", hits, FRAMES);
        Ok(hits)
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    let settings = brio_engine::EngineSettings::default();
    brio_engine::logging::init(&settings.logs);

    let seed = js_sys::Date::now() as u64;
    if let Err(e) = demo::run(seed, &settings) {
        log::error!("Demo failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let mut settings = brio_engine::EngineSettings::default();
    settings.logs.enabled = true;
    settings.show_collisions = true;
    brio_engine::logging::init(&settings.logs);
    log::info!("Brio Engine demo (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    if let Err(e) = demo::run(seed, &settings) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}
