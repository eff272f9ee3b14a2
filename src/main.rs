use gesture_orbit::gesture::{GestureInterpreter, GestureState};
use gesture_orbit::scene::{Scene, SceneConfig};
use gesture_orbit::source::Script;

const CAMERA_HZ: u32 = 30;
const RENDER_HZ: u32 = 60;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut script = Script::demo();
    if std::env::args().any(|a| a == "--jitter") {
        script = script.with_jitter(0.003, 42);
    }
    log::info!(
        "playing {} scripted camera frames at {} Hz, rendering at {} Hz",
        script.frame_count(),
        CAMERA_HZ,
        RENDER_HZ
    );

    let interpreter = GestureInterpreter::default();
    let mut state = GestureState::default();
    let mut scene = Scene::new(SceneConfig::default());
    let mut instances = Vec::new();

    let ticks_per_frame = RENDER_HZ / CAMERA_HZ;
    let dt = 1.0 / RENDER_HZ as f32;
    let mut events = 0u64;
    let mut hands_visible = false;

    for (index, frame) in script.into_iter().enumerate() {
        let event = interpreter.process(&frame, &mut state);
        if event.is_some() != hands_visible {
            hands_visible = event.is_some();
            log::info!(
                "frame {}: {}",
                index,
                if hands_visible { "hand acquired" } else { "hand lost" }
            );
        }
        if let Some(event) = event {
            events += 1;
            scene.push(event);
        }

        for _ in 0..ticks_per_frame {
            scene.tick(dt);
        }

        if index as u32 % CAMERA_HZ == 0 {
            scene.write_instances(&mut instances);
            let rig = scene.rig();
            log::info!(
                "t={:>4.1}s azimuth={:>6.2} radius={:>5.2} breathing={:.2} zoom={:+.3} instances={} bursts={}",
                index as f32 / CAMERA_HZ as f32,
                rig.azimuth,
                rig.radius,
                scene.breathing(),
                state.smoothed_zoom(),
                instances.len(),
                scene.bursts().len(),
            );
        }
    }

    let stats = scene.stats();
    log::info!(
        "done: {} gesture events, {} render ticks, {} bursts ({} suppressed by cooldown)",
        events,
        stats.ticks,
        stats.bursts_spawned,
        stats.bursts_suppressed
    );
}
