//! Headless scripted demo for the simulation core.
//!
//! Drives a fixed number of frames with fixed dt, steering the camera,
//! stepping the arm, and attempting grabs from a scripted event sequence,
//! demonstrating that the core is agnostic to where its input values come
//! from. State is reported through `log` once per simulated second.

use std::path::Path;

use gimbal::engine::{GimbalCommand, SceneEngine};
use gimbal::input::{InputEvent, InputProcessor};
use gimbal::options::Options;
use gimbal::util::frame_timing::FrameTiming;

/// Simulated frame count (10 seconds at 60 FPS).
const FRAMES: u32 = 600;
/// Fixed simulation step in seconds.
const DT: f32 = 1.0 / 60.0;
/// Viewport aspect ratio handed to the matrix computation.
const ASPECT: f32 = 16.0 / 9.0;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(opts) => {
                log::info!("loaded options preset {path}");
                opts
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    run(options);
}

/// Feed the scripted event for this frame into the processor, forwarding
/// any resulting command to the engine.
fn scripted_input(
    frame: u32,
    input: &mut InputProcessor,
    engine: &mut SceneEngine,
) {
    fn key(input: &mut InputProcessor, engine: &mut SceneEngine, k: &str) {
        if let Some(cmd) = input.handle_key_press(k) {
            engine.execute(cmd);
        }
    }

    match frame {
        // Switch to first-person and start walking forward.
        0 => {
            key(input, engine, "KeyV");
            key(input, engine, "KeyW");
        }
        120 => input.handle_key_release("KeyW"),
        // Sweep the view while strafing.
        130 => key(input, engine, "KeyD"),
        250 => input.handle_key_release("KeyD"),
        // Premature grab attempt, far out of reach.
        240 => key(input, engine, "Space"),
        // Swing the arm into reach, then grab for real.
        300 => engine.execute(GimbalCommand::SetJointAngle {
            joint: 0,
            degrees: 40.0,
        }),
        330 => engine.execute(GimbalCommand::SetJointAngle {
            joint: 1,
            degrees: -40.0,
        }),
        360 => key(input, engine, "Space"),
        // Carry the target around on the arm.
        420 => key(input, engine, "Tab"),
        430 | 440 | 450 => key(input, engine, "ArrowLeft"),
        // Let go and reset the camera.
        540 => key(input, engine, "Space"),
        550 => key(input, engine, "KeyQ"),
        _ => {}
    }

    // Continuous look sweep while in first person.
    if (60..180).contains(&frame) {
        if let Some(cmd) =
            input.handle_event(InputEvent::PointerDelta { dx: 2.0, dy: 0.5 })
        {
            engine.execute(cmd);
        }
    }
}

fn run(options: Options) {
    let mut engine = SceneEngine::new(options);
    let mut input =
        InputProcessor::with_key_bindings(engine.options().keybindings.clone());
    let mut timing = FrameTiming::new(0);

    for frame in 0..FRAMES {
        scripted_input(frame, &mut input, &mut engine);

        let movement = input.movement();
        engine.advance(DT, movement);
        let uniforms = engine.frame_uniforms(ASPECT);
        let _ = timing.end_frame();

        if frame % 60 == 59 {
            let cam = engine.camera().camera.position;
            let effector = engine.arm().chain.end_effector_position();
            log::info!(
                "t={:.1}s camera=({:.2}, {:.2}, {:.2}) yaw={:.1} \
                 effector=({:.3}, {:.3}) grabbed={} bodies={} fps={:.0}",
                (frame + 1) as f32 * DT,
                cam.x,
                cam.y,
                cam.z,
                engine.camera().camera.yaw(),
                effector.x,
                effector.y,
                engine.arm().is_grabbed(),
                uniforms.bodies.len(),
                timing.fps(),
            );
        }
    }

    log::info!(
        "demo complete: {} frames, final grab state {:?}",
        FRAMES,
        engine.arm().state()
    );
}
