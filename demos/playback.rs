//! Console walkthrough of a three-step sequence: load a JSON config, bind it
//! to live objects, then drive the player with a fixed 60 Hz tick while
//! stepping forward and backward.

use std::collections::HashMap;

use tween::{Player, ScalarCell, SequenceConfig, TargetHandle, Transform2D};

const CONFIG: &str = r#"{
    "version": 1,
    "speed": 1.0,
    "steps": [
        {
            "anims": [
                {
                    "target": "hero",
                    "time": 0.6,
                    "easing": { "curve": "cubic", "mode": "out" },
                    "translations": [{ "vector": [4.0, 0.0], "relative": false }]
                },
                {
                    "target": "camera",
                    "time": 0.6,
                    "delay": 0.2,
                    "easing": { "curve": "sine", "mode": "in_out" },
                    "scales": [[3.0, 3.0]]
                }
            ]
        },
        {
            "anims": [
                {
                    "target": "hero",
                    "time": 0.4,
                    "easing": { "curve": "bounce", "mode": "out" },
                    "rotations": [180.0],
                    "scalar": "fade",
                    "scalar_keyframes": [0.0]
                }
            ]
        },
        {
            "anims": [
                {
                    "target": "hero",
                    "time": 0.5,
                    "easing": { "curve": "step", "mode": "in" },
                    "translations": [{ "vector": [-2.0, 1.0], "relative": true }],
                    "sprite": "hero_idle"
                }
            ]
        }
    ]
}"#;

fn pump(player: &mut Player) {
    while !player.is_idle() {
        player.tick(1.0 / 60.0);
    }
}

fn main() {
    env_logger::init();

    let hero = Transform2D::default().into_handle();
    let camera = Transform2D {
        orthographic_size: Some(5.0),
        ..Default::default()
    }
    .into_handle();
    let fade = ScalarCell::new(1.0);

    let mut targets: HashMap<String, TargetHandle> = HashMap::new();
    targets.insert("hero".to_string(), hero.clone());
    targets.insert("camera".to_string(), camera.clone());
    let mut cells = HashMap::new();
    cells.insert("fade".to_string(), fade.clone());

    let config = SequenceConfig::from_json(CONFIG).expect("parse config");
    let steps = config.resolve(&targets, &cells).expect("resolve config");
    let mut player = Player::new(steps, config.speed).expect("validate steps");

    println!("forward:");
    for _ in 0..player.step_count() {
        player.next(false);
        pump(&mut player);
        println!(
            "  step {}: hero pos {:?} rot {:.1} | camera ortho {:?} | fade {:.2}",
            player.step(),
            hero.borrow().position,
            hero.borrow().rotation,
            camera.borrow().orthographic_size,
            fade.get(),
        );
    }

    println!("backward:");
    for _ in 0..player.step_count() {
        player.previous(false);
        pump(&mut player);
        println!(
            "  step {}: hero pos {:?} rot {:.1} | camera ortho {:?} | fade {:.2}",
            player.step(),
            hero.borrow().position,
            hero.borrow().rotation,
            camera.borrow().orthographic_size,
            fade.get(),
        );
    }
}
