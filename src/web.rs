//! WASM entry point - a gesture session driven from a JS hand tracker
//!
//! The page runs the pose estimator and pushes flat landmark arrays into a
//! [`WebSession`]; its render loop calls [`WebSession::tick`] and uploads
//! the instance bytes and camera matrix.

use crate::gesture::{GestureInterpreter, GestureState};
use crate::hand::HandFrame;
use crate::scene::{as_bytes, ParticleInstance, Scene, SceneConfig};
use std::sync::Once;
use wasm_bindgen::prelude::*;

static INIT: Once = Once::new();

#[wasm_bindgen]
pub struct WebSession {
    interpreter: GestureInterpreter,
    state: GestureState,
    scene: Scene,
    instances: Vec<ParticleInstance>,
    last_time: f64,
}

#[wasm_bindgen]
impl WebSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSession {
        INIT.call_once(|| {
            console_error_panic_hook::set_once();
            if let Err(e) = console_log::init_with_level(log::Level::Warn) {
                web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
            }
        });

        WebSession {
            interpreter: GestureInterpreter::default(),
            state: GestureState::default(),
            scene: Scene::new(SceneConfig::default()),
            instances: Vec::new(),
            last_time: 0.0,
        }
    }

    /// Feeds one tracker result: `x, y, z` for 21 landmarks per hand, hands
    /// back to back. Returns whether a gesture was recognized.
    pub fn push_landmarks(&mut self, flat: &[f32]) -> Result<bool, JsValue> {
        let frame = HandFrame::from_flat(flat).map_err(|e| JsValue::from_str(&e.to_string()))?;
        match self.interpreter.process(&frame, &mut self.state) {
            Some(event) => {
                self.scene.push(event);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Advances the scene using `performance.now()` for the frame time.
    pub fn tick(&mut self) {
        let now = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);

        let dt = if self.last_time > 0.0 {
            ((now - self.last_time) / 1000.0) as f32
        } else {
            1.0 / 60.0
        };
        self.last_time = now;

        self.scene.tick(dt.clamp(0.0, 0.1));
        self.scene.write_instances(&mut self.instances);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.scene.set_aspect(aspect);
    }

    /// Instance buffer contents: position xyz, size, rgba per billboard.
    pub fn instance_bytes(&self) -> Vec<u8> {
        as_bytes(&self.instances).to_vec()
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn view_projection(&self) -> Vec<f32> {
        self.scene.camera().view_projection().to_cols_array().to_vec()
    }

    pub fn camera_position(&self) -> Vec<f32> {
        self.scene.camera().position.to_array().to_vec()
    }

    pub fn smoothed_zoom(&self) -> f32 {
        self.state.smoothed_zoom()
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}
