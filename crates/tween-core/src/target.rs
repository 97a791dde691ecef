use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an animated object.
///
/// Animations keep handles rather than owning their targets, so one object
/// can be animated by different steps over the course of a sequence.
pub type TargetHandle = Rc<RefCell<dyn Target>>;

/// Property surface of an animatable object.
///
/// The `Option`-returning getters double as capability probes: a camera-like
/// target reports an orthographic size, a sprite-like target reports a tint
/// color. Capabilities are checked once when steps are validated, never
/// per frame.
pub trait Target {
    fn position(&self) -> [f32; 3];
    fn set_position(&mut self, position: [f32; 3]);

    fn local_scale(&self) -> [f32; 3];
    fn set_local_scale(&mut self, scale: [f32; 3]);

    /// Rotation around the z axis, in degrees.
    fn z_rotation(&self) -> f32;
    fn set_z_rotation(&mut self, degrees: f32);

    fn orthographic_size(&self) -> Option<f32> {
        None
    }
    fn set_orthographic_size(&mut self, _size: f32) {}

    fn tint_color(&self) -> Option<[f32; 4]> {
        None
    }
    fn set_tint_color(&mut self, _color: [f32; 4]) {}

    /// Discrete sprite swap; never interpolated.
    fn set_sprite(&mut self, _sprite: &str) {}
}

/// Plain transform implementation of [`Target`], for hosts that keep their
/// scene state in ordinary structs, and for tests.
#[derive(Clone, Debug)]
pub struct Transform2D {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub rotation: f32,
    pub orthographic_size: Option<f32>,
    pub tint: Option<[f32; 4]>,
    pub sprite: Option<String>,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            scale: [1.0, 1.0, 1.0],
            rotation: 0.0,
            orthographic_size: None,
            tint: None,
            sprite: None,
        }
    }
}

impl Transform2D {
    /// Wraps the transform in a shareable handle.
    pub fn into_handle(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }
}

impl Target for Transform2D {
    fn position(&self) -> [f32; 3] {
        self.position
    }
    fn set_position(&mut self, position: [f32; 3]) {
        self.position = position;
    }

    fn local_scale(&self) -> [f32; 3] {
        self.scale
    }
    fn set_local_scale(&mut self, scale: [f32; 3]) {
        self.scale = scale;
    }

    fn z_rotation(&self) -> f32 {
        self.rotation
    }
    fn set_z_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    fn orthographic_size(&self) -> Option<f32> {
        self.orthographic_size
    }
    fn set_orthographic_size(&mut self, size: f32) {
        if self.orthographic_size.is_some() {
            self.orthographic_size = Some(size);
        }
    }

    fn tint_color(&self) -> Option<[f32; 4]> {
        self.tint
    }
    fn set_tint_color(&mut self, color: [f32; 4]) {
        if self.tint.is_some() {
            self.tint = Some(color);
        }
    }

    fn set_sprite(&mut self, sprite: &str) {
        self.sprite = Some(sprite.to_string());
    }
}
