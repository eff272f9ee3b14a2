use glam::{Mat4, Vec3, Vec4};
use std::f32::consts::PI;

pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 75.0_f32.to_radians(),
            aspect: 640.0 / 480.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Normalized device coordinates of a world point, `None` behind the
    /// camera.
    pub fn world_to_ndc(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * Vec4::new(point.x, point.y, point.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }
}

/// Arc-rotate camera rig: azimuth around Y, polar angle from +Y, distance
/// from `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    pub center: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub polar: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 15.0,
            azimuth: -PI / 2.0,
            polar: PI / 2.5,
            min_radius: 5.0,
            max_radius: 30.0,
        }
    }
}

impl OrbitRig {
    pub fn with_radius_limits(mut self, min: f32, max: f32) -> Self {
        self.min_radius = min;
        self.max_radius = max.max(min);
        self.radius = self.radius.clamp(self.min_radius, self.max_radius);
        self
    }

    /// Unbounded: the azimuth keeps accumulating.
    pub fn rotate(&mut self, delta: f32) {
        self.azimuth += delta;
    }

    /// Moves the radius `factor` of the way toward `target`, then clamps.
    pub fn ease_radius(&mut self, target: f32, factor: f32) {
        let radius = self.radius + (target - self.radius) * factor;
        self.radius = radius.clamp(self.min_radius, self.max_radius);
    }

    pub fn camera_position(&self) -> Vec3 {
        let x = self.radius * self.polar.sin() * self.azimuth.cos();
        let y = self.radius * self.polar.cos();
        let z = self.radius * self.polar.sin() * self.azimuth.sin();
        self.center + Vec3::new(x, y, z)
    }

    pub fn update_camera(&self, camera: &mut Camera) {
        camera.position = self.camera_position();
        camera.target = self.center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_keeps_radius() {
        let mut rig = OrbitRig::default();
        for _ in 0..17 {
            rig.rotate(0.37);
            assert!((rig.camera_position().length() - rig.radius).abs() < 1e-4);
        }
    }

    #[test]
    fn default_view_looks_from_front() {
        // azimuth -pi/2 puts the camera on -Z.
        let p = OrbitRig::default().camera_position();
        assert!(p.x.abs() < 1e-4);
        assert!(p.z < 0.0);
        assert!(p.y > 0.0);
    }

    #[test]
    fn ease_radius_clamps() {
        let mut rig = OrbitRig::default();
        rig.ease_radius(-100.0, 1.0);
        assert_eq!(rig.radius, rig.min_radius);
        rig.ease_radius(1000.0, 1.0);
        assert_eq!(rig.radius, rig.max_radius);
        rig.ease_radius(20.0, 0.5);
        assert_eq!(rig.radius, 25.0);
    }

    #[test]
    fn center_projects_to_screen_middle() {
        let rig = OrbitRig::default();
        let mut camera = Camera::default();
        rig.update_camera(&mut camera);
        let ndc = camera.world_to_ndc(rig.center).unwrap();
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!(camera.world_to_ndc(rig.camera_position() * 2.0).is_none());
    }
}
