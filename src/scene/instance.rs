use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// One billboard as laid out in a GPU instance buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

impl ParticleInstance {
    pub fn new(position: Vec3, size: f32, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            size,
            color: color.to_array(),
        }
    }
}

pub fn as_bytes(instances: &[ParticleInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_without_padding() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
        let instances = [
            ParticleInstance::new(Vec3::new(1.0, 2.0, 3.0), 0.5, Vec4::ONE),
            ParticleInstance::zeroed(),
        ];
        let bytes = as_bytes(&instances);
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[0..4], &1.0_f32.to_ne_bytes());
        assert_eq!(&bytes[12..16], &0.5_f32.to_ne_bytes());
    }
}
