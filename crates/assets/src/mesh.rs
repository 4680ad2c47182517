use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Vertices plus a triangle-list index buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    pub vertices: Vec<TexturedVertex>,
    pub indices: Vec<u32>,
}

const THIRD: f32 = 1.0 / 3.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

const fn cv(position: [f32; 3], color: [f32; 3]) -> ColorVertex {
    ColorVertex { position, color }
}

const fn tv(x: f32, y: f32, z: f32, u: f32, v: f32) -> TexturedVertex {
    TexturedVertex {
        position: [x, y, z],
        uv: [u, v],
    }
}

/// Single red triangle in clip space.
pub fn triangle() -> Vec<ColorVertex> {
    let red = [1.0, 0.0, 0.0];
    vec![
        cv([-1.0, -1.0, 0.0], red),
        cv([1.0, -1.0, 0.0], red),
        cv([0.0, 1.0, 0.0], red),
    ]
}

/// 2x2x2 cube as a plain triangle list, one flat color per face.
pub fn colored_cube() -> Vec<ColorVertex> {
    let faces: [([f32; 3], [[f32; 3]; 6]); 6] = [
        // front
        (
            [1.0, 0.0, 0.0],
            [
                [1.0, 1.0, 1.0],
                [-1.0, 1.0, 1.0],
                [-1.0, -1.0, 1.0],
                [1.0, 1.0, 1.0],
                [-1.0, -1.0, 1.0],
                [1.0, -1.0, 1.0],
            ],
        ),
        // right
        (
            [0.0, 1.0, 0.0],
            [
                [1.0, 1.0, 1.0],
                [1.0, -1.0, 1.0],
                [1.0, -1.0, -1.0],
                [1.0, 1.0, 1.0],
                [1.0, -1.0, -1.0],
                [1.0, 1.0, -1.0],
            ],
        ),
        // back
        (
            [0.0, 0.0, 1.0],
            [
                [1.0, 1.0, -1.0],
                [-1.0, -1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [1.0, 1.0, -1.0],
                [1.0, -1.0, -1.0],
                [-1.0, -1.0, -1.0],
            ],
        ),
        // left
        (
            [0.0, 1.0, 1.0],
            [
                [-1.0, 1.0, 1.0],
                [-1.0, -1.0, -1.0],
                [-1.0, -1.0, 1.0],
                [-1.0, 1.0, 1.0],
                [-1.0, 1.0, -1.0],
                [-1.0, -1.0, -1.0],
            ],
        ),
        // top
        (
            [1.0, 0.0, 1.0],
            [
                [-1.0, 1.0, 1.0],
                [1.0, 1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [-1.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
                [1.0, 1.0, -1.0],
            ],
        ),
        // bottom
        (
            [1.0, 1.0, 0.0],
            [
                [-1.0, -1.0, 1.0],
                [-1.0, -1.0, -1.0],
                [1.0, -1.0, -1.0],
                [-1.0, -1.0, 1.0],
                [1.0, -1.0, -1.0],
                [1.0, -1.0, 1.0],
            ],
        ),
    ];

    faces
        .iter()
        .flat_map(|(color, corners)| corners.iter().map(move |p| cv(*p, *color)))
        .collect()
}

/// 36-vertex cube mapped onto a cross-shaped texture atlas
/// (four columns, three rows).
pub fn textured_cube() -> Vec<TexturedVertex> {
    #[rustfmt::skip]
    let vertices = vec![
        // front
        tv( 1.0,  1.0,  1.0, 0.5,  THIRD),
        tv(-1.0,  1.0,  1.0, 0.25, THIRD),
        tv(-1.0, -1.0,  1.0, 0.25, 0.0),
        tv( 1.0,  1.0,  1.0, 0.5,  THIRD),
        tv(-1.0, -1.0,  1.0, 0.25, 0.0),
        tv( 1.0, -1.0,  1.0, 0.5,  0.0),
        // right
        tv( 1.0,  1.0,  1.0, 0.5,  THIRD),
        tv( 1.0, -1.0,  1.0, 0.75, THIRD),
        tv( 1.0, -1.0, -1.0, 0.75, TWO_THIRDS),
        tv( 1.0,  1.0,  1.0, 0.5,  THIRD),
        tv( 1.0, -1.0, -1.0, 0.75, TWO_THIRDS),
        tv( 1.0,  1.0, -1.0, 0.5,  TWO_THIRDS),
        // back
        tv( 1.0,  1.0, -1.0, 0.5,  TWO_THIRDS),
        tv(-1.0, -1.0, -1.0, 0.25, 1.0),
        tv(-1.0,  1.0, -1.0, 0.25, TWO_THIRDS),
        tv( 1.0,  1.0, -1.0, 0.5,  TWO_THIRDS),
        tv( 1.0, -1.0, -1.0, 0.5,  1.0),
        tv(-1.0, -1.0, -1.0, 0.25, 1.0),
        // left
        tv(-1.0,  1.0,  1.0, 0.25, THIRD),
        tv(-1.0,  1.0, -1.0, 0.25, TWO_THIRDS),
        tv(-1.0, -1.0, -1.0, 0.0,  TWO_THIRDS),
        tv(-1.0,  1.0,  1.0, 0.25, THIRD),
        tv(-1.0, -1.0, -1.0, 0.0,  TWO_THIRDS),
        tv(-1.0, -1.0,  1.0, 0.0,  THIRD),
        // top
        tv(-1.0,  1.0,  1.0, 0.25, THIRD),
        tv( 1.0,  1.0, -1.0, 0.5,  TWO_THIRDS),
        tv(-1.0,  1.0, -1.0, 0.25, TWO_THIRDS),
        tv(-1.0,  1.0,  1.0, 0.25, THIRD),
        tv( 1.0,  1.0,  1.0, 0.5,  THIRD),
        tv( 1.0,  1.0, -1.0, 0.5,  TWO_THIRDS),
        // bottom
        tv( 1.0, -1.0,  1.0, 0.75, THIRD),
        tv(-1.0, -1.0,  1.0, 1.0,  THIRD),
        tv(-1.0, -1.0, -1.0, 1.0,  TWO_THIRDS),
        tv( 1.0, -1.0,  1.0, 0.75, THIRD),
        tv(-1.0, -1.0, -1.0, 1.0,  TWO_THIRDS),
        tv( 1.0, -1.0, -1.0, 0.75, TWO_THIRDS),
    ];
    vertices
}

/// The same atlas cube with shared corners: 14 vertices, 36 indices.
/// Corners whose UVs differ between faces are duplicated.
pub fn indexed_cube() -> IndexedMesh {
    #[rustfmt::skip]
    let vertices = vec![
        tv( 1.0,  1.0,  1.0, 0.5,  THIRD),      // 0
        tv(-1.0,  1.0,  1.0, 0.25, THIRD),      // 1
        tv( 1.0, -1.0,  1.0, 0.75, THIRD),      // 2
        tv( 1.0,  1.0, -1.0, 0.5,  TWO_THIRDS), // 3
        tv( 1.0, -1.0, -1.0, 0.75, TWO_THIRDS), // 4
        tv(-1.0,  1.0, -1.0, 0.25, TWO_THIRDS), // 5
        tv(-1.0, -1.0,  1.0, 1.0,  THIRD),      // 6
        tv(-1.0, -1.0, -1.0, 1.0,  TWO_THIRDS), // 7
        tv( 1.0, -1.0,  1.0, 0.5,  0.0),        // 8
        tv(-1.0, -1.0,  1.0, 0.25, 0.0),        // 9
        tv(-1.0, -1.0, -1.0, 0.25, 1.0),        // 10
        tv( 1.0, -1.0, -1.0, 0.5,  1.0),        // 11
        tv(-1.0, -1.0,  1.0, 0.0,  THIRD),      // 12
        tv(-1.0, -1.0, -1.0, 0.0,  TWO_THIRDS), // 13
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 9,   0, 9, 8,    // front
        0, 2, 4,   0, 4, 3,    // right
        3, 10, 5,  3, 11, 10,  // back
        1, 5, 13,  1, 13, 12,  // left
        1, 3, 5,   1, 0, 3,    // top
        2, 6, 7,   2, 7, 4,    // bottom
    ];
    IndexedMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_unit_cube(p: [f32; 3]) -> bool {
        p.iter().all(|c| c.abs() == 1.0)
    }

    #[test]
    fn triangle_is_red() {
        let tri = triangle();
        assert_eq!(tri.len(), 3);
        assert!(tri.iter().all(|v| v.color == [1.0, 0.0, 0.0]));
    }

    #[test]
    fn colored_cube_has_six_flat_faces() {
        let cube = colored_cube();
        assert_eq!(cube.len(), 36);
        for face in cube.chunks(6) {
            assert!(face.iter().all(|v| v.color == face[0].color));
            assert!(face.iter().all(|v| on_unit_cube(v.position)));
        }
    }

    #[test]
    fn textured_cube_uvs_in_range() {
        let cube = textured_cube();
        assert_eq!(cube.len(), 36);
        for v in &cube {
            assert!(on_unit_cube(v.position));
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
        }
    }

    #[test]
    fn indexed_cube_indices_in_bounds() {
        let mesh = indexed_cube();
        assert_eq!(mesh.vertices.len(), 14);
        assert_eq!(mesh.indices.len(), 36);
        assert!(
            mesh.indices
                .iter()
                .all(|&i| (i as usize) < mesh.vertices.len())
        );
    }

    #[test]
    fn indexed_cube_covers_every_face() {
        let mesh = indexed_cube();
        // each pair of triangles lies on one axis-aligned face
        for face in mesh.indices.chunks(6) {
            let points: Vec<[f32; 3]> = face
                .iter()
                .map(|&i| mesh.vertices[i as usize].position)
                .collect();
            let shared_axis = (0..3).any(|axis| points.iter().all(|p| p[axis] == points[0][axis]));
            assert!(shared_axis, "face {face:?} is not planar");
        }
    }

    #[test]
    fn vertex_layouts_are_tightly_packed() {
        assert_eq!(std::mem::size_of::<ColorVertex>(), 24);
        assert_eq!(std::mem::size_of::<TexturedVertex>(), 20);
    }
}
