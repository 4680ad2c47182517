/// Turn a triangle-list index buffer into a line-list index buffer.
///
/// Each triangle `(a, b, c)` becomes the edges `a-b`, `b-c`, `c-a`. Shared
/// edges are emitted once per triangle that uses them. Trailing indices that
/// do not make up a whole triangle are dropped.
pub fn wireframe_indices(triangles: &[u32]) -> Vec<u32> {
    let mut lines = Vec::with_capacity(triangles.len() / 3 * 6);
    for tri in triangles.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        lines.extend_from_slice(&[a, b, b, c, c, a]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::indexed_cube;

    #[test]
    fn single_triangle() {
        assert_eq!(wireframe_indices(&[4, 7, 9]), vec![4, 7, 7, 9, 9, 4]);
    }

    #[test]
    fn empty_input() {
        assert!(wireframe_indices(&[]).is_empty());
    }

    #[test]
    fn partial_triangle_is_dropped() {
        assert_eq!(wireframe_indices(&[0, 1, 2, 3, 4]), vec![0, 1, 1, 2, 2, 0]);
    }

    #[test]
    fn cube_edges_double_the_index_count() {
        let mesh = indexed_cube();
        let lines = wireframe_indices(&mesh.indices);
        assert_eq!(lines.len(), mesh.indices.len() * 2);
        // every edge starts where its triangle's previous edge ended
        for tri_lines in lines.chunks(6) {
            assert_eq!(tri_lines[1], tri_lines[2]);
            assert_eq!(tri_lines[3], tri_lines[4]);
            assert_eq!(tri_lines[5], tri_lines[0]);
        }
    }
}
