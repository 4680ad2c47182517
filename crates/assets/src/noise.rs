//! 2D simplex noise and the per-vertex tint derived from it.

use std::time::{SystemTime, UNIX_EPOCH};

#[rustfmt::skip]
const PERM: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

const GRAD: [[f32; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

fn perm(i: i32) -> i32 {
    PERM[(i & 255) as usize] as i32
}

fn corner(gi: i32, x: f32, y: f32) -> f32 {
    let t = 0.5 - x * x - y * y;
    if t.is_nan() || t < 0.0 {
        return 0.0;
    }
    let g = GRAD[(gi % 12) as usize];
    let t2 = t * t;
    t2 * t2 * (g[0] * x + g[1] * y)
}

/// Classic 2D simplex noise, roughly in `[-1, 1]`.
pub fn simplex2(x: f32, y: f32) -> f32 {
    let f2 = 0.5 * (3.0_f32.sqrt() - 1.0);
    let g2 = (3.0 - 3.0_f32.sqrt()) / 6.0;

    let s = (x + y) * f2;
    let fi = (x + s).floor();
    let fj = (y + s).floor();
    let t = (fi + fj) * g2;
    let x0 = x - (fi - t);
    let y0 = y - (fj - t);
    // Lattice coordinates only index the permutation table, so wrap them
    // before any integer arithmetic.
    let i = fi.rem_euclid(256.0) as i32;
    let j = fj.rem_euclid(256.0) as i32;

    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };
    let x1 = x0 - i1 as f32 + g2;
    let y1 = y0 - j1 as f32 + g2;
    let x2 = x0 - 1.0 + 2.0 * g2;
    let y2 = y0 - 1.0 + 2.0 * g2;

    let gi0 = perm(i + perm(j));
    let gi1 = perm(i + i1 + perm(j + j1));
    let gi2 = perm(i + 1 + perm(j + 1));

    70.0 * (corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2))
}

/// Slowly advancing phase used to animate the tint: wall-clock millis / 10000.
pub fn tint_phase(now: SystemTime) -> f64 {
    now.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64 / 10_000.0)
        .unwrap_or(0.0)
}

/// One RGB tint per vertex. Flat float slot `i` samples the noise at
/// `(i * sin(phase), i * cos(phase))`.
pub fn noise_tint(vertex_count: usize, phase: f64) -> Vec<[f32; 3]> {
    let x = phase.sin() as f32;
    let y = phase.cos() as f32;
    (0..vertex_count)
        .map(|v| {
            let slot = |c: usize| {
                let i = (v * 3 + c) as f32;
                simplex2(i * x, i * y)
            };
            [slot(0), slot(1), slot(2)]
        })
        .collect()
}
