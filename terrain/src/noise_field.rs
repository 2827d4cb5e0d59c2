use crate::NoiseGenerator;

// Ken Perlin's reference permutation. Seed 0 uses it as-is.
#[rustfmt::skip]
const REFERENCE_PERM: [u8; 256] = [
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

// x/y components of the 16-entry improved-noise gradient table
#[rustfmt::skip]
const GRAD: [(f64, f64); 16] = [
    (1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0),
    (1.0, 0.0), (-1.0, 0.0), (1.0, 0.0), (-1.0, 0.0),
    (0.0, 1.0), (0.0, -1.0), (0.0, 1.0), (0.0, -1.0),
    (1.0, 1.0), (0.0, -1.0), (-1.0, 1.0), (0.0, -1.0),
];

/// Amplitude multiplier applied per octave.
pub const PERSISTENCE: f64 = 0.5;
/// Frequency multiplier applied per octave.
pub const LACUNARITY: f64 = 2.0;

/// Seeded 2D gradient noise with fractal octave layering.
///
/// Sampling is a pure function of `(x, y, octaves)` and the seed the field
/// was built with. Nothing is read from global state.
#[derive(Debug, Clone)]
pub struct NoiseField {
    seed: u32,
    perm: [u8; 512], // permutation table (256 duplicated)
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        let mut p = REFERENCE_PERM;
        if seed != 0 {
            // xorshift-driven Fisher–Yates shuffle of the reference table
            let mut x = u64::from(seed) ^ 0xDEAD_BEEF_CAFE_BABE_u64;
            let mut rng = || {
                x ^= x << 13;
                x ^= x >> 7;
                x ^= x << 17;
                x
            };
            for i in (1..256).rev() {
                let j = (rng() % (i as u64 + 1)) as usize;
                p.swap(i, j);
            }
        }
        // Duplicated so corner lookups never need a modulo
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = p[i & 255];
        }
        Self { seed, perm }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    // 6t^5 − 15t^4 + 10t^3, zero first and second derivative at 0 and 1
    #[inline]
    fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    #[inline]
    fn lerp(t: f64, a: f64, b: f64) -> f64 {
        a + t * (b - a)
    }

    #[inline]
    fn grad(hash: u8, x: f64, y: f64) -> f64 {
        let (gx, gy) = GRAD[(hash & 0xF) as usize];
        gx * x + gy * y
    }

    // Single octave at (x, y), roughly in [-1, 1]
    fn noise(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let i = (x0 as i64 & 255) as usize;
        let j = (y0 as i64 & 255) as usize;
        let ii = ((x0 as i64 + 1) & 255) as usize;
        let jj = ((y0 as i64 + 1) & 255) as usize;

        let xf = x - x0;
        let yf = y - y0;
        let u = Self::fade(xf);
        let v = Self::fade(yf);

        let a = self.perm[i] as usize;
        let b = self.perm[ii] as usize;
        let aa = self.perm[a + j] as usize;
        let ab = self.perm[a + jj] as usize;
        let ba = self.perm[b + j] as usize;
        let bb = self.perm[b + jj] as usize;

        Self::lerp(
            v,
            Self::lerp(
                u,
                Self::grad(self.perm[aa], xf, yf),
                Self::grad(self.perm[ba], xf - 1.0, yf),
            ),
            Self::lerp(
                u,
                Self::grad(self.perm[ab], xf, yf - 1.0),
                Self::grad(self.perm[bb], xf - 1.0, yf - 1.0),
            ),
        )
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseGenerator for NoiseField {
    // Octaves are summed with halving amplitude and doubling frequency, then
    // divided by the total amplitude. Zero octaves has nothing to sum and
    // yields 0.0.
    fn sample(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut amplitude = 1.0;
        let mut freq = 1.0;
        let mut total = 0.0;
        let mut max_amp = 0.0;

        for _ in 0..octaves {
            total += self.noise(x * freq, y * freq) * amplitude;
            max_amp += amplitude;
            amplitude *= PERSISTENCE;
            freq *= LACUNARITY;
        }

        if max_amp == 0.0 { 0.0 } else { total / max_amp }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoiseField, REFERENCE_PERM};
    use crate::NoiseGenerator;

    #[test]
    fn reference_table_is_a_permutation() {
        let mut sorted = REFERENCE_PERM.to_vec();
        sorted.sort_unstable();
        let expected: Vec<u8> = (0..=255).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn noise_field_determinism() {
        let a = NoiseField::new(1234);
        let b = NoiseField::new(1234);
        for &(x, y) in &[(10.5, -3.7), (0.25, 0.75), (123.4, 56.7)] {
            assert_eq!(a.sample(x, y, 10).to_bits(), b.sample(x, y, 10).to_bits());
        }
    }

    #[test]
    fn noise_field_zero_at_lattice_points() {
        // Gradient noise vanishes on integer coordinates for a single octave
        let f = NoiseField::default();
        for &(x, y) in &[(0.0, 0.0), (3.0, 7.0), (-2.0, 5.0)] {
            assert_eq!(f.sample(x, y, 1), 0.0);
        }
    }

    #[test]
    fn noise_field_roughly_bounded() {
        let f = NoiseField::new(7);
        for i in 0..200 {
            let x = i as f64 * 0.731;
            let y = i as f64 * -0.417;
            let v = f.sample(x, y, 10);
            assert!(v.abs() <= 1.5, "value {v} far outside [-1, 1]");
        }
    }

    #[test]
    fn noise_field_is_continuous() {
        let f = NoiseField::default();
        let eps = 1e-6;
        for i in 0..100 {
            let x = 0.13 + i as f64 * 0.29;
            let y = 0.57 + i as f64 * 0.11;
            let d = (f.sample(x, y, 4) - f.sample(x + eps, y + eps, 4)).abs();
            assert!(d < 1e-3, "jump of {d} at ({x}, {y})");
        }
    }

    #[test]
    fn noise_field_seeds_differ() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        assert_eq!(a.seed(), 1);
        assert_eq!(NoiseField::default().seed(), 0);
        let differs = (0..50).any(|i| {
            let x = 0.3 + i as f64 * 0.61;
            a.sample(x, x * 0.5, 3) != b.sample(x, x * 0.5, 3)
        });
        assert!(differs);
    }

    #[test]
    fn noise_field_zero_octaves_is_zero() {
        assert_eq!(NoiseField::default().sample(0.4, 0.6, 0), 0.0);
    }
}
