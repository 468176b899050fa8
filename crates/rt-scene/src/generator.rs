//! Seeded random source for procedural scenes.
//!
//! A [Generator] is created from a seed at the start of a compilation and lent
//! as `&mut` to the script, so every draw comes from a single stream. Given the
//! same seed and the same draw order the generated geometry is bit-for-bit
//! identical.

use rand::{distributions::WeightedIndex, prelude::Distribution, Rng as _, SeedableRng};

use crate::{color::Rgb, math::vec::Vec3, CompileError, Result, Rng};

pub struct Generator {
    seed: u64,
    rng: Rng,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Builds one value from the generator, see [Generator::choose_constructor]
pub type Constructor<'a, T> = &'a dyn Fn(&mut Generator) -> Result<T>;

impl Generator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Rng::seed_from_u64(seed),
        }
    }

    /// Restart the stream, every following draw replays the sequence of `seed`
    pub fn reseed(&mut self, seed: u64) {
        log::trace!("generator reseeded with {seed:#x}");
        *self = Self::from_seed(seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent generator for the `stream`-th partition of this seed.
    ///
    /// Only depends on the seed, never on draws already made.
    /// The derived seed is stable across builds and platforms.
    pub fn fork(&self, stream: u64) -> Generator {
        Generator::from_seed(splitmix64(self.seed ^ splitmix64(stream)))
    }

    /// Uniform in `[0, 1)`
    pub fn rand(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// Uniform in `[lo, hi)`
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.rand()
    }

    /// Each channel is the product of two uniform draws, which favours dark
    /// saturated colors over a plain uniform draw.
    pub fn random_color(&mut self) -> Rgb {
        let r = self.rand() * self.rand();
        let g = self.rand() * self.rand();
        let b = self.rand() * self.rand();
        Rgb::from_array([r, g, b])
    }

    /// Uniform point in `[0, size)^3`
    pub fn random_point_in_cube(&mut self, size: f32) -> Vec3 {
        let x = self.rand() * size;
        let y = self.rand() * size;
        let z = self.rand() * size;
        Vec3::new(x, y, z)
    }

    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(CompileError::validation("choice", "cannot choose from nothing"));
        }
        Ok(&items[self.rng.gen_range(0..items.len())])
    }

    /// Index drawn with probability proportional to its weight
    pub fn weighted_index(&mut self, weights: &[f32]) -> Result<usize> {
        if let Some(w) = weights.iter().find(|w| !w.is_finite()) {
            return Err(CompileError::validation(
                "choice weights",
                format!("{w} is not finite"),
            ));
        }
        let total: f32 = weights.iter().sum();
        if !total.is_finite() {
            return Err(CompileError::validation(
                "choice weights",
                "the weights sum overflows",
            ));
        }

        let distribution = WeightedIndex::new(weights)
            .map_err(|err| CompileError::validation("choice weights", err))?;
        Ok(distribution.sample(&mut self.rng))
    }

    /// Picks one of `constructors` according to the parallel `weights` and
    /// runs it with this generator. Only the chosen constructor draws.
    pub fn choose_constructor<T>(
        &mut self,
        constructors: &[Constructor<'_, T>],
        weights: &[f32],
    ) -> Result<T> {
        if constructors.len() != weights.len() {
            return Err(CompileError::validation(
                "choice weights",
                format!(
                    "{} weights given for {} constructors",
                    weights.len(),
                    constructors.len()
                ),
            ));
        }

        let idx = self.weighted_index(weights)?;
        constructors[idx](self)
    }
}

/// SplitMix64 finalizer, a fixed bijective mixing of 64 bits
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::{splitmix64, Constructor, Generator};
    use crate::{material::Material, CompileError, Result};

    fn draws(rng: &mut Generator, n: usize) -> Vec<f32> {
        (0..n).map(|_| rng.rand()).collect()
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Generator::from_seed(0xDEADBEEF);
        let mut b = Generator::from_seed(0xDEADBEEF);
        assert_eq!(draws(&mut a, 64), draws(&mut b, 64));

        let mut c = Generator::from_seed(1);
        assert_ne!(draws(&mut a, 64), draws(&mut c, 64));
    }

    #[test]
    fn reseed_replays() {
        let mut rng = Generator::from_seed(42);
        let first = draws(&mut rng, 16);
        rng.reseed(42);
        assert_eq!(draws(&mut rng, 16), first);
        assert_eq!(rng.seed(), 42);
    }

    #[test]
    fn draws_are_in_unit_interval() {
        let mut rng = Generator::from_seed(7);
        assert!(draws(&mut rng, 1000).iter().all(|f| (0.0..1.0).contains(f)));
        assert!((0..1000)
            .map(|_| rng.range(-11.0, 11.0))
            .all(|f| (-11.0..11.0).contains(&f)));
    }

    #[test]
    fn random_color_multiplies_two_draws() {
        let mut reference = Generator::from_seed(3);
        let expected: Vec<f32> = (0..3)
            .map(|_| reference.rand() * reference.rand())
            .collect();

        let mut rng = Generator::from_seed(3);
        assert_eq!(rng.random_color().to_array().to_vec(), expected);
    }

    #[test]
    fn random_color_is_biased_dark() {
        let mut rng = Generator::from_seed(11);
        let n = 4000;
        let mean = (0..n).map(|_| rng.random_color().to_array()[0]).sum::<f32>() / n as f32;
        // E[U1 * U2] = 1/4
        assert!((mean - 0.25).abs() < 0.02, "mean was {mean}");
    }

    #[test]
    fn weighted_choice_is_reproducible() {
        let matte: Constructor<Material> = &|rng| Material::matte(rng.random_color());
        let metallic: Constructor<Material> =
            &|rng| Material::metallic_fuzzed(rng.random_color(), 0.25 * rng.rand());
        let glass: Constructor<Material> = &|rng| Material::dielectric(1.0 + rng.rand());
        let ctors = [matte, metallic, glass];
        let weights = [0.8, 0.15, 0.05];

        let pick = |seed| -> Result<Vec<Material>> {
            let mut rng = Generator::from_seed(seed);
            (0..200)
                .map(|_| rng.choose_constructor(&ctors, &weights))
                .collect()
        };

        let a = pick(0xDEADBEEF).unwrap();
        let b = pick(0xDEADBEEF).unwrap();
        assert_eq!(a, b);

        let mattes = a
            .iter()
            .filter(|m| matches!(m, Material::Matte { .. }))
            .count();
        assert!(mattes > 120, "got {mattes} mattes");
    }

    #[test]
    fn invalid_weights() {
        let mut rng = Generator::from_seed(0);
        assert!(matches!(
            rng.weighted_index(&[]),
            Err(CompileError::Validation { .. })
        ));
        assert!(rng.weighted_index(&[0.0, 0.0]).is_err());
        assert!(rng.weighted_index(&[1.0, -1.0]).is_err());
        assert!(rng.weighted_index(&[f32::NAN, 1.0]).is_err());
        assert!(matches!(
            rng.weighted_index(&[f32::INFINITY, 1.0]),
            Err(CompileError::Validation { .. })
        ));
        assert!(matches!(
            rng.weighted_index(&[f32::MAX, f32::MAX]),
            Err(CompileError::Validation { .. })
        ));

        let only: Constructor<f32> = &|rng| Ok(rng.rand());
        assert!(rng.choose_constructor(&[only], &[0.5, 0.5]).is_err());
        assert!(rng.choose_constructor(&[only], &[f32::INFINITY]).is_err());
        assert_eq!(rng.weighted_index(&[0.0, 1.0, 0.0]).unwrap(), 1);
    }

    #[test]
    fn choice_from_items() {
        let mut rng = Generator::from_seed(5);
        let empty: [u8; 0] = [];
        assert!(rng.choice(&empty).is_err());
        assert!([1, 2, 3].contains(rng.choice(&[1, 2, 3]).unwrap()));
    }

    #[test]
    fn forks_do_not_touch_parent_stream() {
        let mut parent = Generator::from_seed(9);
        let mut fork_a = parent.fork(1);
        let mut fork_b = Generator::from_seed(9).fork(1);
        assert_eq!(draws(&mut fork_a, 8), draws(&mut fork_b, 8));
        assert_ne!(parent.fork(2).seed(), parent.fork(1).seed());

        let mut fresh = Generator::from_seed(9);
        assert_eq!(draws(&mut parent, 8), draws(&mut fresh, 8));
    }

    #[test]
    fn fork_seeds_are_pinned() {
        assert_eq!(splitmix64(0), 0xe220a8397b1dcdaf);
        assert_eq!(Generator::from_seed(9).fork(1).seed(), 0x33180454ba17a00c);
    }
}
