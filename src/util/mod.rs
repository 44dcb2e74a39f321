use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Generate a vector of values from a uniform distribution
/// # Arguments
/// `size` Size of the vector to generate
pub fn gen_uniform_vec(size: i32) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let uniform = Uniform::from(0.0..1001.0);
    (0..size).map(|_| uniform.sample(&mut rng)).collect()
}

/// Generate a vector of ascending values 0, 1, .., (size - 1)
/// # Arguments
/// `size` Size of the vector to generate
pub fn gen_asc_vec(size: i32) -> Vec<f64> {
    (0..size).map(|x| x as f64).collect()
}

/// Generate a vector of descending values (size - 1), .., 1, 0
/// # Arguments
/// `size` Size of the vector to generate
pub fn gen_desc_vec(size: i32) -> Vec<f64> {
    (0..size).rev().map(|x| x as f64).collect()
}

/// Generate the values 0, 1, .., (size - 1) in a shuffled order
/// The same `seed` always produces the same order
/// # Arguments
/// `size` Size of the vector to generate
/// `seed` Seed for the shuffle
pub fn gen_shuffled_vec(size: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..size).collect();
    values.shuffle(&mut rng);
    values
}

#[cfg(test)]
mod test {
    use crate::util::{gen_asc_vec, gen_desc_vec, gen_shuffled_vec};

    #[test]
    fn shuffle_is_a_permutation() {
        let mut values = gen_shuffled_vec(100, 1);
        assert_eq!(values, gen_shuffled_vec(100, 1));
        values.sort();
        assert_eq!(values, (0..100).collect::<Vec<i64>>());
    }

    #[test]
    fn asc_and_desc() {
        assert_eq!(gen_asc_vec(3), vec![0.0, 1.0, 2.0]);
        assert_eq!(gen_desc_vec(3), vec![2.0, 1.0, 0.0]);
    }
}
