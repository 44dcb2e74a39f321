//! Ready made `is_smaller` strategies for `AvlTree`

use num_traits::Float;

/// `a < b` under `PartialOrd`
pub fn less<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// `a > b` under `PartialOrd`, for trees which iterate in descending order
pub fn greater<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}

/// Total order on floats which places NaN after every other value
/// Plain `<` is not a strict weak order once NaN is involved
pub fn float_less<F: Float>(a: &F, b: &F) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a < b,
        (false, true) => true,
        (true, _) => false,
    }
}

/// Compare by a key extracted from each value
pub fn by_key<T, K, G>(key: G) -> impl Fn(&T, &T) -> bool
where
    G: Fn(&T) -> K,
    K: PartialOrd,
{
    move |a, b| key(a) < key(b)
}
