use crate::FixedDecimal;
use rand::{
    distributions::{
        uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
        Distribution, Standard,
    },
    Rng,
};

impl Distribution<FixedDecimal> for Standard {
    fn sample<R>(&self, rng: &mut R) -> FixedDecimal
    where
        R: Rng + ?Sized,
    {
        // Any mantissa, places within the range a parsed column can carry
        // without the mantissa running out of digits.
        FixedDecimal::new(rng.gen(), rng.gen_range(0..=18))
    }
}

impl SampleUniform for FixedDecimal {
    type Sampler = FixedDecimalSampler;
}

/// Uniform sampler yielding decimals between two bounds, the way the
/// consuming generator draws random column values.
///
/// The sample keeps the higher places count of the two bounds and draws the
/// raw mantissa uniformly between the bounds' raw mantissas. Consistent with
/// the rest of this arithmetic, the bounds are *not* rescaled to a common
/// places count first; column ranges are expected to carry equal places,
/// like [`FixedDecimal::ONE`]..[`FixedDecimal::ONE_HUNDRED`].
///
/// # Example
///
/// ```
/// # use rand::{Rng, SeedableRng};
/// use rowgen_decimal::FixedDecimal;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(19620718);
/// let random = rng.gen_range(FixedDecimal::ONE..FixedDecimal::ONE_HUNDRED);
/// assert!(random.mantissa() >= 100 && random.mantissa() < 10_000);
/// assert_eq!(random.places(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedDecimalSampler {
    mantissa: UniformInt<i64>,
    places: i32,
}

impl UniformSampler for FixedDecimalSampler {
    type X = FixedDecimal;

    #[inline]
    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (*low.borrow(), *high.borrow());
        FixedDecimalSampler {
            mantissa: UniformInt::new(low.mantissa(), high.mantissa()),
            places: low.places().max(high.places()),
        }
    }

    #[inline]
    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (*low.borrow(), *high.borrow());
        FixedDecimalSampler {
            mantissa: UniformInt::new_inclusive(low.mantissa(), high.mantissa()),
            places: low.places().max(high.places()),
        }
    }

    #[inline]
    fn sample<R>(&self, rng: &mut R) -> FixedDecimal
    where
        R: Rng + ?Sized,
    {
        FixedDecimal::new(self.mantissa.sample(rng), self.places)
    }
}
