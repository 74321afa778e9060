use crate::FixedDecimal;

use proptest::arbitrary::{Arbitrary, StrategyFor};
use proptest::prelude::*;
use proptest::strategy::Map;

impl Arbitrary for FixedDecimal {
    type Parameters = ();
    type Strategy = Map<StrategyFor<(i64, u8)>, fn((i64, u8)) -> Self>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // Any mantissa; places capped at the mantissa's digit capacity so
        // generated values look like parsed column data.
        any::<(i64, u8)>().prop_map(|(mantissa, places)| {
            FixedDecimal::new(mantissa, i32::from(places % 19))
        })
    }
}
