use quickcheck::{Arbitrary, Gen};

use crate::algorithms::big_digit::{self, BigDigit};
use crate::BigInt;

impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> BigInt {
        let limbs: Vec<BigDigit> = Vec::<BigDigit>::arbitrary(g)
            .into_iter()
            .map(|limb| limb % big_digit::BASE as BigDigit)
            .collect();
        BigInt::from_digits(bool::arbitrary(g), limbs)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = BigInt>> {
        // Shrink the sign away first, then let the limb vector shrink
        // toward fewer and smaller limbs.
        let negative = self.negative;
        let unsigned = if negative { vec![self.abs()] } else { vec![] };
        Box::new(unsigned.into_iter().chain(
            self.digits
                .shrink()
                .map(move |limbs| BigInt::from_digits(negative, limbs)),
        ))
    }
}
