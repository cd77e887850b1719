pub trait FloatExt: Sized {
    /// `self == other`
    fn eq(self, other: Self) -> bool;

    /// Cut off everything past `decimals` decimal places, rounding toward
    /// zero.
    fn truncate(self, decimals: u32) -> Self;
}

macro_rules! impl_float_ext {
    ( $ty:ty ) => {
        impl FloatExt for $ty {
            fn eq(self, other: Self) -> bool {
                (self - other).abs() < <$ty>::EPSILON
            }

            fn truncate(self, decimals: u32) -> Self {
                let factor = <$ty>::powi(10.0, decimals as i32);
                let scaled = self * factor;

                // Absorb representation error so that e.g. 15.15 does not
                // end up as 15.14.
                let nudge = <$ty>::EPSILON * scaled.abs().max(1.0) * 64.0;

                (scaled + nudge.copysign(scaled)).trunc() / factor
            }
        }
    };
}

impl_float_ext!(f32);
impl_float_ext!(f64);
