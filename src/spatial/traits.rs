use meshmend_common::item_with;

/// Trait for floating-point types, so that bounds can be generic over {f32, f64} without having
/// to use [weird macros](meshmend_common::item_with).
pub trait Float: nalgebra::RealField + Copy {
    const ZERO: Self;
    const TWO: Self;

    /// Convert an element count to this type, for averaging.
    fn from_count(n: usize) -> Self;
}

// this macro lets us impl Float for both f32 and f64 without having to copy/paste,
// but it feels very goofy
item_with! {Real: f32, f64 =>
    impl Float for Real {
        const ZERO: Self = 0.0;
        const TWO: Self = 2.0;

        #[inline]
        fn from_count(n: usize) -> Self {
            n as Real
        }
    }
}
