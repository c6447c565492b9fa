#[cfg(feature = "approx")]
mod approx_impls {
    use approx::{AbsDiffEq, RelativeEq};

    use crate::imp_prelude::*;

    /// **Requires crate feature `"approx"`**
    impl<A, B, S, S2, Sh> AbsDiffEq<ArrayBase<S2, Sh>> for ArrayBase<S, Sh>
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
        Sh: Shape,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &ArrayBase<S2, Sh>, epsilon: A::Epsilon) -> bool {
            // Same `Sh` means the shapes already agree.
            self.as_slice()
                .iter()
                .zip(other.as_slice())
                .all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    /// **Requires crate feature `"approx"`**
    impl<A, B, S, S2, Sh> RelativeEq<ArrayBase<S2, Sh>> for ArrayBase<S, Sh>
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
        Sh: Shape,
    {
        fn default_max_relative() -> A::Epsilon {
            A::default_max_relative()
        }

        fn relative_eq(
            &self,
            other: &ArrayBase<S2, Sh>,
            epsilon: A::Epsilon,
            max_relative: A::Epsilon,
        ) -> bool {
            self.as_slice()
                .iter()
                .zip(other.as_slice())
                .all(move |(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
        }
    }
}
