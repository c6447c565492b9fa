//! Support for sealing the crate's capability traits.
//!
//! `Shape` and the `Data` family are bounds on public methods, so the
//! traits themselves must be public; requiring a method that mentions a
//! type third parties cannot name keeps them unimplementable elsewhere.
//! That leaves us free to grow the traits without breaking downstream
//! implementations, because there are none.

/// Pub, but unreachable from outside the crate, so only we can name it.
pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// This trait is private to implement; this method makes it
        /// impossible to implement outside of the defining crate.
        #[doc(hidden)]
        fn __private__(&self) -> crate::private::PrivateMarker;
    };
}

macro_rules! private_impl {
    () => {
        fn __private__(&self) -> crate::private::PrivateMarker {
            crate::private::PrivateMarker
        }
    };
}
