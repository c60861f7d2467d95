/// Repeat one or more [items](https://doc.rust-lang.org/nightly/reference/items.html) for each
/// type `$Real`, with the type reachable inside the items as `$RealAlias`.
///
/// Mostly used to implement float-generic traits for `f32` and `f64` at once. Prefer a blanket
/// impl where one is possible.
///
/// ```
/// trait Half {
///     fn half(self) -> Self;
/// }
/// meshmend_common::item_with! {Real: f32, f64 =>
///     impl Half for Real {
///         fn half(self) -> Self {
///             self / 2.0
///         }
///     }
/// }
/// assert_eq!(3.0f64.half(), 1.5);
/// ```
#[macro_export]
macro_rules! item_with {
    {$RealAlias:ident: $Real:ty => $($imp:item)+} => {
        const _: () = { // anonymous module
            type $RealAlias = $Real;
            $($imp)+
        };
    };
    {$RealAlias:ident: $Real:ty, $($Rest:ty),+ => $($imp:item)+} => {
        $crate::item_with! {$RealAlias: $Real => $($imp)+}
        $crate::item_with! {$RealAlias: $($Rest),+ => $($imp)+}
    };
}
